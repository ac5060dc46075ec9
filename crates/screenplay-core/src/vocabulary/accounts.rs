use super::command;
use crate::ability::Abilities;
use crate::errors::Result;
use crate::performable::{Action, Performable, Task};

pub struct CreateAccount;

impl CreateAccount {
    pub fn for_themselves() -> Action {
        Action::new("create an account for themselves",
                    |a: &Abilities| command(a, |d, name| d.create_account(name)))
    }
}

/// Activa la cuenta del actor. Activar también inicia sesión.
pub struct ActivateAccount;

impl ActivateAccount {
    pub fn theirs() -> Action {
        Action::new("activate their account",
                    |a: &Abilities| {
                        command(a, |d, name| {
                            d.activate_account(name)?;
                            d.sign_in(name)
                        })
                    })
    }
}

impl Performable for ActivateAccount {
    fn describe(&self) -> String {
        Self::theirs().describe()
    }

    fn perform_as(&self, abilities: &Abilities) -> Result<()> {
        Self::theirs().perform_as(abilities)
    }
}

pub struct SignIn;

impl SignIn {
    pub fn with_their_account() -> Action {
        Action::new("sign in", |a: &Abilities| command(a, |d, name| d.sign_in(name)))
    }
}

impl Performable for SignIn {
    fn describe(&self) -> String {
        Self::with_their_account().describe()
    }

    fn perform_as(&self, abilities: &Abilities) -> Result<()> {
        Self::with_their_account().perform_as(abilities)
    }
}

/// Alta completa: crear la cuenta y después activarla. El orden importa.
pub struct SignUp;

impl SignUp {
    pub fn as_new_user() -> Task {
        Task::where_("sign up", vec![]).then(CreateAccount::for_themselves())
                                       .then(ActivateAccount::theirs())
    }
}

impl Performable for SignUp {
    fn describe(&self) -> String {
        Self::as_new_user().describe()
    }

    fn perform_as(&self, abilities: &Abilities) -> Result<()> {
        Self::as_new_user().perform_as(abilities)
    }
}
