//! Escenarios de referencia escritos con el vocabulario del core.
//!
//! Cada función recibe un `Scenario` recién abierto y devuelve el primer
//! error (fallo de comprobación o de preparación).

use screenplay_core::matchers::{has_item, is, is_empty, matches_pattern};
use screenplay_core::{check_that, ActivateAccount, AuthenticationError, CreateAccount, CreateProject, IsAuthenticated,
                      ProjectSummary, ProjectsVisible, SignIn, SignUp};

use crate::errors::ScenarioError;
use crate::scenario::Scenario;

pub type Script = fn(&mut Scenario) -> Result<(), ScenarioError>;

/// Sue activa su cuenta y queda autenticada.
pub fn sue_signs_in_after_activation(scenario: &mut Scenario) -> Result<(), ScenarioError> {
    let sue = scenario.actor_called("Sue")?;
    sue.attempts_to(&[&CreateAccount::for_themselves(),
                      &ActivateAccount::theirs(),
                      &SignIn::with_their_account()])?;
    sue.attempts_to(&[&check_that(IsAuthenticated, is(true))])?;
    Ok(())
}

/// Tanya intenta entrar sin activar: sin sesión y con el motivo visible.
pub fn tanya_cannot_sign_in_without_activation(scenario: &mut Scenario) -> Result<(), ScenarioError> {
    let tanya = scenario.actor_called("Tanya")?;
    tanya.attempts_to(&[&CreateAccount::for_themselves(), &SignIn::with_their_account()])?;
    tanya.attempts_to(&[&check_that(IsAuthenticated, is(false)),
                        &check_that(AuthenticationError, matches_pattern("activate your account")?)])?;
    Ok(())
}

/// Bob se registra y crea un proyecto que sólo él ve.
pub fn bob_creates_a_project(scenario: &mut Scenario) -> Result<(), ScenarioError> {
    let bob = scenario.actor_called("Bob")?;
    bob.attempts_to(&[&SignUp::as_new_user(), &CreateProject::named("a-project")])?;
    bob.attempts_to(&[&check_that(ProjectsVisible, has_item(ProjectSummary::named("a-project")))])?;

    let sue = scenario.actor_called("Sue")?;
    sue.attempts_to(&[&SignUp::as_new_user(),
                      &check_that(ProjectsVisible, is(Vec::<ProjectSummary>::new()))])?;
    Ok(())
}

/// Sin activar la cuenta no se puede crear ningún proyecto.
pub fn unactivated_user_has_no_projects(scenario: &mut Scenario) -> Result<(), ScenarioError> {
    let tanya = scenario.actor_called("Tanya")?;
    tanya.attempts_to(&[&CreateAccount::for_themselves(),
                        &SignIn::with_their_account(),
                        &CreateProject::named("a-project"),
                        &check_that(ProjectsVisible, is_empty())])?;
    Ok(())
}

pub const ALL: &[(&str, Script)] = &[("Sue signs in after activating the account", sue_signs_in_after_activation),
                                     ("Tanya cannot sign in without activating", tanya_cannot_sign_in_without_activation),
                                     ("Bob creates a project nobody else sees", bob_creates_a_project),
                                     ("An unactivated user cannot create projects", unactivated_user_has_no_projects)];

/// Ejecuta un script sobre `scenario` y etiqueta el error con su título.
pub fn play(scenario: &mut Scenario, script: Script) -> Result<(), ScenarioError> {
    let outcome = script(scenario);
    outcome.map_err(|e| {
               let source = match e {
                   ScenarioError::Screenplay(s) | ScenarioError::Failed { source: s, .. } => s,
               };
               ScenarioError::Failed { title: scenario.title().to_string(),
                                       source }
           })
}
