use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use super::Performable;
use crate::ability::Abilities;
use crate::errors::Result;

type ActionFn = dyn Fn(&Abilities) -> Result<()>;

/// Acción con nombre: una closure sobre el bundle de abilities.
///
/// Las acciones parametrizadas se construyen con funciones fábrica que
/// capturan el parámetro, p. ej. `CreateProject::named("x")`.
#[derive(Clone)]
pub struct Action {
    name: Cow<'static, str>,
    run: Rc<ActionFn>,
}

impl Action {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, run: F) -> Self
        where F: Fn(&Abilities) -> Result<()> + 'static
    {
        Self { name: name.into(),
               run: Rc::new(run) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Performable for Action {
    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn perform_as(&self, abilities: &Abilities) -> Result<()> {
        (self.run)(abilities)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Action").field(&self.name).finish()
    }
}
