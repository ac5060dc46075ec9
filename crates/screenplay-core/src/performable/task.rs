use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use super::{perform_all, Performable};
use crate::ability::Abilities;
use crate::errors::Result;

/// Composición ordenada de pasos con un objetivo de más alto nivel.
///
/// El orden de declaración es el orden de ejecución y forma parte del
/// contrato: si el dominio exige "crear cuenta, luego activarla", reordenar
/// los pasos es un bug. Un fallo en un sub-paso aborta el resto.
#[derive(Clone)]
pub struct Task {
    name: Cow<'static, str>,
    steps: Vec<Rc<dyn Performable>>,
}

impl Task {
    pub fn where_(name: impl Into<Cow<'static, str>>, steps: Vec<Rc<dyn Performable>>) -> Self {
        Self { name: name.into(),
               steps }
    }

    /// Añade un paso al final. Pensado para definir la tarea una sola vez.
    pub fn then<P: Performable + 'static>(mut self, step: P) -> Self {
        self.steps.push(Rc::new(step));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_descriptions(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.describe()).collect()
    }
}

impl Performable for Task {
    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn perform_as(&self, abilities: &Abilities) -> Result<()> {
        let steps: Vec<&dyn Performable> = self.steps.iter().map(|s| s.as_ref()).collect();
        perform_all(abilities, &steps)
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
         .field("name", &self.name)
         .field("steps", &self.step_descriptions())
         .finish()
    }
}
