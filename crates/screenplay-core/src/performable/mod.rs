//! Pasos ejecutables por un actor: `Action` y `Task`.
//!
//! Un `Performable` es una función del bundle de abilities que produce un
//! efecto. No guarda estado ni conoce al actor que lo ejecuta, por lo que el
//! mismo valor puede reutilizarse con cualquier actor.

mod action;
mod task;

pub use action::Action;
pub use task::Task;

use log::debug;

use crate::ability::Abilities;
use crate::errors::Result;

pub trait Performable {
    /// Descripción legible del paso (se usa en logs y en fallos).
    fn describe(&self) -> String;

    fn perform_as(&self, abilities: &Abilities) -> Result<()>;
}

/// Ejecuta `steps` en orden con el mismo bundle. El primer `Err` corta la
/// secuencia y se devuelve tal cual; sin steps no hace nada.
pub fn perform_all(abilities: &Abilities, steps: &[&dyn Performable]) -> Result<()> {
    for step in steps {
        debug!("{} attempts to {}", abilities.name().unwrap_or("<anonymous>"), step.describe());
        step.perform_as(abilities)?;
    }
    Ok(())
}

impl<P: Performable + ?Sized> Performable for std::rc::Rc<P> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn perform_as(&self, abilities: &Abilities) -> Result<()> {
        (**self).perform_as(abilities)
    }
}

impl<P: Performable + ?Sized> Performable for Box<P> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn perform_as(&self, abilities: &Abilities) -> Result<()> {
        (**self).perform_as(abilities)
    }
}
