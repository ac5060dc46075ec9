//! Contrato del driver de dominio.
//!
//! El core nunca habla con la aplicación directamente: toda interacción pasa
//! por un `DomainDriver` inyectado en las abilities de cada actor. Todas las
//! operaciones se indexan por nombre de actor.
//!
//! Los comandos (`&mut self`) pueden fallar con `DriverError` cuando el
//! escenario está mal montado (cuenta inexistente, duplicada...). Los fallos
//! de dominio esperables se guardan en la sesión y se leen con
//! `authentication_error`.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::errors::DriverError;

/// Registro mínimo de proyecto visible para un actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
}

impl ProjectSummary {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub trait DomainDriver {
    fn create_account(&mut self, name: &str) -> Result<(), DriverError>;

    fn activate_account(&mut self, name: &str) -> Result<(), DriverError>;

    /// Intenta autenticar. Un intento rechazado por el dominio no es `Err`:
    /// queda registrado en `authentication_error`.
    fn sign_in(&mut self, name: &str) -> Result<(), DriverError>;

    fn create_project(&mut self, name: &str, project: &str) -> Result<(), DriverError>;

    fn projects(&self, name: &str) -> Result<Vec<ProjectSummary>, DriverError>;

    fn is_authenticated(&self, name: &str) -> Result<bool, DriverError>;

    /// Último error de autenticación de la sesión, si lo hay.
    fn authentication_error(&self, name: &str) -> Result<Option<String>, DriverError>;
}

/// Handle compartido por todos los actores de un escenario.
pub type SharedDriver = Rc<RefCell<dyn DomainDriver>>;

/// Envuelve un driver concreto en un `SharedDriver`.
pub fn share<D: DomainDriver + 'static>(driver: D) -> SharedDriver {
    Rc::new(RefCell::new(driver))
}
