//! Vocabulario de dominio: acciones, tareas y preguntas sobre cuentas,
//! sesiones y proyectos.
//!
//! Cada valor sólo ve el bundle que recibe; el nombre del actor y el driver
//! salen de ahí.

mod accounts;
mod projects;
mod questions;

pub use accounts::{ActivateAccount, CreateAccount, SignIn, SignUp};
pub use projects::CreateProject;
pub use questions::{AuthenticationError, IsAuthenticated, ProjectsVisible};

use crate::ability::Abilities;
use crate::driver::DomainDriver;
use crate::errors::{DriverError, Result};

/// Ejecuta un comando contra el driver en nombre del actor del bundle.
fn command<T, F>(abilities: &Abilities, f: F) -> Result<T>
    where F: FnOnce(&mut dyn DomainDriver, &str) -> Result<T, DriverError>
{
    let name = abilities.name()?;
    let mut driver = abilities.driver()?.borrow_mut();
    Ok(f(&mut *driver, name)?)
}

/// Lectura sin efectos del driver en nombre del actor del bundle.
fn query<T, F>(abilities: &Abilities, f: F) -> Result<T>
    where F: FnOnce(&dyn DomainDriver, &str) -> Result<T, DriverError>
{
    let name = abilities.name()?;
    let driver = abilities.driver()?.borrow();
    Ok(f(&*driver, name)?)
}
