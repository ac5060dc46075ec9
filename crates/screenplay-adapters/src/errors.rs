//! Traducción de errores del dominio al contrato del driver.

use screenplay_core::DriverError;
use screenplay_domain::DomainError;

pub fn to_driver_error(err: DomainError) -> DriverError {
    match err {
        DomainError::AccountNotFound(name) => DriverError::UnknownAccount(name),
        DomainError::AccountExists(name) => DriverError::AccountExists(name),
        other @ DomainError::Validation(_) => DriverError::Rejected(other.to_string()),
    }
}
