use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cuenta no encontrada: {0}")]
    AccountNotFound(String),
    #[error("La cuenta ya existe: {0}")]
    AccountExists(String),
    #[error("Validación fallida: {0}")]
    Validation(String),
}
