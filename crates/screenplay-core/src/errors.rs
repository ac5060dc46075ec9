//! Errores del core screenplay.
//!
//! Nada en el core captura ni reintenta: todo `Err` sube hasta el runner de
//! escenarios, que marca el escenario como fallido.

use thiserror::Error;

use crate::cast::Persona;

/// Error devuelto por un `DomainDriver` cuando rechaza un comando.
///
/// Los fallos de dominio "esperables" (p. ej. autenticarse sin activar la
/// cuenta) NO llegan aquí: el driver los guarda y se observan con Questions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("unknown account: {0}")]
    UnknownAccount(String),
    #[error("account already exists: {0}")]
    AccountExists(String),
    #[error("rejected by application: {0}")]
    Rejected(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenplayError {
    /// Un matcher no aceptó la respuesta de una Question (`check_that`).
    #[error("{subject}\nExpected: {expected}\n     but: {actual}")]
    AssertionFailed { subject: String, expected: String, actual: String },
    /// El bundle de abilities no tiene la capacidad pedida.
    #[error("missing ability: {0}")]
    MissingAbility(&'static str),
    #[error("driver error: {0}")]
    Driver(#[from] DriverError),
    #[error("unknown actor: {0}")]
    UnknownActor(String),
    #[error("actor {0} is not part of the cast")]
    NotInCast(Persona),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T, E = ScreenplayError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_failed_format() {
        let err = ScreenplayError::AssertionFailed { subject: "is authenticated".into(),
                                                     expected: "<true>".into(),
                                                     actual: "was <false>".into() };
        assert_eq!(err.to_string(), "is authenticated\nExpected: <true>\n     but: was <false>");
    }

    #[test]
    fn driver_error_from() {
        let err: ScreenplayError = DriverError::UnknownAccount("Sue".into()).into();
        assert_eq!(err.to_string(), "driver error: unknown account: Sue");
    }

    #[test]
    fn not_in_cast_format() {
        let err = ScreenplayError::NotInCast(Persona::Bob);
        assert_eq!(err.to_string(), "actor Bob is not part of the cast");
    }
}
