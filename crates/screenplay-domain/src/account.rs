// account.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Cuenta de usuario. Se crea sin activar; sólo una cuenta activada puede
/// iniciar sesión.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    name: String,
    created_at: DateTime<Utc>,
    activated_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("El nombre de la cuenta no puede estar vacío".to_string()));
        }
        Ok(Account { name: name.to_string(),
                     created_at: Utc::now(),
                     activated_at: None })
    }

    /// Activa la cuenta. Activar dos veces conserva la fecha original.
    pub fn activate(&mut self) {
        if self.activated_at.is_none() {
            self.activated_at = Some(Utc::now());
        }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn activated_at(&self) -> Option<DateTime<Utc>> { self.activated_at }
    pub fn is_activated(&self) -> bool { self.activated_at.is_some() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_is_not_activated() {
        let acc = Account::new("Sue").unwrap();
        assert_eq!(acc.name(), "Sue");
        assert!(!acc.is_activated());
    }

    #[test]
    fn activation_is_idempotent() {
        let mut acc = Account::new("Sue").unwrap();
        acc.activate();
        let first = acc.activated_at();
        acc.activate();
        assert!(acc.is_activated());
        assert_eq!(acc.activated_at(), first);
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(Account::new("  "), Err(DomainError::Validation(_))));
    }
}
