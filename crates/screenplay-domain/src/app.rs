//! Aplicación en memoria: cuentas y sesiones indexadas por nombre.
//!
//! Una instancia por escenario; no hay estado global.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::session::ACTIVATION_REQUIRED;
use crate::{Account, DomainError, Session};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct App {
    accounts: IndexMap<String, Account>,
    sessions: IndexMap<String, Session>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_account(&mut self, name: &str) -> Result<&Account, DomainError> {
        let account = Account::new(name)?;
        let key = account.name().to_string();
        if self.accounts.contains_key(&key) {
            return Err(DomainError::AccountExists(key));
        }
        debug!("account created: {key}");
        Ok(self.accounts.entry(key).or_insert(account))
    }

    pub fn account(&self, name: &str) -> Result<&Account, DomainError> {
        self.accounts.get(name).ok_or_else(|| DomainError::AccountNotFound(name.to_string()))
    }

    pub fn activate(&mut self, name: &str) -> Result<(), DomainError> {
        let account = self.accounts
                          .get_mut(name)
                          .ok_or_else(|| DomainError::AccountNotFound(name.to_string()))?;
        account.activate();
        debug!("account activated: {name}");
        Ok(())
    }

    /// Intenta autenticar. El resultado queda en la sesión del usuario
    /// (autenticada, o con el motivo del rechazo en `error`).
    pub fn authenticate(&mut self, name: &str) -> bool {
        let verdict = match self.accounts.get(name) {
            None => Err(format!("No account found for {name}")),
            Some(account) if !account.is_activated() => Err(ACTIVATION_REQUIRED.to_string()),
            Some(_) => Ok(()),
        };
        let session = self.sessions
                          .entry(name.to_string())
                          .or_insert_with(|| Session::new(name));
        match verdict {
            Ok(()) => session.sign_in(),
            Err(reason) => {
                debug!("authentication rejected for {name}: {reason}");
                session.reject(reason)
            }
        }
        session.is_authenticated()
    }

    pub fn session(&self, name: &str) -> Option<&Session> {
        self.sessions.get(name)
    }

    /// Sesión del usuario, creándola (sin autenticar) si no existía.
    pub fn session_mut(&mut self, name: &str) -> &mut Session {
        self.sessions
            .entry(name.to_string())
            .or_insert_with(|| Session::new(name))
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}
