//! Sesión de un usuario: estado de autenticación, último error y proyectos.
//!
//! Los rechazos del dominio no son errores de Rust: se guardan en la sesión
//! para que quien la observe pueda leerlos. `error` sólo refleja el último
//! intento de autenticación; el rechazo al crear un proyecto va aparte, en
//! `project_error`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DomainError, Project};

pub const ACTIVATION_REQUIRED: &str = "You need to activate your account before signing in";
pub const SIGN_IN_REQUIRED: &str = "You need to sign in before creating a project";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    account: String,
    authenticated: bool,
    signed_in_at: Option<DateTime<Utc>>,
    error: Option<String>,
    project_error: Option<String>,
    projects: Vec<Project>,
}

impl Session {
    pub fn new(account: &str) -> Self {
        Session { id: Uuid::new_v4(),
                  account: account.to_string(),
                  authenticated: false,
                  signed_in_at: None,
                  error: None,
                  project_error: None,
                  projects: Vec::new() }
    }

    pub(crate) fn sign_in(&mut self) {
        self.authenticated = true;
        self.signed_in_at = Some(Utc::now());
        self.error = None;
    }

    pub(crate) fn reject(&mut self, reason: impl Into<String>) {
        self.authenticated = false;
        self.error = Some(reason.into());
    }

    /// Crea un proyecto si la sesión está autenticada; si no, deja el motivo
    /// en `project_error` y devuelve `Ok(false)`. El error de autenticación
    /// no se toca.
    pub fn create_project(&mut self, name: &str) -> Result<bool, DomainError> {
        let project = Project::new(name)?;
        if !self.authenticated {
            self.project_error = Some(SIGN_IN_REQUIRED.to_string());
            return Ok(false);
        }
        self.projects.push(project);
        self.project_error = None;
        Ok(true)
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn account(&self) -> &str { &self.account }
    pub fn is_authenticated(&self) -> bool { self.authenticated }
    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> { self.signed_in_at }
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }
    pub fn project_error(&self) -> Option<&str> { self.project_error.as_deref() }
    pub fn projects(&self) -> &[Project] { &self.projects }
}
