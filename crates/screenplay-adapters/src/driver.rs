//! AppDriver: `DomainDriver` sobre `screenplay_domain::App`.
//!
//! - Los comandos delegan en la `App` y traducen `DomainError`.
//! - Las lecturas de un usuario sin sesión devuelven los valores de una
//!   sesión anónima: sin proyectos, sin autenticar, sin error.

use log::debug;
use screenplay_core::{DomainDriver, DriverError, ProjectSummary};
use screenplay_domain::{App, Session};

use crate::errors::to_driver_error;

#[derive(Debug, Default)]
pub struct AppDriver {
    app: App,
}

impl AppDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    fn session(&self, name: &str) -> Option<&Session> {
        self.app.session(name)
    }
}

impl DomainDriver for AppDriver {
    fn create_account(&mut self, name: &str) -> Result<(), DriverError> {
        self.app.create_account(name).map(|_| ()).map_err(to_driver_error)
    }

    fn activate_account(&mut self, name: &str) -> Result<(), DriverError> {
        self.app.activate(name).map_err(to_driver_error)
    }

    fn sign_in(&mut self, name: &str) -> Result<(), DriverError> {
        let ok = self.app.authenticate(name);
        debug!("sign in {name}: authenticated={ok}");
        Ok(())
    }

    fn create_project(&mut self, name: &str, project: &str) -> Result<(), DriverError> {
        let created = self.app
                          .session_mut(name)
                          .create_project(project)
                          .map_err(to_driver_error)?;
        debug!("create project {project} for {name}: created={created}");
        Ok(())
    }

    fn projects(&self, name: &str) -> Result<Vec<ProjectSummary>, DriverError> {
        Ok(self.session(name)
               .map(|s| s.projects().iter().map(|p| ProjectSummary::named(p.name())).collect())
               .unwrap_or_default())
    }

    fn is_authenticated(&self, name: &str) -> Result<bool, DriverError> {
        Ok(self.session(name).is_some_and(Session::is_authenticated))
    }

    fn authentication_error(&self, name: &str) -> Result<Option<String>, DriverError> {
        Ok(self.session(name).and_then(|s| s.error()).map(str::to_string))
    }
}
