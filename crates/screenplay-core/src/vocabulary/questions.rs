use super::query;
use crate::ability::Abilities;
use crate::driver::ProjectSummary;
use crate::errors::Result;
use crate::question::Question;

/// Proyectos que ve el actor en su sesión.
#[derive(Debug, Clone, Copy)]
pub struct ProjectsVisible;

impl Question for ProjectsVisible {
    type Answer = Vec<ProjectSummary>;

    fn describe(&self) -> String {
        "the visible projects".to_string()
    }

    fn answered_by(&self, abilities: &Abilities) -> Result<Self::Answer> {
        query(abilities, |d, name| d.projects(name))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IsAuthenticated;

impl Question for IsAuthenticated {
    type Answer = bool;

    fn describe(&self) -> String {
        "authenticated".to_string()
    }

    fn answered_by(&self, abilities: &Abilities) -> Result<bool> {
        query(abilities, |d, name| d.is_authenticated(name))
    }
}

/// Último error de autenticación (`None` si no hubo).
#[derive(Debug, Clone, Copy)]
pub struct AuthenticationError;

impl Question for AuthenticationError {
    type Answer = Option<String>;

    fn describe(&self) -> String {
        "the authentication error".to_string()
    }

    fn answered_by(&self, abilities: &Abilities) -> Result<Option<String>> {
        query(abilities, |d, name| d.authentication_error(name))
    }
}
