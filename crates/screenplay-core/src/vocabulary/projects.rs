use super::command;
use crate::ability::Abilities;
use crate::performable::Action;

pub struct CreateProject;

impl CreateProject {
    /// Crea un proyecto con el nombre dado en la sesión del actor.
    pub fn named(project: impl Into<String>) -> Action {
        let project: String = project.into();
        Action::new(format!("create a project named {project}"),
                    move |a: &Abilities| command(a, |d, name| d.create_project(name, &project)))
    }
}
