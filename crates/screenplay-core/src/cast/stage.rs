use std::rc::Rc;

use indexmap::IndexMap;
use log::info;

use super::{Cast, Persona};
use crate::actor::Actor;
use crate::driver::SharedDriver;
use crate::errors::{Result, ScreenplayError};

/// Actores de un escenario.
///
/// Cada persona se construye en su primera mención con un bundle que apunta
/// al driver compartido del escenario y queda cacheada: menciones
/// posteriores devuelven el mismo actor. Un `Stage` vive lo que dura un
/// escenario; no se comparte entre escenarios.
pub struct Stage {
    driver: SharedDriver,
    cast: Cast,
    actors: IndexMap<Persona, Actor>,
}

impl Stage {
    pub fn new(driver: SharedDriver, cast: Cast) -> Self {
        Self { driver,
               cast,
               actors: IndexMap::new() }
    }

    /// Resuelve un nombre tal como aparece en el texto del step.
    pub fn actor_called(&mut self, name: &str) -> Result<Actor> {
        let persona = self.cast.resolve(name)?;
        self.actor(persona)
    }

    pub fn actor(&mut self, persona: Persona) -> Result<Actor> {
        if !self.cast.admits(persona) {
            return Err(ScreenplayError::NotInCast(persona));
        }
        let driver = &self.driver;
        let actor = self.actors.entry(persona).or_insert_with(|| {
                                                  info!("casting {persona}");
                                                  Actor::named(persona.name()).who_can_use(Rc::clone(driver))
                                              });
        Ok(actor.clone())
    }

    /// Personas ya resueltas, en orden de primera mención.
    pub fn actors_on_stage(&self) -> Vec<Persona> {
        self.actors.keys().copied().collect()
    }

    pub fn cast(&self) -> &Cast {
        &self.cast
    }

    pub fn driver(&self) -> &SharedDriver {
        &self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{share, DomainDriver, ProjectSummary};
    use crate::errors::DriverError;

    struct NullDriver;

    impl DomainDriver for NullDriver {
        fn create_account(&mut self, _name: &str) -> std::result::Result<(), DriverError> {
            Ok(())
        }
        fn activate_account(&mut self, _name: &str) -> std::result::Result<(), DriverError> {
            Ok(())
        }
        fn sign_in(&mut self, _name: &str) -> std::result::Result<(), DriverError> {
            Ok(())
        }
        fn create_project(&mut self, _name: &str, _project: &str) -> std::result::Result<(), DriverError> {
            Ok(())
        }
        fn projects(&self, _name: &str) -> std::result::Result<Vec<ProjectSummary>, DriverError> {
            Ok(vec![])
        }
        fn is_authenticated(&self, _name: &str) -> std::result::Result<bool, DriverError> {
            Ok(false)
        }
        fn authentication_error(&self, _name: &str) -> std::result::Result<Option<String>, DriverError> {
            Ok(None)
        }
    }

    #[test]
    fn first_mention_casts_and_later_mentions_reuse() {
        let mut stage = Stage::new(share(NullDriver), Cast::everyone());

        let first = stage.actor_called("Sue").unwrap();
        let again = stage.actor_called("Sue").unwrap();
        let bob = stage.actor_called("Bob").unwrap();

        assert!(first.same_identity(&again));
        assert!(!first.same_identity(&bob));
        assert_eq!(stage.actors_on_stage(), vec![Persona::Sue, Persona::Bob]);
    }

    #[test]
    fn cast_actors_share_the_scenario_driver() {
        let mut stage = Stage::new(share(NullDriver), Cast::everyone());
        let tanya = stage.actor(Persona::Tanya).unwrap();
        let driver = tanya.abilities().driver().unwrap();
        assert!(Rc::ptr_eq(driver, stage.driver()));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut stage = Stage::new(share(NullDriver), Cast::new([Persona::Sue]));
        assert_eq!(stage.actor_called("Zed").unwrap_err(), ScreenplayError::UnknownActor("Zed".into()));
        assert_eq!(stage.actor(Persona::Tanya).unwrap_err(), ScreenplayError::NotInCast(Persona::Tanya));
        assert!(stage.actors_on_stage().is_empty());
    }
}
