//! Actor: identidad + bundle de abilities congelado.
//!
//! Es el único punto de entrada para ejecutar pasos y evaluar Questions. El
//! actor no añade comportamiento propio: todo lo que hace lo hace a través de
//! su bundle, por eso los pasos son reutilizables entre actores.

use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::ability::Abilities;
use crate::driver::SharedDriver;
use crate::errors::Result;
use crate::performable::{perform_all, Performable};
use crate::question::Question;

#[derive(Clone)]
pub struct Actor {
    name: Rc<str>,
    abilities: Abilities,
}

impl Actor {
    /// Construye un actor a partir de un bundle que debe incluir `name`.
    pub fn new(abilities: Abilities) -> Result<Self> {
        let name: Rc<str> = Rc::from(abilities.name()?);
        Ok(Self { name, abilities })
    }

    pub fn named(name: impl AsRef<str>) -> Self {
        let name: Rc<str> = Rc::from(name.as_ref());
        let abilities = Abilities::new().with_name(&*name);
        Self { name, abilities }
    }

    /// Nuevo actor con el mismo nombre y acceso a `driver`. El actor
    /// original conserva su bundle.
    pub fn who_can_use(&self, driver: SharedDriver) -> Self {
        Self { name: Rc::clone(&self.name),
               abilities: self.abilities.with_driver(driver) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abilities(&self) -> &Abilities {
        &self.abilities
    }

    /// `true` si ambos valores comparten identidad, no sólo el nombre. La
    /// identidad nace con `new`/`named` y la heredan los actores derivados
    /// con `who_can_use`, aunque sus bundles sean distintos; no compara
    /// abilities. Dos `Actor::named("Sue")` independientes no la comparten.
    pub fn same_identity(&self, other: &Actor) -> bool {
        Rc::ptr_eq(&self.name, &other.name)
    }

    /// Ejecuta los pasos en orden con el bundle del actor. El primer error
    /// se devuelve sin ejecutar los pasos restantes.
    pub fn attempts_to(&self, steps: &[&dyn Performable]) -> Result<()> {
        perform_all(&self.abilities, steps)
    }

    pub fn asks_for<Q: Question>(&self, question: &Q) -> Result<Q::Answer> {
        debug!("{} asks for {}", self.name, question.describe());
        question.answered_by(&self.abilities)
    }

    /// `attempts_to` ligado a este actor, utilizable sin el actor.
    pub fn entry_point(&self) -> AttemptsTo {
        AttemptsTo { abilities: self.abilities.clone() }
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
         .field("name", &self.name)
         .field("abilities", &self.abilities)
         .finish()
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct AttemptsTo {
    abilities: Abilities,
}

impl AttemptsTo {
    pub fn call(&self, steps: &[&dyn Performable]) -> Result<()> {
        perform_all(&self.abilities, steps)
    }
}
