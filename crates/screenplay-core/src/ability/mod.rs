//! Bundle de abilities de un actor.
//!
//! Estructura tipada con un conjunto fijo de capacidades opcionales. Un bundle
//! nunca se modifica después de construirse: `with_*` devuelve un bundle nuevo
//! y deja intacto el original.

use std::fmt;
use std::rc::Rc;

use crate::driver::SharedDriver;
use crate::errors::{Result, ScreenplayError};
use crate::performable::{perform_all, Performable};

#[derive(Clone, Default)]
pub struct Abilities {
    name: Option<Rc<str>>,
    driver: Option<SharedDriver>,
}

impl Abilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nuevo bundle con el nombre del actor.
    pub fn with_name(&self, name: impl AsRef<str>) -> Self {
        Self { name: Some(Rc::from(name.as_ref())),
               driver: self.driver.clone() }
    }

    /// Nuevo bundle con acceso al driver de dominio.
    pub fn with_driver(&self, driver: SharedDriver) -> Self {
        Self { name: self.name.clone(),
               driver: Some(driver) }
    }

    pub fn name(&self) -> Result<&str> {
        self.name.as_deref().ok_or(ScreenplayError::MissingAbility("name"))
    }

    pub fn driver(&self) -> Result<&SharedDriver> {
        self.driver.as_ref().ok_or(ScreenplayError::MissingAbility("driver"))
    }

    /// `attempts_to` ligado al bundle: lo usan Tasks y Actions que delegan en
    /// otros pasos sin conocer al actor.
    pub fn attempts_to(&self, steps: &[&dyn Performable]) -> Result<()> {
        perform_all(self, steps)
    }
}

impl fmt::Debug for Abilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Abilities")
         .field("name", &self.name)
         .field("driver", &self.driver.as_ref().map(|_| "<driver>"))
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::performable::Action;

    fn push(log: &Rc<RefCell<Vec<String>>>, label: &'static str) -> Action {
        let log = Rc::clone(log);
        Action::new(label, move |a: &Abilities| {
            log.borrow_mut().push(format!("{}:{label}", a.name()?));
            Ok(())
        })
    }

    fn refuse(label: &'static str) -> Action {
        Action::new(label, |_: &Abilities| Err(ScreenplayError::MissingAbility("driver")))
    }

    #[test]
    fn nested_steps_run_through_the_bundle_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (push(&log, "a"), push(&log, "b"), push(&log, "c"));
        let inner = Action::new("inner", move |ab: &Abilities| ab.attempts_to(&[&a, &b]));

        let sue = Abilities::new().with_name("Sue");
        sue.attempts_to(&[&inner, &c]).unwrap();

        assert_eq!(*log.borrow(), vec!["Sue:a", "Sue:b", "Sue:c"]);
    }

    #[test]
    fn inner_failure_stops_the_outer_sequence() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, after_fail, outer_next) = (push(&log, "a"), push(&log, "after"), push(&log, "next"));
        let fail = refuse("fail");
        let inner = Action::new("inner", move |ab: &Abilities| ab.attempts_to(&[&a, &fail, &after_fail]));

        let bob = Abilities::new().with_name("Bob");
        let err = bob.attempts_to(&[&inner, &outer_next]).unwrap_err();

        assert_eq!(err, ScreenplayError::MissingAbility("driver"));
        assert_eq!(*log.borrow(), vec!["Bob:a"]);
    }

    #[test]
    fn empty_sequence_is_a_noop() {
        assert_eq!(Abilities::new().attempts_to(&[]), Ok(()));
    }

    #[test]
    fn extension_leaves_original_untouched() {
        let base = Abilities::new();
        let named = base.with_name("Sue");

        assert_eq!(named.name().unwrap(), "Sue");
        assert_eq!(base.name(), Err(ScreenplayError::MissingAbility("name")));
    }

    #[test]
    fn missing_driver_is_reported() {
        let abilities = Abilities::new().with_name("Tanya");
        assert!(matches!(abilities.driver(), Err(ScreenplayError::MissingAbility("driver"))));
    }
}
