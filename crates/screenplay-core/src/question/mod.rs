//! Questions: observaciones sin efectos sobre el bundle de abilities.
//!
//! Una Question puede evaluarse cuantas veces se quiera; con el estado de
//! dominio sin cambios, la respuesta es siempre la misma.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::ability::Abilities;
use crate::errors::Result;

pub trait Question {
    type Answer;

    fn describe(&self) -> String;

    fn answered_by(&self, abilities: &Abilities) -> Result<Self::Answer>;
}

impl<Q: Question + ?Sized> Question for &Q {
    type Answer = Q::Answer;

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn answered_by(&self, abilities: &Abilities) -> Result<Self::Answer> {
        (**self).answered_by(abilities)
    }
}

/// Question construida a partir de una closure.
pub struct Observation<T> {
    name: Cow<'static, str>,
    observe: Rc<dyn Fn(&Abilities) -> Result<T>>,
}

/// Atajo para `Observation::new`.
pub fn observe<T, F>(name: impl Into<Cow<'static, str>>, f: F) -> Observation<T>
    where F: Fn(&Abilities) -> Result<T> + 'static
{
    Observation::new(name, f)
}

impl<T> Observation<T> {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
        where F: Fn(&Abilities) -> Result<T> + 'static
    {
        Self { name: name.into(),
               observe: Rc::new(f) }
    }
}

impl<T> Clone for Observation<T> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(),
               observe: Rc::clone(&self.observe) }
    }
}

impl<T> Question for Observation<T> {
    type Answer = T;

    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn answered_by(&self, abilities: &Abilities) -> Result<T> {
        (self.observe)(abilities)
    }
}

impl<T> fmt::Debug for Observation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Observation").field(&self.name).finish()
    }
}
