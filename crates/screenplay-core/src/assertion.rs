//! Puente entre Questions y matchers.
//!
//! `check_that(question, matcher)` devuelve un paso más para `attempts_to`,
//! de modo que "hacer" y "comprobar" comparten la misma primitiva de
//! ejecución. La comprobación no tiene más efectos que evaluar la Question:
//! repetirla sin cambios en el dominio da siempre el mismo resultado.

use log::warn;

use crate::ability::Abilities;
use crate::errors::{Result, ScreenplayError};
use crate::matchers::Matcher;
use crate::performable::Performable;
use crate::question::Question;

/// Compara `actual` con `matcher`; en caso de desajuste devuelve
/// `AssertionFailed` con la descripción esperado/real.
pub fn assert_that<T, M>(subject: &str, actual: &T, matcher: &M) -> Result<()>
    where T: ?Sized,
          M: Matcher<T> + ?Sized
{
    if matcher.matches(actual) {
        return Ok(());
    }
    let err = ScreenplayError::AssertionFailed { subject: subject.to_string(),
                                                 expected: matcher.describe(),
                                                 actual: matcher.describe_mismatch(actual) };
    warn!("{err}");
    Err(err)
}

#[derive(Debug, Clone)]
pub struct Check<Q, M> {
    question: Q,
    matcher: M,
}

pub fn check_that<Q, M>(question: Q, matcher: M) -> Check<Q, M>
    where Q: Question,
          M: Matcher<Q::Answer>
{
    Check { question, matcher }
}

impl<Q, M> Performable for Check<Q, M>
    where Q: Question,
          M: Matcher<Q::Answer>
{
    fn describe(&self) -> String {
        format!("check that {} is {}", self.question.describe(), self.matcher.describe())
    }

    fn perform_as(&self, abilities: &Abilities) -> Result<()> {
        let actual = self.question.answered_by(abilities)?;
        assert_that(&self.question.describe(), &actual, &self.matcher)
    }
}
