//! Matchers estilo hamcrest.
//!
//! Un `Matcher` es un predicado con descripción: sabe decir qué esperaba y
//! por qué el valor real no encaja. `check_that` y `assert_that` delegan en
//! estas descripciones para construir el mensaje de fallo.

mod collection;
mod basic;
mod text;

pub use self::collection::{has_item, has_item_matching, is_empty, HasItem, IsEmpty};
pub use self::basic::{all_of, equal_to, is, is_not, not, AllOf, EqualTo, Not};
pub use self::text::{contains_string, matches_pattern, ContainsString, MatchesPattern, TextValue};

pub trait Matcher<T: ?Sized> {
    fn matches(&self, actual: &T) -> bool;

    /// Lo esperado, p. ej. `<true>` o `a string matching /x/`.
    fn describe(&self) -> String;

    /// Explicación del desajuste, p. ej. `was <false>`.
    fn describe_mismatch(&self, actual: &T) -> String;
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        (**self).describe_mismatch(actual)
    }
}

pub(crate) fn was<T: std::fmt::Debug + ?Sized>(actual: &T) -> String {
    format!("was <{actual:?}>")
}
