use std::fmt::Debug;

use super::{was, Matcher};

#[derive(Debug, Clone)]
pub struct EqualTo<V> {
    expected: V,
}

pub fn equal_to<V>(expected: V) -> EqualTo<V> {
    EqualTo { expected }
}

/// Azúcar para `equal_to`: `check_that(IsAuthenticated, is(true))`.
pub fn is<V>(expected: V) -> EqualTo<V> {
    equal_to(expected)
}

pub fn is_not<V>(unexpected: V) -> Not<EqualTo<V>> {
    not(equal_to(unexpected))
}

impl<T, V> Matcher<T> for EqualTo<V>
    where T: PartialEq<V> + Debug + ?Sized,
          V: Debug
{
    fn matches(&self, actual: &T) -> bool {
        *actual == self.expected
    }

    fn describe(&self) -> String {
        format!("<{:?}>", self.expected)
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        was(actual)
    }
}

#[derive(Debug, Clone)]
pub struct Not<M> {
    inner: M,
}

pub fn not<M>(inner: M) -> Not<M> {
    Not { inner }
}

impl<T, M> Matcher<T> for Not<M>
    where T: Debug + ?Sized,
          M: Matcher<T>
{
    fn matches(&self, actual: &T) -> bool {
        !self.inner.matches(actual)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        was(actual)
    }
}

/// Todos los matchers deben aceptar el valor.
pub struct AllOf<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

pub fn all_of<T: ?Sized>(matchers: Vec<Box<dyn Matcher<T>>>) -> AllOf<T> {
    AllOf { matchers }
}

impl<T: ?Sized> Matcher<T> for AllOf<T> {
    fn matches(&self, actual: &T) -> bool {
        self.matchers.iter().all(|m| m.matches(actual))
    }

    fn describe(&self) -> String {
        self.matchers
            .iter()
            .map(|m| format!("({})", m.describe()))
            .collect::<Vec<_>>()
            .join(" and ")
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        match self.matchers.iter().find(|m| !m.matches(actual)) {
            Some(failing) => format!("{} {}", failing.describe(), failing.describe_mismatch(actual)),
            None => String::new(),
        }
    }
}
