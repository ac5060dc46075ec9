use std::fmt::Debug;

use super::{equal_to, was, EqualTo, Matcher};

#[derive(Debug, Clone)]
pub struct HasItem<M> {
    item: M,
}

/// La colección contiene un elemento igual a `item`.
pub fn has_item<V>(item: V) -> HasItem<EqualTo<V>> {
    HasItem { item: equal_to(item) }
}

/// La colección contiene algún elemento aceptado por `matcher`.
pub fn has_item_matching<M>(matcher: M) -> HasItem<M> {
    HasItem { item: matcher }
}

impl<T, M> Matcher<[T]> for HasItem<M>
    where T: Debug,
          M: Matcher<T>
{
    fn matches(&self, actual: &[T]) -> bool {
        actual.iter().any(|item| self.item.matches(item))
    }

    fn describe(&self) -> String {
        format!("a collection containing {}", self.item.describe())
    }

    fn describe_mismatch(&self, actual: &[T]) -> String {
        was(actual)
    }
}

impl<T, M> Matcher<Vec<T>> for HasItem<M>
    where T: Debug,
          M: Matcher<T>
{
    fn matches(&self, actual: &Vec<T>) -> bool {
        Matcher::<[T]>::matches(self, actual.as_slice())
    }

    fn describe(&self) -> String {
        Matcher::<[T]>::describe(self)
    }

    fn describe_mismatch(&self, actual: &Vec<T>) -> String {
        was(actual)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

pub fn is_empty() -> IsEmpty {
    IsEmpty
}

impl<T: Debug> Matcher<[T]> for IsEmpty {
    fn matches(&self, actual: &[T]) -> bool {
        actual.is_empty()
    }

    fn describe(&self) -> String {
        "an empty collection".to_string()
    }

    fn describe_mismatch(&self, actual: &[T]) -> String {
        was(actual)
    }
}

impl<T: Debug> Matcher<Vec<T>> for IsEmpty {
    fn matches(&self, actual: &Vec<T>) -> bool {
        actual.is_empty()
    }

    fn describe(&self) -> String {
        "an empty collection".to_string()
    }

    fn describe_mismatch(&self, actual: &Vec<T>) -> String {
        was(actual)
    }
}
