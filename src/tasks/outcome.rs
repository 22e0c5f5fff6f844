//! # Terminal result of one activation.
//!
//! [`Outcome`] is what a producer yields and what flows between combinators.
//! Exactly one variant holds per activation:
//!
//! ```text
//! Value(v)   → observer: on_value(v), on_complete()
//! Empty      → observer: on_complete()
//! Failure(e) → observer: on_failure(e)
//! ```

use crate::error::TaskError;

/// Terminal result of one activation: a value, nothing, or a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The task produced a value.
    Value(T),
    /// The task completed without a value.
    Empty,
    /// The task failed.
    Failure(TaskError),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the value, discarding `Empty` and `Failure`.
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the carried failure, if any.
    pub fn failure(&self) -> Option<&TaskError> {
        match self {
            Outcome::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// Maps the value, leaving `Empty`/`Failure` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Value(v) => Outcome::Value(f(v)),
            Outcome::Empty => Outcome::Empty,
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Converts into a `Result`, with `Empty` as `Ok(None)`.
    ///
    /// ```
    /// use monotask::{Outcome, TaskError};
    ///
    /// assert_eq!(Outcome::Value(1).into_result(), Ok(Some(1)));
    /// assert_eq!(Outcome::<i32>::Empty.into_result(), Ok(None));
    /// assert!(Outcome::<i32>::Failure(TaskError::fail("x")).into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<Option<T>, TaskError> {
        match self {
            Outcome::Value(v) => Ok(Some(v)),
            Outcome::Empty => Ok(None),
            Outcome::Failure(e) => Err(e),
        }
    }

    /// Short label of the variant for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Outcome::Value(_) => "value",
            Outcome::Empty => "empty",
            Outcome::Failure(_) => "failure",
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Outcome::Value(v),
            None => Outcome::Empty,
        }
    }
}

impl<T, E: Into<TaskError>> From<Result<T, E>> for Outcome<T> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Outcome::Value(v),
            Err(e) => Outcome::Failure(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        assert_eq!(Outcome::from(Some(3)), Outcome::Value(3));
        assert_eq!(Outcome::<u8>::from(None), Outcome::Empty);
    }

    #[test]
    fn test_from_result_keeps_error() {
        let out: Outcome<u8> = Err::<u8, _>(TaskError::fail("down")).into();
        assert_eq!(out.failure(), Some(&TaskError::fail("down")));
        assert!(!out.is_value());
    }

    #[test]
    fn test_map_only_touches_value() {
        assert_eq!(Outcome::Value(2).map(|v| v * 10), Outcome::Value(20));
        assert_eq!(Outcome::<i32>::Empty.map(|v| v * 10), Outcome::Empty);
        let failed = Outcome::<i32>::Failure(TaskError::fail("x")).map(|v| v * 10);
        assert!(failed.is_failure());
    }
}
