//! `DefaultCase` — The fallback used when no case matches
//!
//! Three constructors cover the three ways a caller can spell a fallback:
//!
//! - [`DefaultCase::empty`] — the absent value (`()`, `None`, ...)
//! - [`DefaultCase::value`] — a precomputed value, returned as-is
//! - [`DefaultCase::lazy`] — a thunk, run only when nothing matched
//!
//! Internally there are only two shapes: a stored value or a thunk.
//! `empty()` stores `R::default()`.

use std::fmt::{self, Debug};

enum Fallback<'a, R> {
    Value(R),
    Lazy(Box<dyn Fn() -> R + 'a>),
}

/// Fallback descriptor for a match.
///
/// # Laziness
///
/// A lazy default is never invoked while resolving a matched case, and is
/// invoked at most once per match evaluation otherwise.
///
/// # Example
///
/// ```
/// use kase::DefaultCase;
///
/// assert_eq!(DefaultCase::value(-1).resolve(), -1);
/// assert_eq!(DefaultCase::lazy(|| 42).resolve(), 42);
/// assert_eq!(DefaultCase::<Option<u8>>::empty().resolve(), None);
/// ```
pub struct DefaultCase<'a, R> {
    fallback: Fallback<'a, R>,
}

impl<'a, R> DefaultCase<'a, R> {
    /// A default that resolves to `value`, unchanged.
    ///
    /// Falsy values (`0`, `""`, `false`) are kept as they are.
    pub fn value(value: R) -> Self {
        Self {
            fallback: Fallback::Value(value),
        }
    }

    /// A default computed by `thunk` when, and only when, it is needed.
    ///
    /// The thunk is `Fn`, not `FnOnce`, because a [`Match`](crate::Match)
    /// table may resolve its default once per evaluation. A thunk cannot
    /// move captured data out; clone it inside the thunk, or pass the data
    /// to [`value`](Self::value) when it is already computed.
    ///
    /// ```
    /// use kase::{match_on, Case, DefaultCase};
    ///
    /// let fallback = vec![1, 2, 3];
    /// let result = match_on(
    ///     &0_u8,
    ///     DefaultCase::lazy(|| fallback.clone()),
    ///     [Case::literal(1, |_| Vec::new())],
    /// );
    /// assert_eq!(result, fallback);
    /// ```
    pub fn lazy(thunk: impl Fn() -> R + 'a) -> Self {
        Self {
            fallback: Fallback::Lazy(Box::new(thunk)),
        }
    }

    /// A default resolving to the absent value of `R`.
    ///
    /// For `()` this is the void result; for `Option<_>` it is `None`.
    #[must_use]
    pub fn empty() -> Self
    where
        R: Default,
    {
        Self::value(R::default())
    }

    /// Returns `true` if this default defers to a thunk.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        matches!(self.fallback, Fallback::Lazy(_))
    }

    /// Consume the default and produce its result.
    pub fn resolve(self) -> R {
        match self.fallback {
            Fallback::Value(value) => value,
            Fallback::Lazy(thunk) => thunk(),
        }
    }

    /// Produce the result without consuming the default.
    ///
    /// Stored values are cloned; thunks are called.
    pub fn evaluate(&self) -> R
    where
        R: Clone,
    {
        match &self.fallback {
            Fallback::Value(value) => value.clone(),
            Fallback::Lazy(thunk) => thunk(),
        }
    }
}

impl<R: Default> Default for DefaultCase<'_, R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: Debug> Debug for DefaultCase<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fallback {
            Fallback::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Fallback::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}
