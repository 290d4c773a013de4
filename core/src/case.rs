//! `Case` — Predicate + handler pair
//!
//! A `Case` binds a predicate on the input to the handler that runs when it
//! matches. Cases are built by named constructors, one per kind of match
//! target:
//!
//! | Constructor | Target | Matches when |
//! |-------------|--------|--------------|
//! | [`Case::literal`] | a value of the input type | `input == target` |
//! | [`Case::of`] | a [`Variant`] type | the input projects onto it |
//! | [`Case::new`] | a guard closure | the guard returns `true` |
//! | [`Case::when`] | a dynamic [`Target`](crate::Target) | see [`Target::matches`](crate::Target::matches) |
//!
//! Construction never calls the handler or the predicate.

use crate::Variant;
use std::borrow::Cow;
use std::fmt::{self, Debug};

type BoxedPredicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;
type BoxedHandler<'a, T, R> = Box<dyn Fn(&T) -> Option<R> + 'a>;

/// A case: predicate + handler.
///
/// # Type Parameters
///
/// - `'a`: Lifetime of anything the predicate or handler borrow
/// - `T`: The input type
/// - `R`: The result type
///
/// # Example
///
/// ```
/// use kase::Case;
///
/// let case = Case::literal(1_i64, |x| x + 1);
/// assert!(case.matches(&1));
/// assert_eq!(case.apply(&1), Some(2));
/// assert_eq!(case.apply(&4), None);
/// ```
pub struct Case<'a, T, R> {
    predicate: BoxedPredicate<'a, T>,
    // Returns `None` only when a variant projection disagrees with its own
    // predicate, which a pure projection never does.
    handler: BoxedHandler<'a, T, R>,
    label: Cow<'static, str>,
}

impl<'a, T, R> Case<'a, T, R> {
    /// Create a case from an arbitrary guard and handler.
    pub fn new(
        predicate: impl Fn(&T) -> bool + 'a,
        handler: impl Fn(&T) -> R + 'a,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            handler: Box::new(move |input: &T| Some(handler(input))),
            label: Cow::Borrowed("guard"),
        }
    }

    /// Create a case matching inputs strictly equal to `target`.
    ///
    /// The target has the input's own type, so a string target can never be
    /// compared against a number input.
    ///
    /// ```
    /// use kase::Case;
    ///
    /// let case = Case::literal("Lorem ipsum", |s| s.len());
    /// assert_eq!(case.apply(&"Lorem ipsum"), Some(11));
    /// assert_eq!(case.label(), "\"Lorem ipsum\"");
    /// ```
    pub fn literal(target: T, handler: impl Fn(&T) -> R + 'a) -> Self
    where
        T: PartialEq + Debug + 'a,
    {
        let label = Cow::Owned(format!("{target:?}"));
        Self {
            predicate: Box::new(move |input: &T| *input == target),
            handler: Box::new(move |input: &T| Some(handler(input))),
            label,
        }
    }

    /// Create a case matching inputs that are instances of `V`.
    ///
    /// The handler receives the projected `&V`, not the whole input.
    ///
    /// ```
    /// use kase::{variants, Case};
    ///
    /// #[derive(Debug)] struct Passed(u8);
    /// #[derive(Debug)] struct Failed(String);
    /// #[derive(Debug)] enum Outcome { Passed(Passed), Failed(Failed) }
    /// variants!(Outcome { Passed(Passed), Failed(Failed) });
    ///
    /// let case = Case::of(|p: &Passed| u32::from(p.0));
    /// assert_eq!(case.apply(&Outcome::Passed(Passed(7))), Some(7));
    /// assert_eq!(case.apply(&Outcome::Failed(Failed("x".into()))), None);
    /// ```
    pub fn of<V>(handler: impl Fn(&V) -> R + 'a) -> Self
    where
        V: Variant<T> + ?Sized + 'a,
    {
        Self {
            predicate: Box::new(|input: &T| V::project(input).is_some()),
            handler: Box::new(move |input: &T| V::project(input).map(&handler)),
            label: Cow::Borrowed(std::any::type_name::<V>()),
        }
    }

    /// Replace the label shown in traces.
    #[must_use]
    pub fn labeled(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Human-readable description of the match target.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Evaluate the predicate against the input.
    pub fn matches(&self, input: &T) -> bool {
        (self.predicate)(input)
    }

    /// Run the handler if, and only if, the predicate accepts the input.
    pub fn apply(&self, input: &T) -> Option<R> {
        if self.matches(input) {
            (self.handler)(input)
        } else {
            None
        }
    }

    /// Run the handler without consulting the predicate.
    ///
    /// Callers must have observed `matches(input) == true` first.
    pub(crate) fn fire(&self, input: &T) -> Option<R> {
        (self.handler)(input)
    }
}

impl<T, R> Debug for Case<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case").field("label", &self.label).finish()
    }
}
