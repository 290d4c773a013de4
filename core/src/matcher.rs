//! Match — Reusable case table with first-match-wins semantics
//!
//! [`match_on`](crate::match_on) evaluates a case list once and throws it
//! away. A `Match` keeps the cases and the default so the same table can be
//! evaluated against many inputs.

use crate::{Case, CaseStep, DefaultCase, MatchTrace};
use std::fmt::{self, Debug};

/// Reusable case table with first-match-wins semantics.
///
/// A Match contains:
/// - An ordered list of cases (predicate + handler pairs)
/// - A default, used when no case matches
///
/// # INV: First-match-wins
///
/// Cases are evaluated in order. The first matching predicate terminates
/// evaluation, even if later predicates would also match. Later predicates
/// and handlers are never called.
///
/// # Example
///
/// ```
/// use kase::{Case, DefaultCase, Match};
///
/// let fizz = Match::new(
///     vec![
///         Case::new(|n: &u32| n % 15 == 0, |_| "FizzBuzz".to_string()),
///         Case::new(|n: &u32| n % 3 == 0, |_| "Fizz".to_string()),
///         Case::new(|n: &u32| n % 5 == 0, |_| "Buzz".to_string()),
///     ],
///     DefaultCase::value(String::new()),
/// );
///
/// assert_eq!(fizz.evaluate(&9), "Fizz");
/// assert_eq!(fizz.evaluate(&30), "FizzBuzz");
/// assert_eq!(fizz.evaluate(&7), "");
/// ```
pub struct Match<'a, T, R> {
    cases: Vec<Case<'a, T, R>>,
    default: DefaultCase<'a, R>,
}

impl<'a, T, R> Match<'a, T, R> {
    /// Create a new match table.
    pub fn new(cases: Vec<Case<'a, T, R>>, default: DefaultCase<'a, R>) -> Self {
        Self { cases, default }
    }

    /// Append a case after the existing ones.
    pub fn push(&mut self, case: Case<'a, T, R>) {
        self.cases.push(case);
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with_case(mut self, case: Case<'a, T, R>) -> Self {
        self.push(case);
        self
    }

    /// Returns the number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if there are no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The cases, in evaluation order.
    pub fn cases(&self) -> &[Case<'a, T, R>] {
        &self.cases
    }

    /// The default used when nothing matches.
    pub fn default_case(&self) -> &DefaultCase<'a, R> {
        &self.default
    }

    /// Split the table back into its cases and default.
    pub fn into_parts(self) -> (Vec<Case<'a, T, R>>, DefaultCase<'a, R>) {
        (self.cases, self.default)
    }

    /// Evaluate this table against the given input.
    ///
    /// Returns the handler result of the first matching case, or the default.
    pub fn evaluate(&self, input: &T) -> R
    where
        R: Clone,
    {
        for (index, case) in self.cases.iter().enumerate() {
            if let Some(result) = case.apply(input) {
                tracing::trace!(index, case = case.label(), "case matched");
                return result;
            }
        }

        tracing::trace!(cases = self.cases.len(), "no case matched, using default");
        self.default.evaluate()
    }

    /// Evaluate with a full trace for debugging.
    ///
    /// Predicates and handlers run exactly as in [`evaluate`](Self::evaluate).
    pub fn evaluate_with_trace(&self, input: &T) -> MatchTrace<R>
    where
        R: Clone,
    {
        let mut steps = Vec::new();
        for (index, case) in self.cases.iter().enumerate() {
            let matched = case.matches(input);
            steps.push(CaseStep {
                index,
                label: case.label().to_owned(),
                matched,
            });
            if !matched {
                continue;
            }
            if let Some(result) = case.fire(input) {
                return MatchTrace {
                    result,
                    steps,
                    used_default: false,
                };
            }
            // Projection disagreed with its predicate: treat as a miss.
            if let Some(step) = steps.last_mut() {
                step.matched = false;
            }
        }

        MatchTrace {
            result: self.default.evaluate(),
            steps,
            used_default: true,
        }
    }
}

impl<T, R: Debug> Debug for Match<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("cases", &self.cases)
            .field("default", &self.default)
            .finish()
    }
}
