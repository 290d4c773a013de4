//! Evaluation trace types for debugging match behavior.
//!
//! Use [`Match::evaluate_with_trace`](crate::Match::evaluate_with_trace) to see
//! which cases were tested, which one fired, and whether the default was used.
//!
//! # Example
//!
//! ```
//! use kase::{Case, DefaultCase, Match};
//!
//! let table = Match::new(
//!     vec![Case::literal(1, |_| "one"), Case::literal(2, |_| "two")],
//!     DefaultCase::value("many"),
//! );
//!
//! let trace = table.evaluate_with_trace(&2);
//! assert_eq!(trace.result, "two");
//! assert_eq!(trace.steps.len(), 2);
//! assert_eq!(trace.matched_index(), Some(1));
//! assert!(!trace.used_default);
//! ```

use std::fmt;

/// Trace of a full [`Match`](crate::Match) evaluation.
///
/// # INV: `result` == `evaluate()` result
///
/// The `result` field always equals what
/// [`Match::evaluate()`](crate::Match::evaluate) would return for the same input.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchTrace<R> {
    /// The final result (identical to what `evaluate()` returns).
    pub result: R,
    /// Each case that was tested, in order.
    /// Stops after the first match (preserves first-match-wins).
    pub steps: Vec<CaseStep>,
    /// Whether the default was resolved.
    pub used_default: bool,
}

impl<R> MatchTrace<R> {
    /// Index of the case whose handler produced the result, if any.
    #[must_use]
    pub fn matched_index(&self) -> Option<usize> {
        self.steps
            .iter()
            .find(|step| step.matched)
            .map(|step| step.index)
    }
}

impl<R: fmt::Debug> fmt::Debug for MatchTrace<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchTrace")
            .field("result", &self.result)
            .field("steps", &self.steps)
            .field("used_default", &self.used_default)
            .finish()
    }
}

/// One case's evaluation in a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaseStep {
    /// Position in the case list (0-based).
    pub index: usize,
    /// The case's label (see [`Case::label`](crate::Case::label)).
    pub label: String,
    /// Did the predicate match?
    pub matched: bool,
}
