//! `TargetTable` — Shareable match table over [`Value`] inputs
//!
//! A [`Match`] boxes arbitrary closures, which may capture `Cell`s or
//! borrowed state, so it is neither `Send` nor `Sync`. A `TargetTable` holds
//! only [`Target`]s and the results they yield, and can be shared across
//! threads whenever `A` can. It is what
//! [`ClassRegistry::load_match`](crate::ClassRegistry::load_match) returns.
//!
//! # Example
//!
//! ```
//! use kase::{Class, TargetTable, Value};
//! use std::sync::Arc;
//!
//! let shape = Class::new("Shape");
//! let circle = Class::extends("Circle", &shape);
//!
//! let table = Arc::new(
//!     TargetTable::new(Vec::new(), Some("other"))
//!         .with_row(1, "one")
//!         .with_row(&shape, "shape"),
//! );
//!
//! let worker = {
//!     let table = Arc::clone(&table);
//!     std::thread::spawn(move || table.evaluate(&Value::from(1)))
//! };
//! assert_eq!(worker.join().unwrap(), Some("one"));
//! assert_eq!(table.evaluate(&circle.instantiate(Vec::new())), Some("shape"));
//! assert_eq!(table.evaluate(&Value::from("1")), Some("other"));
//! ```

use crate::{Case, CaseStep, DefaultCase, Match, MatchTrace, Target, Value};

/// Ordered `(target, result)` rows plus an optional default result.
///
/// # INV: First-match-wins
///
/// Rows are tested in order; the first target that matches the input
/// decides the result, even if later targets would also match.
#[derive(Debug, Clone)]
pub struct TargetTable<A> {
    rows: Vec<(Target, A)>,
    default: Option<A>,
}

impl<A> TargetTable<A> {
    /// Create a table from rows and the result used when none match.
    #[must_use]
    pub fn new(rows: Vec<(Target, A)>, default: Option<A>) -> Self {
        Self { rows, default }
    }

    /// Append a row after the existing ones.
    pub fn push(&mut self, target: impl Into<Target>, then: A) {
        self.rows.push((target.into(), then));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with_row(mut self, target: impl Into<Target>, then: A) -> Self {
        self.push(target, then);
        self
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows, in evaluation order.
    #[must_use]
    pub fn rows(&self) -> &[(Target, A)] {
        &self.rows
    }

    /// The result used when no row matches.
    #[must_use]
    pub fn default_result(&self) -> Option<&A> {
        self.default.as_ref()
    }

    /// Evaluate the table against the given input.
    ///
    /// Returns the first matching row's result, or the default.
    pub fn evaluate(&self, input: &Value) -> Option<A>
    where
        A: Clone,
    {
        for (index, (target, then)) in self.rows.iter().enumerate() {
            if target.matches(input) {
                tracing::trace!(index, case = %target, "case matched");
                return Some(then.clone());
            }
        }

        tracing::trace!(cases = self.rows.len(), "no case matched, using default");
        self.default.clone()
    }

    /// Evaluate with a full trace for debugging.
    ///
    /// Step labels are the targets' display form, the same labels
    /// [`Case::when`] gives the equivalent cases.
    pub fn evaluate_with_trace(&self, input: &Value) -> MatchTrace<Option<A>>
    where
        A: Clone,
    {
        let mut steps = Vec::new();
        for (index, (target, then)) in self.rows.iter().enumerate() {
            let matched = target.matches(input);
            steps.push(CaseStep {
                index,
                label: target.to_string(),
                matched,
            });
            if matched {
                return MatchTrace {
                    result: Some(then.clone()),
                    steps,
                    used_default: false,
                };
            }
        }

        MatchTrace {
            result: self.default.clone(),
            steps,
            used_default: true,
        }
    }

    /// Convert into a closure-based [`Match`], e.g. to append guard cases.
    ///
    /// The result evaluates identically but is no longer `Send`/`Sync`.
    #[must_use]
    pub fn into_match<'a>(self) -> Match<'a, Value, Option<A>>
    where
        A: Clone + 'a,
    {
        let cases = self
            .rows
            .into_iter()
            .map(|(target, then)| Case::when(target, move |_| Some(then.clone())))
            .collect();
        Match::new(cases, DefaultCase::value(self.default))
    }
}

impl<A> Default for TargetTable<A> {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}
