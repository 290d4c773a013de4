//! `match_on` — One-shot dispatch over an ordered case list

use crate::{Case, DefaultCase};

/// Match `input` against `cases` in order and return the first handler's result.
///
/// If no case matches, the default is resolved instead. A lazy default is
/// never called when a case matches.
///
/// Cases are consumed from the iterator one at a time, so cases after the
/// first match are not evaluated (and, for a lazy iterator, not even built).
/// Handler panics propagate to the caller unchanged; a handler returning
/// `Result` hands its `Err` back as the match result.
///
/// # Example
///
/// ```
/// use kase::{match_on, Case, DefaultCase};
///
/// let result = match_on(&1_i64, DefaultCase::value(-1), [Case::literal(4, |x| x + 1)]);
/// assert_eq!(result, -1);
///
/// let result = match_on(&1_i64, DefaultCase::value(-1), [Case::literal(1, |x| x + 1)]);
/// assert_eq!(result, 2);
///
/// let result = match_on(&1_i64, DefaultCase::lazy(|| 42), [Case::literal(-1, |x| x + 1)]);
/// assert_eq!(result, 42);
/// ```
pub fn match_on<'a, T, R, I>(input: &T, default: DefaultCase<'a, R>, cases: I) -> R
where
    I: IntoIterator<Item = Case<'a, T, R>>,
{
    for (index, case) in cases.into_iter().enumerate() {
        if let Some(result) = case.apply(input) {
            tracing::trace!(index, case = case.label(), "case matched");
            return result;
        }
    }

    tracing::trace!(lazy = default.is_lazy(), "no case matched, using default");
    default.resolve()
}
