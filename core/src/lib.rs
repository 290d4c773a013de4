//! kase - Expression-oriented case dispatch
//!
//! Write a `match` as a value: an input, an ordered list of cases, and a
//! default. The first case whose predicate accepts the input runs its
//! handler; if none do, the default is resolved.
//!
//! # Architecture
//!
//! - [`Case<T, R>`] — Predicate + handler, built from a literal
//!   ([`Case::literal`]), a variant type ([`Case::of`]), a guard
//!   ([`Case::new`]) or a run-time [`Target`] ([`Case::when`])
//! - [`DefaultCase<R>`] — Fallback: absent, a stored value, or a lazy thunk
//! - [`match_on`] — One-shot first-match-wins dispatch
//! - [`Match<T, R>`] — The same dispatch as a reusable table, with traces
//! - [`Variant<T>`] — Type-tag matching over sum types
//! - [`Value`] / [`Class`] / [`Target`] — Dynamically typed inputs for untyped callers
//! - [`TargetTable<A>`] — Closure-free table over [`Value`]s, `Send + Sync` when `A` is
//!
//! # Key Invariants
//!
//! 1. **First-match-wins**: cases are tested in order; once one matches, no
//!    later predicate or handler runs.
//!
//! 2. **Lazy default**: a [`DefaultCase::lazy`] thunk never runs when a case
//!    matches, and runs at most once per evaluation otherwise.
//!
//! 3. **Strict literals**: a literal case matches only values of the same
//!    kind that are equal. `"1"` never matches `1`.
//!
//! 4. **Errors pass through**: handler and default failures are never caught.
//!
//! # Example
//!
//! ```
//! use kase::prelude::*;
//!
//! #[derive(Debug)] struct A { a: i32 }
//! #[derive(Debug)] struct B { b: i32 }
//! #[derive(Debug)] struct C { c: i32 }
//! #[derive(Debug)] enum Foo { A(A), B(B), C(C) }
//! kase::variants!(Foo { A(A), B(B), C(C) });
//!
//! let value = Foo::C(C { c: 5 });
//! let result = match_on(
//!     &value,
//!     DefaultCase::value(-42),
//!     [
//!         Case::of(|a: &A| a.a),
//!         Case::of(|b: &B| b.b),
//!         Case::of(|c: &C| c.c),
//!     ],
//! );
//! assert_eq!(result, 5);
//! ```
//!
//! # Features
//!
//! - `serde` — `Serialize` for trace types
//! - `registry` — config types and [`ClassRegistry`] for data-driven tables

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod case;
mod default_case;
mod dispatch;
mod matcher;
mod table;
mod target;
mod trace;
mod value;
mod variant;

#[cfg(feature = "registry")]
mod config;
#[cfg(feature = "registry")]
mod registry;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use case::Case;
pub use default_case::DefaultCase;
pub use dispatch::match_on;
pub use matcher::Match;
pub use variant::Variant;

// Dynamic layer
pub use table::TargetTable;
pub use target::Target;
pub use value::{Class, Object, Value, ValueKind};

// Trace types
pub use trace::{CaseStep, MatchTrace};

// Registry (feature-gated)
#[cfg(feature = "registry")]
pub use config::{CaseConfig, MatchConfig, TargetConfig, ValueConfig};
#[cfg(feature = "registry")]
pub use registry::{ClassRegistry, ClassRegistryBuilder};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use kase::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core types
        match_on,
        Case,
        // Trace types
        CaseStep,
        // Dynamic layer
        Class,
        DefaultCase,
        Match,
        // Errors
        MatchError,
        MatchTrace,
        Target,
        TargetTable,
        Value,
        // Traits
        Variant,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum number of cases in a table loaded from configuration.
///
/// Tables built in code are not limited; dispatch is a linear scan either way.
pub const MAX_CASES: usize = 256;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from class registration and config loading.
///
/// Dispatch itself never fails: these are raised while building tables,
/// not while evaluating them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// A class name was not registered.
    #[error("unknown class \"{name}\"{}", registered_hint(.available))]
    UnknownClass {
        /// The unregistered name.
        name: String,
        /// Names that ARE registered (for self-correcting error messages).
        available: Vec<String>,
    },
    /// A class name was registered twice.
    #[error("class \"{name}\" is already registered")]
    DuplicateClass {
        /// The duplicated name.
        name: String,
    },
    /// Too many cases in a single loaded table.
    #[error("match table has {count} cases, but maximum allowed is {max}")]
    TooManyCases {
        /// Actual count of cases.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
}

fn registered_hint(available: &[String]) -> String {
    if available.is_empty() {
        " — no classes are registered".to_owned()
    } else {
        format!(" — registered: {}", available.join(", "))
    }
}
