//! Config types for data-driven match tables.
//!
//! These types mirror the runtime types but are serde-deserializable,
//! enabling construction from JSON/YAML via [`ClassRegistry`](crate::ClassRegistry).
//!
//! # Relationship to runtime types
//!
//! | Config type | Runtime type | Loader method |
//! |-------------|-------------|---------------|
//! | [`MatchConfig`] | [`Match<Value, Option<A>>`](crate::Match) | `ClassRegistry::load_match()` |
//! | [`CaseConfig`] | [`Case`](crate::Case) | `ClassRegistry::load_case()` |
//! | [`TargetConfig`] | [`Target`](crate::Target) | `ClassRegistry::load_target()` |
//! | [`ValueConfig`] | [`Value`](crate::Value) | `ClassRegistry::load_value()` |
//!
//! # Example (YAML)
//!
//! ```yaml
//! cases:
//!   - when: 1
//!     then: one
//!   - when: "1"
//!     then: string-one
//!   - when: { type: Shape }
//!     then: shape
//! default: other
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;

/// Configuration for a [`Match`](crate::Match).
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de>"))]
pub struct MatchConfig<A> {
    /// Cases to evaluate in order (first-match-wins).
    pub cases: Vec<CaseConfig<A>>,

    /// Result when no case matches. Absent means `None`.
    #[serde(default)]
    pub default: Option<A>,
}

/// Configuration for a single [`Case`](crate::Case).
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de>"))]
pub struct CaseConfig<A> {
    /// The match target.
    pub when: TargetConfig,

    /// The result when the target matches.
    pub then: A,
}

/// Configuration for a [`Target`](crate::Target).
///
/// Untagged: the YAML/JSON scalar type picks the variant, so `1` and `"1"`
/// are different targets. Class targets are written `{ type: Name }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TargetConfig {
    /// `{ type: Name }` — a class registered in the registry.
    Type {
        /// The class name.
        #[serde(rename = "type")]
        type_name: String,
    },
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Any number.
    Number(f64),
    /// Any string.
    String(String),
}

/// Configuration for a [`Value`](crate::Value).
///
/// Scalars map directly; objects are written
/// `{ class: Name, fields: { .. } }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValueConfig {
    /// An instance of a registered class.
    Object {
        /// The class name.
        class: String,
        /// Field values.
        #[serde(default)]
        fields: BTreeMap<String, ValueConfig>,
    },
    /// `null`.
    #[default]
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Any number.
    Number(f64),
    /// Any string.
    String(String),
}
