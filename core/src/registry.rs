//! Class registry for config-driven match construction.
//!
//! Config files refer to classes by name (`{ type: Shape }`), but class
//! identity is reference identity. The registry is the one place that maps
//! names to [`Class`] values, so every table and value loaded through the same
//! registry agrees on what `Shape` is.
//!
//! # Example
//!
//! ```
//! use kase::{ClassRegistryBuilder, MatchConfig, Value};
//!
//! let registry = ClassRegistryBuilder::new()
//!     .class("Shape")
//!     .subclass("Circle", "Shape")
//!     .build()?;
//!
//! let config: MatchConfig<String> = serde_json::from_str(r#"{
//!     "cases": [
//!         { "when": 0, "then": "zero" },
//!         { "when": { "type": "Shape" }, "then": "shape" }
//!     ],
//!     "default": "other"
//! }"#)?;
//! let table = registry.load_match(config)?;
//!
//! let circle = registry.instantiate("Circle", Vec::new())?;
//! assert_eq!(table.evaluate(&circle), Some("shape".to_string()));
//! assert_eq!(table.evaluate(&Value::from("0")), Some("other".to_string()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashMap;

use crate::{
    config::{CaseConfig, MatchConfig, TargetConfig, ValueConfig},
    Case, Class, MatchError, Target, TargetTable, Value, MAX_CASES,
};

/// Builder for constructing a [`ClassRegistry`].
///
/// Register classes by name, parents before children, then call
/// [`build()`](Self::build) to produce an immutable registry. Registration
/// errors are reported by `build()`.
#[derive(Debug, Default)]
pub struct ClassRegistryBuilder {
    declarations: Vec<(String, Option<String>)>,
}

impl ClassRegistryBuilder {
    /// Create a new empty registry builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root class.
    #[must_use]
    pub fn class(mut self, name: &str) -> Self {
        self.declarations.push((name.to_owned(), None));
        self
    }

    /// Register a class inheriting from an already registered `parent`.
    #[must_use]
    pub fn subclass(mut self, name: &str, parent: &str) -> Self {
        self.declarations
            .push((name.to_owned(), Some(parent.to_owned())));
        self
    }

    /// Freeze the registry. No further registration is possible.
    ///
    /// # Errors
    ///
    /// - [`MatchError::DuplicateClass`] — a name was registered twice
    /// - [`MatchError::UnknownClass`] — a parent was not registered before its child
    pub fn build(self) -> Result<ClassRegistry, MatchError> {
        let mut registry = ClassRegistry {
            classes: HashMap::new(),
        };
        for (name, parent) in self.declarations {
            if registry.classes.contains_key(&name) {
                return Err(MatchError::DuplicateClass { name });
            }
            let class = match parent {
                Some(parent) => Class::extends(name.as_str(), registry.class(&parent)?),
                None => Class::new(name.as_str()),
            };
            registry.classes.insert(name, class);
        }
        tracing::debug!(classes = registry.classes.len(), "class registry built");
        Ok(registry)
    }
}

/// Immutable name → [`Class`] registry.
///
/// Constructed via [`ClassRegistryBuilder`]. Loads [`MatchConfig`] and
/// [`ValueConfig`] into runtime types.
#[derive(Debug, Clone)]
pub struct ClassRegistry {
    classes: HashMap<String, Class>,
}

impl ClassRegistry {
    /// Look up a class by name.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownClass`] listing the registered names.
    pub fn class(&self, name: &str) -> Result<&Class, MatchError> {
        self.classes
            .get(name)
            .ok_or_else(|| MatchError::UnknownClass {
                name: name.to_owned(),
                available: self.class_names().into_iter().map(str::to_owned).collect(),
            })
    }

    /// Returns `true` if a class with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Returns the number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if no classes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Registered class names, sorted.
    #[must_use]
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Instantiate a registered class.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownClass`] if `name` is not registered.
    pub fn instantiate(
        &self,
        name: &str,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Value, MatchError> {
        Ok(self.class(name)?.instantiate(fields))
    }

    /// Load a [`TargetTable`] from configuration.
    ///
    /// Each case yields `Some(then)` when it matches; the table's default
    /// yields the configured default, or `None` when the config has none.
    /// The table is `Send + Sync` whenever `A` is, so one load can serve
    /// every thread. Use [`TargetTable::into_match`] to mix in closure cases.
    ///
    /// # Errors
    ///
    /// - [`MatchError::TooManyCases`] — more than [`MAX_CASES`] cases
    /// - [`MatchError::UnknownClass`] — a `{ type: .. }` target names an unregistered class
    pub fn load_match<A>(&self, config: MatchConfig<A>) -> Result<TargetTable<A>, MatchError> {
        if config.cases.len() > MAX_CASES {
            return Err(MatchError::TooManyCases {
                count: config.cases.len(),
                max: MAX_CASES,
            });
        }
        let rows = config
            .cases
            .into_iter()
            .map(|case| Ok((self.load_target(&case.when)?, case.then)))
            .collect::<Result<Vec<_>, MatchError>>()?;
        tracing::debug!(cases = rows.len(), "match table loaded");
        Ok(TargetTable::new(rows, config.default))
    }

    /// Load a single [`Case`] yielding `Some(then)` on match.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownClass`] for an unregistered class target.
    pub fn load_case<A>(
        &self,
        config: CaseConfig<A>,
    ) -> Result<Case<'static, Value, Option<A>>, MatchError>
    where
        A: Clone + 'static,
    {
        let target = self.load_target(&config.when)?;
        let then = config.then;
        Ok(Case::when(target, move |_| Some(then.clone())))
    }

    /// Resolve a [`TargetConfig`] into a [`Target`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownClass`] for an unregistered class target.
    pub fn load_target(&self, config: &TargetConfig) -> Result<Target, MatchError> {
        Ok(match config {
            TargetConfig::Type { type_name } => Target::Type(self.class(type_name)?.clone()),
            TargetConfig::Null => Target::Null,
            TargetConfig::Bool(b) => Target::Bool(*b),
            TargetConfig::Number(n) => Target::Number(*n),
            TargetConfig::String(s) => Target::String(s.clone()),
        })
    }

    /// Resolve a [`ValueConfig`] into a [`Value`], instantiating objects.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownClass`] if any object names an unregistered class.
    pub fn load_value(&self, config: &ValueConfig) -> Result<Value, MatchError> {
        Ok(match config {
            ValueConfig::Object { class, fields } => {
                let fields = fields
                    .iter()
                    .map(|(name, value)| Ok((name.clone(), self.load_value(value)?)))
                    .collect::<Result<Vec<_>, MatchError>>()?;
                self.instantiate(class, fields)?
            }
            ValueConfig::Null => Value::Null,
            ValueConfig::Bool(b) => Value::Bool(*b),
            ValueConfig::Number(n) => Value::Number(*n),
            ValueConfig::String(s) => Value::String(s.clone()),
        })
    }
}
