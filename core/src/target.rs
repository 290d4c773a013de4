//! `Target` — Run-time match targets for [`Value`] inputs
//!
//! This is the untyped counterpart of [`Case::literal`] and [`Case::of`]:
//! one constructor, [`Case::when`], accepting any literal or class.

use crate::{Case, Class, Value};
use std::fmt;

/// What a dynamic case compares its input against.
#[derive(Debug, Clone)]
pub enum Target {
    /// Matches only [`Value::Null`].
    Null,
    /// Matches a boolean of the same value.
    Bool(bool),
    /// Matches a number of the same value (IEEE `==`).
    Number(f64),
    /// Matches a string of the same value.
    String(String),
    /// Matches objects of the class or any subclass. Never matches primitives.
    Type(Class),
}

impl Target {
    /// Test a value against this target.
    ///
    /// Literal targets require the value's kind to equal the target's kind
    /// *and* the values to be equal. There is no coercion: the string `"1"`
    /// does not match the number `1`.
    ///
    /// ```
    /// use kase::{Class, Target, Value};
    ///
    /// assert!(Target::from(1).matches(&Value::from(1)));
    /// assert!(!Target::from(1).matches(&Value::from("1")));
    ///
    /// let a = Class::new("A");
    /// assert!(Target::from(&a).matches(&a.instantiate(Vec::new())));
    /// assert!(!Target::from(&a).matches(&Value::from("A")));
    /// ```
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Type(class), value) => value.instance_of(class),
            (Self::Null, Value::Null) => true,
            (Self::Bool(t), Value::Bool(v)) => t == v,
            (Self::Number(t), Value::Number(v)) => t == v,
            (Self::String(t), Value::String(v)) => t == v,
            _ => false,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Type(class) => write!(f, "instanceof {class}"),
        }
    }
}

impl From<bool> for Target {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Target {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Target {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Class> for Target {
    fn from(class: Class) -> Self {
        Self::Type(class)
    }
}

impl From<&Class> for Target {
    fn from(class: &Class) -> Self {
        Self::Type(class.clone())
    }
}

impl<'a, R> Case<'a, Value, R> {
    /// Create a case from any run-time target.
    ///
    /// ```
    /// use kase::{match_on, Case, Class, DefaultCase, Value};
    ///
    /// let b = Class::new("B");
    /// let input = b.instantiate(vec![("b".to_string(), Value::from(10))]);
    ///
    /// let result = match_on(
    ///     &input,
    ///     DefaultCase::value(-42.0),
    ///     [
    ///         Case::when("B", |_| 0.0),
    ///         Case::when(&b, |v| v.get("b").and_then(Value::as_number).unwrap_or(0.0)),
    ///     ],
    /// );
    /// assert_eq!(result, 10.0);
    /// ```
    pub fn when(target: impl Into<Target>, handler: impl Fn(&Value) -> R + 'a) -> Self {
        let target = target.into();
        let label = target.to_string();
        Case::new(move |value: &Value| target.matches(value), handler).labeled(label)
    }
}
