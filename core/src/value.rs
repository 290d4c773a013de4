//! `Value` — Dynamically typed input for untyped callers
//!
//! The static API ([`Case::literal`](crate::Case::literal),
//! [`Case::of`](crate::Case::of)) leans on the type system. Callers whose
//! inputs are only known at run time (config-driven tables, scripting
//! bridges) use `Value` together with [`Target`](crate::Target) instead.
//!
//! # Equality
//!
//! `Value` equality is strict: values of different kinds are never equal,
//! numbers compare with IEEE `==` (`NaN != NaN`, `0.0 == -0.0`), and
//! objects compare by identity.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A named type tag with an optional parent.
///
/// Identity is reference identity: two classes created separately with the
/// same name are different types. Cloning a `Class` yields the same type.
///
/// # Example
///
/// ```
/// use kase::Class;
///
/// let animal = Class::new("Animal");
/// let dog = Class::extends("Dog", &animal);
///
/// assert!(dog.is_subclass_of(&animal));
/// assert!(!animal.is_subclass_of(&dog));
/// assert_ne!(Class::new("Animal"), animal);
/// ```
#[derive(Clone)]
pub struct Class(Arc<ClassInner>);

struct ClassInner {
    name: String,
    parent: Option<Class>,
}

impl Class {
    /// Create a root class.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(ClassInner {
            name: name.into(),
            parent: None,
        }))
    }

    /// Create a class inheriting from `parent`.
    pub fn extends(name: impl Into<String>, parent: &Class) -> Self {
        Self(Arc::new(ClassInner {
            name: name.into(),
            parent: Some(parent.clone()),
        }))
    }

    /// The class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The direct parent, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Iterate this class and its ancestors, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |class| class.parent())
    }

    /// Returns `true` if `self` is `other` or descends from it.
    #[must_use]
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.ancestry().any(|class| class == other)
    }

    /// Instantiate an object of this class.
    #[must_use]
    pub fn instantiate(&self, fields: impl IntoIterator<Item = (String, Value)>) -> Value {
        Value::Object(Arc::new(Object {
            class: self.clone(),
            fields: fields.into_iter().collect(),
        }))
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Class").field(&self.0.name).finish()
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

/// An instance of a [`Class`] with named fields.
#[derive(Debug)]
pub struct Object {
    class: Class,
    fields: BTreeMap<String, Value>,
}

impl Object {
    /// The object's class.
    #[must_use]
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Look up a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// All fields, in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The kind of a [`Value`], compared before any literal equality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum ValueKind {
    /// The absent value.
    Null,
    /// `true` / `false`.
    Bool,
    /// A 64-bit float.
    Number,
    /// A string.
    String,
    /// A class instance.
    Object,
}

/// A dynamically typed value.
///
/// # Example
///
/// ```
/// use kase::{Value, ValueKind};
///
/// assert_eq!(Value::from(1), Value::Number(1.0));
/// assert_ne!(Value::from("1"), Value::from(1));
/// assert_eq!(Value::from("x").kind(), ValueKind::String);
/// assert!(Value::default().is_null());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Number (all numbers are `f64`).
    Number(f64),
    /// String.
    String(String),
    /// Class instance, shared by reference.
    Object(Arc<Object>),
}

// Manual PartialEq: objects compare by identity, not structure.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if this is the `Null` variant.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this is an object of `class` or one of its subclasses.
    ///
    /// Primitives are never instances of any class.
    #[must_use]
    pub fn instance_of(&self, class: &Class) -> bool {
        match self {
            Self::Object(object) => object.class.is_subclass_of(class),
            _ => false,
        }
    }

    /// Try to get the value as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Try to get the value as a number.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as an object.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Look up a field on an object; `None` for primitives or missing fields.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(field))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
