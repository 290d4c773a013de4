//! `Variant` — Type-tag matching over sum types
//!
//! A type tag asks "is this input an instance of `V`?". Rust has no runtime
//! `instanceof`, so the matchable domain is modelled as an enum and each
//! alternative's payload type projects itself out of that enum.
//!
//! # Inheritance
//!
//! "Is-a" through several levels is expressed with nested enums whose
//! projections chain:
//!
//! ```
//! use kase::Variant;
//!
//! #[derive(Debug)] struct Square(u32);
//! #[derive(Debug)] struct Circle(u32);
//! #[derive(Debug)] enum Polygon { Square(Square) }
//! #[derive(Debug)] enum Shape { Polygon(Polygon), Circle(Circle) }
//!
//! impl Variant<Shape> for Polygon {
//!     fn project(value: &Shape) -> Option<&Self> {
//!         match value {
//!             Shape::Polygon(p) => Some(p),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Variant<Shape> for Circle {
//!     fn project(value: &Shape) -> Option<&Self> {
//!         match value {
//!             Shape::Circle(c) => Some(c),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Variant<Shape> for Square {
//!     fn project(value: &Shape) -> Option<&Self> {
//!         Polygon::project(value).map(|Polygon::Square(s)| s)
//!     }
//! }
//!
//! let shape = Shape::Polygon(Polygon::Square(Square(4)));
//! assert!(Square::project(&shape).is_some());
//! assert!(Polygon::project(&shape).is_some());
//! assert!(<Circle as Variant<Shape>>::project(&shape).is_none());
//!
//! let circle = Shape::Circle(Circle(1));
//! assert!(<Circle as Variant<Shape>>::project(&circle).is_some());
//! assert!(Square::project(&circle).is_none());
//! ```

/// A type that can be projected out of the sum type `T`.
///
/// `project` returns `Some` iff the value is an instance of `Self`
/// (directly, or through a nested enum). The projection must be pure:
/// the dispatcher may call it more than once for the same input.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a variant of `{T}`",
    label = "no projection from `{T}` to this type",
    note = "implement `Variant<{T}>` for `{Self}`, or use the `variants!` macro"
)]
pub trait Variant<T> {
    /// Project `value` onto `Self`, or `None` if it is some other alternative.
    fn project(value: &T) -> Option<&Self>;
}

// Every type is an instance of itself.
impl<T> Variant<T> for T {
    #[inline]
    fn project(value: &T) -> Option<&T> {
        Some(value)
    }
}

/// Implement [`Variant`] for each payload type of a tuple-variant enum.
///
/// Each payload type must be distinct, since the impl is keyed on it.
///
/// ```
/// use kase::{variants, Variant};
///
/// #[derive(Debug)] struct Dog { name: &'static str }
/// #[derive(Debug)] struct Cat { lives: u8 }
/// #[derive(Debug)] enum Pet { Dog(Dog), Cat(Cat) }
///
/// variants!(Pet { Dog(Dog), Cat(Cat) });
///
/// let pet = Pet::Cat(Cat { lives: 9 });
/// assert_eq!(<Cat as Variant<Pet>>::project(&pet).map(|c| c.lives), Some(9));
/// assert!(<Dog as Variant<Pet>>::project(&pet).is_none());
/// ```
#[macro_export]
macro_rules! variants {
    ($enum:ident { $($variant:ident($payload:ty)),+ $(,)? }) => {
        $(
            impl $crate::Variant<$enum> for $payload {
                fn project(value: &$enum) -> ::core::option::Option<&Self> {
                    match value {
                        $enum::$variant(inner) => ::core::option::Option::Some(inner),
                        #[allow(unreachable_patterns)]
                        _ => ::core::option::Option::None,
                    }
                }
            }
        )+
    };
}
