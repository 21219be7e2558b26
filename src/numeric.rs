//! Element-type capabilities for arithmetic and conversion.
//!
//! This module provides the two capabilities that some sequence operations
//! require from their element type:
//!
//! - [`Numeric`]: integral or floating-point types that can be summed and
//!   averaged. `sum` and `average` are only available when `T: Numeric`,
//!   so calling them on a sequence of strings is a compile error.
//! - [`CastFrom`]: element-wise conversion between primitive numeric types
//!   using `as` semantics, used by `cast`.
//!
//! # Precision
//!
//! `CastFrom` follows the language's primitive cast rules and is not
//! validated: wide integers lose precision when cast to floats, floats are
//! truncated toward zero and saturated when cast to integers, and integer
//! narrowing wraps.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::numeric::{CastFrom, Numeric};
//!
//! assert_eq!(i32::zero(), 0);
//! assert_eq!(3_u8.to_f64(), 3.0);
//! assert_eq!(<f32 as CastFrom<i32>>::cast_from(4), 4.0_f32);
//! assert_eq!(<u8 as CastFrom<i32>>::cast_from(300), 44);
//! ```

use std::ops::Add;

/// A type class for integral and floating-point element types.
///
/// `Numeric` excludes `bool` and `char`, which have an integral
/// representation but no meaningful addition.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// Numeric::zero() + x == x
/// ```
pub trait Numeric: Copy + Default + PartialOrd + Add<Output = Self> {
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Converts the value to `f64`, possibly losing precision.
    fn to_f64(self) -> f64;

    /// Adds two values, wrapping around at the bounds of integral types.
    ///
    /// Floating-point types use ordinary addition, which overflows to
    /// infinity instead of wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::numeric::Numeric;
    ///
    /// assert_eq!(Numeric::wrapping_add(i32::MAX, 1), i32::MIN);
    /// assert_eq!(Numeric::wrapping_add(0.5_f64, 0.25), 0.75);
    /// ```
    #[must_use]
    fn wrapping_add(self, other: Self) -> Self;
}

macro_rules! impl_numeric {
    (@integral $($numeric:ty),* $(,)?) => {
        $(
            impl_numeric!(@numeric $numeric, |left, right| left.wrapping_add(right));
        )*
    };
    (@floating $($numeric:ty),* $(,)?) => {
        $(
            impl_numeric!(@numeric $numeric, |left, right| left + right);
        )*
    };
    (@numeric $numeric:ty, |$left:ident, $right:ident| $add:expr) => {
        impl Numeric for $numeric {
            #[inline]
            fn zero() -> Self {
                Self::default()
            }

            #[inline]
            #[allow(
                clippy::cast_precision_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                let ($left, $right): (Self, Self) = (self, other);
                $add
            }
        }
    };
}

impl_numeric!(@integral i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(@floating f32, f64);

/// Conversion from another primitive numeric type using `as` semantics.
///
/// This is a possible precision- or range-loss point; no validation is
/// performed.
///
/// # Examples
///
/// ```rust
/// use enumerable::numeric::CastFrom;
///
/// assert_eq!(<i64 as CastFrom<f64>>::cast_from(2.9), 2);
/// assert_eq!(<i8 as CastFrom<f64>>::cast_from(1000.0), i8::MAX);
/// ```
pub trait CastFrom<S> {
    /// Converts `value` into `Self`.
    fn cast_from(value: S) -> Self;
}

macro_rules! impl_cast_from {
    (@targets $source:ty => $($target:ty),*) => {
        $(
            impl CastFrom<$source> for $target {
                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn cast_from(value: $source) -> Self {
                    value as Self
                }
            }
        )*
    };
    ($($source:ty),* $(,)?) => {
        $(
            impl_cast_from!(
                @targets $source =>
                i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
            );
        )*
    };
}

impl_cast_from!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

static_assertions::assert_impl_all!(i32: Numeric, CastFrom<f64>);
static_assertions::assert_impl_all!(f64: Numeric, CastFrom<u64>);
static_assertions::assert_not_impl_any!(bool: Numeric);
static_assertions::assert_not_impl_any!(char: Numeric);
static_assertions::assert_not_impl_any!(String: Numeric);
