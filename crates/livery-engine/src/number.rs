//! Numeric coercion between the numeric representations a style may carry
//! and the representation a widget property stores.
//!
//! Conversion uses native `as` semantics: narrowing loses precision or
//! saturates silently, and no range check is performed.

use std::borrow::Cow;
use std::fmt;

use crate::style::Value;

/// The toolkit's native floating-point scalar (point sizes, radii, widths).
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Scalar(pub f64);

impl From<Scalar> for f64 {
    fn from(s: Scalar) -> f64 {
        s.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A number tagged with the representation it was written in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Scalar(Scalar),
}

impl Number {
    /// Converts to `T`, widening or narrowing as needed.
    pub fn convert<T: NumberConvertible>(self) -> T {
        match self {
            Number::I8(v) => T::from_i64(v.into()),
            Number::I16(v) => T::from_i64(v.into()),
            Number::I32(v) => T::from_i64(v.into()),
            Number::I64(v) => T::from_i64(v),
            Number::Isize(v) => T::from_i64(v as i64),
            Number::U8(v) => T::from_u64(v.into()),
            Number::U16(v) => T::from_u64(v.into()),
            Number::U32(v) => T::from_u64(v.into()),
            Number::U64(v) => T::from_u64(v),
            Number::Usize(v) => T::from_u64(v as u64),
            Number::F32(v) => T::from_f64(v.into()),
            Number::F64(v) => T::from_f64(v),
            Number::Scalar(v) => T::from_f64(v.0),
        }
    }

    /// Name of the representation, for diagnostics.
    pub fn repr_name(self) -> &'static str {
        match self {
            Number::I8(_) => "i8",
            Number::I16(_) => "i16",
            Number::I32(_) => "i32",
            Number::I64(_) => "i64",
            Number::Isize(_) => "isize",
            Number::U8(_) => "u8",
            Number::U16(_) => "u16",
            Number::U32(_) => "u32",
            Number::U64(_) => "u64",
            Number::Usize(_) => "usize",
            Number::F32(_) => "f32",
            Number::F64(_) => "f64",
            Number::Scalar(_) => "Scalar",
        }
    }
}

/// A numeric representation a [`Number`] can be converted into.
///
/// Every source representation widens losslessly into one of `i64`, `u64`
/// or `f64` first; the final `as` cast then matches what a direct cast from
/// the source would produce.
pub trait NumberConvertible: Copy + Into<Number> {
    fn from_i64(v: i64) -> Self;
    fn from_u64(v: u64) -> Self;
    fn from_f64(v: f64) -> Self;
}

macro_rules! number_convertible {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(v: $ty) -> Self {
                    Number::$variant(v)
                }
            }

            impl NumberConvertible for $ty {
                #[inline]
                fn from_i64(v: i64) -> Self { v as $ty }
                #[inline]
                fn from_u64(v: u64) -> Self { v as $ty }
                #[inline]
                fn from_f64(v: f64) -> Self { v as $ty }
            }
        )*
    };
}

number_convertible! {
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize,
    f32 => F32, f64 => F64,
}

impl From<Scalar> for Number {
    #[inline]
    fn from(v: Scalar) -> Self {
        Number::Scalar(v)
    }
}

impl NumberConvertible for Scalar {
    #[inline]
    fn from_i64(v: i64) -> Self { Scalar(v as f64) }
    #[inline]
    fn from_u64(v: u64) -> Self { Scalar(v as f64) }
    #[inline]
    fn from_f64(v: f64) -> Self { Scalar(v) }
}

// ── Value-level conversion ────────────────────────────────────────────────

/// The source value is not a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    /// Variant name of the rejected value.
    pub found: &'static str,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot convert a {} value to a number", self.found)
    }
}

impl std::error::Error for ConversionError {}

/// Converts a numeric [`Value`] into `T`.
pub fn convert<T: NumberConvertible>(value: &Value) -> Result<T, ConversionError> {
    match value {
        Value::Number(n) => Ok(n.convert()),
        other => Err(ConversionError { found: other.type_name() }),
    }
}

/// Re-tags a numeric value as `T`; anything else is returned unchanged so the
/// destination property's own type check can reject it.
pub fn coerce<T: NumberConvertible>(value: &Value) -> Cow<'_, Value> {
    match convert::<T>(value) {
        Ok(v) => Cow::Owned(Value::Number(v.into())),
        Err(_) => Cow::Borrowed(value),
    }
}
