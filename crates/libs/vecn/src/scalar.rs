//! Element types a vector can be built on.

use core::fmt::{Debug, Display};
use num_traits::{AsPrimitive, Num};

/// Numeric type usable as a vector component.
///
/// Besides the four arithmetic operations (through [`Num`]) a component type
/// has to provide a square root and an arc cosine, which back the metric
/// operations of [`Vector`](crate::Vector).
///
/// Floating point types use their native operations. Integer types evaluate
/// through `f64` and truncate the result back, so `sqrt(24_i32) == 4` and a
/// `NaN` result collapses to `0`.
///
/// Every component type also widens to `f64` ([`AsPrimitive<f64>`]) and can
/// be brought back from it with [`Scalar::from_f64`]; reductions whose
/// intermediate values may not fit in `Self` are carried out there.
pub trait Scalar: Num + Copy + PartialOrd + Debug + Display + AsPrimitive<f64> + 'static {
    /// Returns the square root.
    fn sqrt(self) -> Self;

    /// Returns the arc cosine in radians.
    fn acos(self) -> Self;

    /// Returns the arc cosine converted to degrees (`acos(self) * 180 / π`).
    ///
    /// The conversion happens before the result is brought back to `Self`,
    /// which matters for integer types.
    fn acos_degrees(self) -> Self;

    /// Converts back from `f64` with `as` semantics.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_scalar_float {
    ($($t:ident),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn sqrt(self) -> Self { <$t>::sqrt(self) }

                #[inline(always)]
                fn acos(self) -> Self { <$t>::acos(self) }

                #[inline(always)]
                fn acos_degrees(self) -> Self { <$t>::acos(self) * 180.0 / core::$t::consts::PI }

                #[inline(always)]
                fn from_f64(v: f64) -> Self { v as $t }
            }
        )*
    };
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn sqrt(self) -> Self { (self as f64).sqrt() as $t }

                #[inline(always)]
                fn acos(self) -> Self { (self as f64).acos() as $t }

                #[inline(always)]
                fn acos_degrees(self) -> Self {
                    ((self as f64).acos() * 180.0 / core::f64::consts::PI) as $t
                }

                #[inline(always)]
                fn from_f64(v: f64) -> Self { v as $t }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Integer type accepted as a checked component index.
///
/// Signed indices are allowed so that a negative index is reported as out of
/// range instead of failing to type-check.
pub trait ComponentIndex: Copy {
    /// Returns the index as an offset into the component array, or `None`
    /// when it is negative or does not fit in `usize`.
    fn to_offset(self) -> Option<usize>;

    /// Returns the index widened for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_component_index {
    ($($t:ty),*) => {
        $(
            impl ComponentIndex for $t {
                #[inline(always)]
                fn to_offset(self) -> Option<usize> { usize::try_from(self).ok() }

                #[inline(always)]
                fn to_i128(self) -> i128 { self as i128 }
            }
        )*
    };
}

impl_component_index!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
