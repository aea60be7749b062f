//! Generic fixed-dimension vector.

use crate::{
    dim::{Dimension, SupportedDimension},
    error::{Error, Result},
    scalar::{ComponentIndex, Scalar},
};
use core::{
    fmt::{Debug, Display, Formatter},
    ops::{Index, IndexMut},
};
use num_traits::{AsPrimitive, Zero};

mod dims;
mod ops;

/// A vector of `N` components of type `T`, with `N` between 2 and 6.
///
/// Vectors are plain values: every arithmetic or geometric operation returns
/// a new vector. The only way to modify one in place is through component
/// access ([`IndexMut`], [`Vector::get_mut`], [`Vector::set`]) or the compound
/// assignment operators.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>
where
    Dimension<N>: SupportedDimension,
{
    data: [T; N],
}

/// Two-component vector.
pub type Vec2<T> = Vector<T, 2>;
/// Three-component vector.
pub type Vec3<T> = Vector<T, 3>;
/// Four-component vector.
pub type Vec4<T> = Vector<T, 4>;
/// Five-component vector.
pub type Vec5<T> = Vector<T, 5>;
/// Six-component vector.
pub type Vec6<T> = Vector<T, 6>;

static_assertions::assert_eq_size!(Vec2<f32>, [f32; 2]);
static_assertions::assert_eq_size!(Vec3<f64>, [f64; 3]);
static_assertions::assert_eq_size!(Vec6<u8>, [u8; 6]);

impl<T, const N: usize> Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a vector from its components in declaration order.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self { Self { data } }

    /// Returns the components as an array reference.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] { &self.data }

    /// Consumes the vector and returns its components.
    #[inline]
    pub fn into_array(self) -> [T; N] { self.data }

    /// Returns an iterator over the components in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.data.iter() }

    /// Returns a reference to the component at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] for any index outside `[0, N)`,
    /// negative indices included.
    pub fn get<I: ComponentIndex>(&self, index: I) -> Result<&T> {
        let offset = Self::offset(index)?;
        Ok(&self.data[offset])
    }

    /// Returns a mutable reference to the component at `index`.
    pub fn get_mut<I: ComponentIndex>(&mut self, index: I) -> Result<&mut T> {
        let offset = Self::offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrites the component at `index`. Nothing is written on failure.
    pub fn set<I: ComponentIndex>(&mut self, index: I, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    fn offset<I: ComponentIndex>(index: I) -> Result<usize> {
        match index.to_offset() {
            Some(offset) if offset < N => Ok(offset),
            _ => Err(Error::IndexOutOfRange {
                index: index.to_i128(),
                dim: N,
            }),
        }
    }
}

impl<T: Copy, const N: usize> Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Creates a vector with every component set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self { Self { data: [value; N] } }

    /// Applies `f` to every component.
    #[inline]
    pub(crate) fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    /// Combines the components of `self` and `other` pairwise.
    #[inline]
    pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut data = self.data;
        data.iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, b)| *a = f(*a, *b));
        Self { data }
    }
}

impl<T: Zero + Copy, const N: usize> Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Creates a vector with all components set to zero.
    #[inline]
    pub fn zeros() -> Self { Self::splat(T::zero()) }

    /// Creates a vector from its `M` leading components; the remaining
    /// trailing components are set to zero.
    ///
    /// `M` may not exceed `N`, which is checked at compile time.
    ///
    /// ```
    /// use vecn::Vec4;
    /// assert_eq!(Vec4::from_leading([1, 2]), Vec4::new(1, 2, 0, 0));
    /// ```
    pub fn from_leading<const M: usize>(leading: [T; M]) -> Self {
        const { assert!(M <= N, "more leading components than the vector has") };
        let mut data = [T::zero(); N];
        data[..M].copy_from_slice(&leading);
        Self { data }
    }

    /// Creates a vector from a vector of any supported dimension and element
    /// type.
    ///
    /// Component `i` is the source component `i` cast to `T` with `as`
    /// semantics (truncating conversions are silent) when `i < M`, and zero
    /// otherwise. Source components past `N` are dropped.
    pub fn from_vector<U, const M: usize>(src: &Vector<U, M>) -> Self
    where
        U: AsPrimitive<T>,
        T: 'static,
        Dimension<M>: SupportedDimension,
    {
        if M > N {
            log::trace!(
                "Narrowing Vec{M} into Vec{N}, dropping {} trailing component(s)",
                M - N
            );
        }
        let mut data = [T::zero(); N];
        data.iter_mut()
            .zip(src.data.iter())
            .for_each(|(dst, src)| *dst = src.as_());
        Self { data }
    }

    /// Converts the components to another element type, keeping the
    /// dimension.
    #[inline]
    pub fn cast<U>(&self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Zero + Copy + 'static,
    {
        Vector::from_vector(self)
    }

    /// Converts to another dimension, keeping the element type.
    #[inline]
    pub fn resize<const M: usize>(&self) -> Vector<T, M>
    where
        T: AsPrimitive<T>,
        Dimension<M>: SupportedDimension,
    {
        Vector::from_vector(self)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Returns the dot product, the sum of the componentwise products.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    /// Returns the sum of the squared components.
    #[inline]
    pub fn magnitude_squared(&self) -> T { self.dot(self) }

    /// Returns the Euclidean norm.
    #[inline]
    pub fn magnitude(&self) -> T { self.magnitude_squared().sqrt() }

    /// Returns the Euclidean norm; same as [`Vector::magnitude`].
    #[inline]
    pub fn length(&self) -> T { self.magnitude() }

    /// Returns the vector divided componentwise by its magnitude.
    ///
    /// A zero vector divides by zero: `NaN` components for floating point
    /// types, a panic for integer types.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        self.map(|c| c / mag)
    }

    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// The differences, their squares and the sum are evaluated in `f64`, so
    /// integer components neither underflow on `a - b` for unsigned types nor
    /// overflow when squared. The root is converted back with `as`.
    pub fn distance(&self, other: &Self) -> T {
        let sum: f64 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| (AsPrimitive::<f64>::as_(a) - AsPrimitive::<f64>::as_(b)).powi(2))
            .sum();
        T::from_f64(sum.sqrt())
    }

    /// Returns the angle between `self` and `other` in radians; same as
    /// [`Vector::angle_rad`].
    #[inline]
    pub fn angle(&self, other: &Self) -> T { self.angle_rad(other) }

    /// Returns the angle between `self` and `other` in radians.
    ///
    /// A zero-magnitude operand divides by zero: `NaN` for floating point
    /// types, a panic for integer types.
    pub fn angle_rad(&self, other: &Self) -> T { self.cos_angle(other).acos() }

    /// Returns the angle between `self` and `other` in degrees.
    ///
    /// Zero-magnitude inputs behave as in [`Vector::angle_rad`].
    pub fn angle_deg(&self, other: &Self) -> T { self.cos_angle(other).acos_degrees() }

    #[inline]
    fn cos_angle(&self, other: &Self) -> T {
        self.dot(other) / (self.magnitude() * other.magnitude())
    }

    /// Cross product whose first three components follow the 3D formula and
    /// whose remaining components are the componentwise products.
    ///
    /// Only meaningful for `N >= 3`.
    pub(crate) fn cross_with_trailing_products(&self, other: &Self) -> Self {
        let (a, b) = (&self.data, &other.data);
        let mut out = self.zip_with(other, |l, r| l * r);
        out.data[0] = a[1] * b[2] - a[2] * b[1];
        out.data[1] = a[2] * b[0] - a[0] * b[2];
        out.data[2] = a[0] * b[1] - a[1] * b[0];
        out
    }
}

impl<T: Zero + Copy, const N: usize> Default for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    fn default() -> Self { Self::zeros() }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    fn from(data: [T; N]) -> Self { Self { data } }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N]
where
    Dimension<N>: SupportedDimension,
{
    fn from(v: Vector<T, N>) -> Self { v.data }
}

impl<T, const N: usize> Index<usize> for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Output = T;

    /// Panics if `index >= N`.
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(c) => c,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Panics if `index >= N`.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(c) => c,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.data.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.data.iter() }
}

/// Prints the components in declaration order, separated by `", "`.
///
/// Formatting options are applied to every component, so `{:.2}` prints each
/// one with two decimals.
impl<T: Display, const N: usize> Display for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(c, f)?;
        }
        Ok(())
    }
}

impl<T: Debug, const N: usize> Debug for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct(&format!("Vec{N}"));
        for (label, c) in Dimension::<N>::COMPONENTS.iter().zip(self.data.iter()) {
            s.field(label, c);
        }
        s.finish()
    }
}

impl<T, const N: usize> approx::AbsDiffEq for Vector<T, N>
where
    T: approx::AbsDiffEq,
    T::Epsilon: Copy,
    Dimension<N>: SupportedDimension,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> approx::RelativeEq for Vector<T, N>
where
    T: approx::RelativeEq,
    T::Epsilon: Copy,
    Dimension<N>: SupportedDimension,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T: approx::UlpsEq,
    T::Epsilon: Copy,
    Dimension<N>: SupportedDimension,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
