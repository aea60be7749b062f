//! Dimension-specific parts of [`Vector`]: positional constructors, named
//! component getters, `cross` and conversions between dimensions.

use crate::{scalar::Scalar, vector::Vector};
use num_traits::{AsPrimitive, Zero};

macro_rules! impl_components {
    ($($n:literal => $($comp:ident: $idx:literal),+);* $(;)?) => {
        $(
            impl<T> Vector<T, $n> {
                #[doc = concat!("Creates a ", stringify!($n), "-component vector from its components.")]
                #[inline]
                pub const fn new($($comp: T),+) -> Self { Self::from_array([$($comp),+]) }
            }

            impl<T: Copy> Vector<T, $n> {
                $(
                    #[doc = concat!("Returns the `", stringify!($comp), "` component.")]
                    #[inline]
                    pub const fn $comp(&self) -> T { self.as_array()[$idx] }
                )+
            }
        )*
    };
}

impl_components! {
    2 => x: 0, y: 1;
    3 => x: 0, y: 1, z: 2;
    4 => x: 0, y: 1, z: 2, w: 3;
    5 => x: 0, y: 1, z: 2, w: 3, v: 4;
    6 => x: 0, y: 1, z: 2, w: 3, v: 4, u: 5;
}

impl<T: Scalar> Vector<T, 2> {
    /// Returns `(y·o.x − x·o.y, x·o.y − y·o.x)`.
    pub fn cross(&self, other: &Self) -> Self {
        let [x, y] = *self.as_array();
        let [ox, oy] = *other.as_array();
        Self::new(y * ox - x * oy, x * oy - y * ox)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Returns the cross product.
    pub fn cross(&self, other: &Self) -> Self { self.cross_with_trailing_products(other) }
}

macro_rules! impl_extended_cross {
    ($($n:literal),*) => {
        $(
            impl<T: Scalar> Vector<T, $n> {
                /// Returns the 3D cross product of the `x`, `y` and `z`
                /// components; every further component is the product of the
                /// corresponding components of `self` and `other`.
                pub fn cross(&self, other: &Self) -> Self { self.cross_with_trailing_products(other) }
            }
        )*
    };
}

impl_extended_cross!(4, 5, 6);

/// Implements `From<Vector<U, src>>` for vectors of every other dimension.
macro_rules! impl_from_dimension {
    ($src:literal => $($dst:literal),+) => {
        $(
            impl<T, U> From<Vector<U, $src>> for Vector<T, $dst>
            where
                T: Zero + Copy + 'static,
                U: AsPrimitive<T>,
            {
                fn from(src: Vector<U, $src>) -> Self { Self::from_vector(&src) }
            }
        )+
    };
}

impl_from_dimension!(2 => 3, 4, 5, 6);
impl_from_dimension!(3 => 2, 4, 5, 6);
impl_from_dimension!(4 => 2, 3, 5, 6);
impl_from_dimension!(5 => 2, 3, 4, 6);
impl_from_dimension!(6 => 2, 3, 4, 5);

#[cfg(test)]
mod tests {
    use crate::vector::{Vec2, Vec3, Vec4, Vec5, Vec6, Vector};
    use paste::paste;
    use proptest::prelude::*;

    #[test]
    fn positional_construction() {
        let v = Vec6::new(1, 2, 3, 4, 5, 6);
        assert_eq!(
            [v.x(), v.y(), v.z(), v.w(), v.v(), v.u()],
            [1, 2, 3, 4, 5, 6]
        );
        let v = Vec3::new(0.5, 1.5, 2.5);
        assert_eq!((v.x(), v.y(), v.z()), (0.5, 1.5, 2.5));
    }

    #[test]
    fn cross_3d() {
        assert_eq!(Vec3::new(1, 0, 0).cross(&Vec3::new(0, 1, 0)), Vec3::new(0, 0, 1));
        assert_eq!(Vec3::new(0, 1, 0).cross(&Vec3::new(1, 0, 0)), Vec3::new(0, 0, -1));
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0).cross(&Vec3::new(4.0, 5.0, 6.0)),
            Vec3::new(-3.0, 6.0, -3.0)
        );
    }

    #[test]
    fn cross_2d() {
        // (y·o.x − x·o.y, x·o.y − y·o.x)
        assert_eq!(Vec2::new(1, 2).cross(&Vec2::new(3, 4)), Vec2::new(2, -2));
        assert_eq!(Vec2::new(1, 0).cross(&Vec2::new(0, 1)), Vec2::new(-1, 1));
    }

    #[test]
    fn cross_beyond_3d_multiplies_trailing_components() {
        let a = Vec6::new(1, 0, 0, 2, 3, 4);
        let b = Vec6::new(0, 1, 0, 5, 6, 7);
        assert_eq!(a.cross(&b), Vec6::new(0, 0, 1, 10, 18, 28));

        let a = Vec4::new(1.0, 2.0, 3.0, -1.5);
        let b = Vec4::new(4.0, 5.0, 6.0, 2.0);
        assert_eq!(a.cross(&b), Vec4::new(-3.0, 6.0, -3.0, -3.0));

        let a = Vec5::new(0, 0, 1, 2, 2);
        let b = Vec5::new(1, 0, 0, 3, -1);
        assert_eq!(a.cross(&b), Vec5::new(0, 1, 0, 6, -2));
    }

    macro_rules! test_from_dimension {
        ($($src:literal => $dst:literal),*) => {
            paste! {
                $(
                    #[test]
                    fn [<convert_vec $src _into_vec $dst>]() {
                        let src = Vector::<f64, $src>::from_array(core::array::from_fn(|i| i as f64 + 0.75));
                        let dst: Vector<i32, $dst> = src.into();
                        for i in 0..$dst {
                            let expected = if i < $src { i as i32 } else { 0 };
                            assert_eq!(dst[i], expected);
                        }
                    }
                )*
            }
        };
    }

    test_from_dimension! {
        2 => 3, 2 => 4, 2 => 5, 2 => 6,
        3 => 2, 3 => 4, 3 => 5, 3 => 6,
        4 => 2, 4 => 3, 4 => 5, 4 => 6,
        5 => 2, 5 => 3, 5 => 4, 5 => 6,
        6 => 2, 6 => 3, 6 => 4, 6 => 5
    }

    proptest! {
        #[test]
        fn cross_3d_is_anticommutative(
            a in prop::array::uniform3(-1000i64..1000),
            b in prop::array::uniform3(-1000i64..1000),
        ) {
            let (a, b) = (Vec3::from(a), Vec3::from(b));
            prop_assert_eq!(a.cross(&b), -b.cross(&a));
        }

        #[test]
        fn cross_3d_is_orthogonal(
            a in prop::array::uniform3(-1000i64..1000),
            b in prop::array::uniform3(-1000i64..1000),
        ) {
            let (a, b) = (Vec3::from(a), Vec3::from(b));
            let c = a.cross(&b);
            prop_assert_eq!(c.dot(&a), 0);
            prop_assert_eq!(c.dot(&b), 0);
        }
    }
}
