use crate::{
    dim::{Dimension, SupportedDimension},
    scalar::Scalar,
    vector::Vector,
};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_ops {
    ($($trait:ident, $op:ident);*) => {
        $(
            impl<T: Scalar, const N: usize> $trait for Vector<T, N>
            where
                Dimension<N>: SupportedDimension,
            {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, other: Vector<T, N>) -> Vector<T, N> { self.zip_with(&other, |a, b| a.$op(b)) }
            }

            impl<T: Scalar, const N: usize> $trait<&Vector<T, N>> for Vector<T, N>
            where
                Dimension<N>: SupportedDimension,
            {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, other: &Vector<T, N>) -> Vector<T, N> { self.zip_with(other, |a, b| a.$op(b)) }
            }

            impl<T: Scalar, const N: usize> $trait<Vector<T, N>> for &Vector<T, N>
            where
                Dimension<N>: SupportedDimension,
            {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, other: Vector<T, N>) -> Vector<T, N> { self.zip_with(&other, |a, b| a.$op(b)) }
            }

            impl<T: Scalar, const N: usize> $trait<&Vector<T, N>> for &Vector<T, N>
            where
                Dimension<N>: SupportedDimension,
            {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, other: &Vector<T, N>) -> Vector<T, N> { self.zip_with(other, |a, b| a.$op(b)) }
            }

            impl<T: Scalar, const N: usize> $trait<T> for Vector<T, N>
            where
                Dimension<N>: SupportedDimension,
            {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, other: T) -> Vector<T, N> { self.map(|a| a.$op(other)) }
            }
        )*
    };
}

macro_rules! impl_ops_assign {
    ($($trait:ident, $op_assign:ident => $op:ident);*) => {
        $(
            impl<T: Scalar, const N: usize> $trait for Vector<T, N>
            where
                Dimension<N>: SupportedDimension,
            {
                #[inline]
                fn $op_assign(&mut self, other: Vector<T, N>) { *self = self.zip_with(&other, |a, b| a.$op(b)); }
            }

            impl<T: Scalar, const N: usize> $trait<&Vector<T, N>> for Vector<T, N>
            where
                Dimension<N>: SupportedDimension,
            {
                #[inline]
                fn $op_assign(&mut self, other: &Vector<T, N>) { *self = self.zip_with(other, |a, b| a.$op(b)); }
            }

            impl<T: Scalar, const N: usize> $trait<T> for Vector<T, N>
            where
                Dimension<N>: SupportedDimension,
            {
                #[inline]
                fn $op_assign(&mut self, other: T) { *self = self.map(|a| a.$op(other)); }
            }
        )*
    };
}

impl_ops! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div
}

impl_ops_assign! {
    AddAssign, add_assign => add;
    SubAssign, sub_assign => sub;
    MulAssign, mul_assign => mul;
    DivAssign, div_assign => div
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Scalar + Neg<Output = T>,
    Dimension<N>: SupportedDimension,
{
    type Output = Vector<T, N>;

    fn neg(self) -> Self::Output { self.map(|a| -a) }
}

impl<T, const N: usize> Neg for &Vector<T, N>
where
    T: Scalar + Neg<Output = T>,
    Dimension<N>: SupportedDimension,
{
    type Output = Vector<T, N>;

    fn neg(self) -> Self::Output { self.map(|a| -a) }
}

#[cfg(test)]
mod tests {
    use crate::vector::{Vec2, Vec3, Vec4, Vec6};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn elementwise_binary_ops() {
        let a = Vec4::new(8, 6, 4, 2);
        let b = Vec4::new(2, 3, 4, 1);
        assert_eq!(a + b, Vec4::new(10, 9, 8, 3));
        assert_eq!(a - b, Vec4::new(6, 3, 0, 1));
        assert_eq!(a * b, Vec4::new(16, 18, 16, 2));
        assert_eq!(a / b, Vec4::new(4, 2, 1, 2));

        assert_eq!(&a + &b, a + b);
        assert_eq!(a - &b, &a - b);
    }

    #[test]
    fn operands_are_untouched() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        let _sum = a + b;
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn scalar_ops() {
        let a = Vec3::new(1.0f32, -2.0, 4.0);
        assert_eq!(a * 2.0, Vec3::new(2.0, -4.0, 8.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, -1.0, 2.0));
        assert_eq!(Vec2::new(7, 9) / 2, Vec2::new(3, 4));
    }

    #[test]
    fn assign_ops() {
        let mut a = Vec2::new(1, 2);
        a += Vec2::new(10, 20);
        assert_eq!(a, Vec2::new(11, 22));
        a -= &Vec2::new(1, 2);
        assert_eq!(a, Vec2::new(10, 20));
        a *= Vec2::new(2, 3);
        assert_eq!(a, Vec2::new(20, 60));
        a /= 10;
        assert_eq!(a, Vec2::new(2, 6));
    }

    #[test]
    fn negation() {
        assert_eq!(-Vec3::new(1, -2, 0), Vec3::new(-1, 2, 0));
        assert_eq!(-&Vec2::new(1.5, -0.5), Vec2::new(-1.5, 0.5));
    }

    #[test]
    fn float_division_by_zero_is_not_special_cased() {
        let v = Vec2::new(1.0f64, 0.0) / Vec2::new(0.0, 0.0);
        assert_eq!(v[0], f64::INFINITY);
        assert!(v[1].is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_traps() { let _ = Vec2::new(1, 2) / Vec2::new(1, 0); }

    proptest! {
        #[test]
        fn add_then_sub_is_identity_for_integers(
            a in prop::array::uniform6(-100_000i32..100_000),
            b in prop::array::uniform6(-100_000i32..100_000),
        ) {
            let (a, b) = (Vec6::from(a), Vec6::from(b));
            prop_assert_eq!(a + b - b, a);
            prop_assert_eq!(a - b + b, a);
        }

        #[test]
        fn add_then_sub_is_identity_for_floats(
            a in prop::array::uniform3(-1.0e3f64..1.0e3),
            b in prop::array::uniform3(-1.0e3f64..1.0e3),
        ) {
            let (a, b) = (Vec3::from(a), Vec3::from(b));
            assert_abs_diff_eq!(a + b - b, a, epsilon = 1.0e-9);
            assert_abs_diff_eq!(a - b + b, a, epsilon = 1.0e-9);
        }
    }
}
