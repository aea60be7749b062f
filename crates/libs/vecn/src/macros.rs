//! Constructor macros accepting any number of leading components.

/// Creates a [`Vec2`](crate::Vec2) from one or two components; a missing `y`
/// is zero.
#[macro_export]
macro_rules! vec2 {
    ($($c:expr),+ $(,)?) => {
        $crate::Vec2::from_leading([$($c),+])
    };
}

/// Creates a [`Vec3`](crate::Vec3) from one to three leading components; the
/// missing trailing ones are zero.
#[macro_export]
macro_rules! vec3 {
    ($($c:expr),+ $(,)?) => {
        $crate::Vec3::from_leading([$($c),+])
    };
}

/// Creates a [`Vec4`](crate::Vec4) from one to four leading components; the
/// missing trailing ones are zero.
///
/// ```
/// use vecn::{vec4, Vec4};
/// assert_eq!(vec4!(1, 2), Vec4::new(1, 2, 0, 0));
/// ```
#[macro_export]
macro_rules! vec4 {
    ($($c:expr),+ $(,)?) => {
        $crate::Vec4::from_leading([$($c),+])
    };
}

/// Creates a [`Vec5`](crate::Vec5) from one to five leading components; the
/// missing trailing ones are zero.
#[macro_export]
macro_rules! vec5 {
    ($($c:expr),+ $(,)?) => {
        $crate::Vec5::from_leading([$($c),+])
    };
}

/// Creates a [`Vec6`](crate::Vec6) from one to six leading components; the
/// missing trailing ones are zero.
#[macro_export]
macro_rules! vec6 {
    ($($c:expr),+ $(,)?) => {
        $crate::Vec6::from_leading([$($c),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Vec2, Vec3, Vec5, Vec6};

    #[test]
    fn macros_zero_fill() {
        assert_eq!(vec2!(3), Vec2::new(3, 0));
        assert_eq!(vec3!(1.0, 2.0), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(vec5!(1u8, 2, 3,), Vec5::new(1, 2, 3, 0, 0));
        assert_eq!(vec6!(1, 2, 3, 4, 5, 6), Vec6::new(1, 2, 3, 4, 5, 6));
        assert_eq!(vec4!(7), crate::Vec4::from_leading([7]));
    }
}
