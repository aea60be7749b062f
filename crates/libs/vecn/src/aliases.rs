//! Named instantiations binding each dimension to a primitive element type.
//!
//! The suffix names the element type: `b` (`i8`), `s` (`i16`), `i` (`i32`),
//! `l` (`i64`), `f` (`f32`), `d` (`f64`), `ub` (`u8`), `us` (`u16`),
//! `ui` (`u32`), `ul` (`u64`) and `r` ([`Real`]).

use crate::vector::Vector;
use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "use_f64")] {
        /// Default real number type, `f64` with the `use_f64` feature.
        pub type Real = f64;
    } else {
        /// Default real number type, `f32` unless the `use_f64` feature is
        /// enabled.
        pub type Real = f32;
    }
}

macro_rules! impl_aliases {
    ($($n:literal),*) => {
        paste::paste! {
            $(
                #[doc = concat!(stringify!($n), "-component vector of `i8`.")]
                pub type [<Vec $n b>] = Vector<i8, $n>;
                #[doc = concat!(stringify!($n), "-component vector of `i16`.")]
                pub type [<Vec $n s>] = Vector<i16, $n>;
                #[doc = concat!(stringify!($n), "-component vector of `i32`.")]
                pub type [<Vec $n i>] = Vector<i32, $n>;
                #[doc = concat!(stringify!($n), "-component vector of `i64`.")]
                pub type [<Vec $n l>] = Vector<i64, $n>;
                #[doc = concat!(stringify!($n), "-component vector of `f32`.")]
                pub type [<Vec $n f>] = Vector<f32, $n>;
                #[doc = concat!(stringify!($n), "-component vector of `f64`.")]
                pub type [<Vec $n d>] = Vector<f64, $n>;
                #[doc = concat!(stringify!($n), "-component vector of `u8`.")]
                pub type [<Vec $n ub>] = Vector<u8, $n>;
                #[doc = concat!(stringify!($n), "-component vector of `u16`.")]
                pub type [<Vec $n us>] = Vector<u16, $n>;
                #[doc = concat!(stringify!($n), "-component vector of `u32`.")]
                pub type [<Vec $n ui>] = Vector<u32, $n>;
                #[doc = concat!(stringify!($n), "-component vector of `u64`.")]
                pub type [<Vec $n ul>] = Vector<u64, $n>;
                #[doc = concat!(stringify!($n), "-component vector of [`Real`].")]
                pub type [<Vec $n r>] = Vector<Real, $n>;
            )*
        }
    };
}

impl_aliases!(2, 3, 4, 5, 6);

static_assertions::assert_type_eq_all!(Vec3d, Vector<f64, 3>, crate::Vec3<f64>);
static_assertions::assert_eq_size!(Vec4ub, u32);
