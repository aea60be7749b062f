//! # vecn
//! Generic fixed-dimension vectors.
//!
//! [`Vector<T, N>`](Vector) holds `N` components (2 to 6) of a numeric type
//! `T` and provides elementwise arithmetic, the usual metric operations (dot
//! and cross products, magnitude, normalization, distance, angles), checked
//! and unchecked component access, text rendering and conversions between
//! dimensions and element types.
//!
//! ```
//! use vecn::{vec4, Vec2, Vec3, Vec4};
//!
//! let v = Vec3::new(1.0f64, 2.0, 3.0);
//! assert!((v.magnitude() - 3.7416573867739413).abs() < 1e-12);
//! assert_eq!(Vec2::new(3, 4).distance(&Vec2::new(0, 0)), 5);
//! assert_eq!(Vec3::new(1, 0, 0).cross(&Vec3::new(0, 1, 0)), Vec3::new(0, 0, 1));
//! assert_eq!(Vec2::new(1.5, 2.5).to_string(), "1.5, 2.5");
//! assert_eq!(vec4!(1, 2), Vec4::new(1, 2, 0, 0));
//!
//! // Widening zero-fills, narrowing drops trailing components.
//! let w: Vec4<i32> = Vec2::new(1.9f32, 2.1).cast::<i32>().into();
//! assert_eq!(w, Vec4::new(1, 2, 0, 0));
//! ```

pub mod aliases;
mod dim;
pub mod error;
mod macros;
mod scalar;
mod vector;

pub use aliases::*;
pub use dim::{Dimension, SupportedDimension};
pub use error::{Error, Result};
pub use scalar::{ComponentIndex, Scalar};
pub use vector::{Vec2, Vec3, Vec4, Vec5, Vec6, Vector};

/// Items intended for glob-import: `use vecn::prelude::*;`
pub mod prelude {
    pub use crate::{
        vec2, vec3, vec4, vec5, vec6, Real, Scalar, Vec2, Vec3, Vec4, Vec5, Vec6, Vector,
    };
}
