//! Dimensions a [`Vector`](crate::Vector) can have.

/// Type-level dimension marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dimension<const N: usize>;

mod sealed {
    pub trait Sealed {}
}

/// Implemented by the dimensions a vector may be instantiated with: 2 to 6.
///
/// The trait is sealed; any other dimension fails to type-check.
pub trait SupportedDimension: sealed::Sealed {
    /// Labels of the components in declaration order.
    const COMPONENTS: &'static [&'static str];
}

macro_rules! impl_supported_dimension {
    ($($n:literal => [$($label:literal),+]);* $(;)?) => {
        $(
            impl sealed::Sealed for Dimension<$n> {}

            impl SupportedDimension for Dimension<$n> {
                const COMPONENTS: &'static [&'static str] = &[$($label),+];
            }
        )*
    };
}

impl_supported_dimension! {
    2 => ["x", "y"];
    3 => ["x", "y", "z"];
    4 => ["x", "y", "z", "w"];
    5 => ["x", "y", "z", "w", "v"];
    6 => ["x", "y", "z", "w", "v", "u"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_labels() {
        assert_eq!(<Dimension<2> as SupportedDimension>::COMPONENTS, ["x", "y"]);
        assert_eq!(
            <Dimension<6> as SupportedDimension>::COMPONENTS,
            ["x", "y", "z", "w", "v", "u"]
        );
    }
}
