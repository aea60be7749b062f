//! Errors raised by vector operations.

/// All errors returned by `vecn`.
///
/// Numeric edge cases (division by zero, `sqrt`/`acos` domain errors) are not
/// errors; they surface as whatever the element type produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// A component index outside `[0, dim)` was used.
    #[error("component index {index} is out of range for a vector of dimension {dim}")]
    IndexOutOfRange {
        /// The offending index, widened so that negative indices survive.
        index: i128,
        /// Number of components of the vector.
        dim: usize,
    },
}

/// Convenience alias used throughout `vecn`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_message() {
        let err = Error::IndexOutOfRange { index: -1, dim: 3 };
        assert_eq!(
            err.to_string(),
            "component index -1 is out of range for a vector of dimension 3"
        );
    }
}
