use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index does not address a live element, after negative indices are
    /// counted back from the end
    #[error("Index out of range: index {index} is outside the container")]
    IndexOutOfRange {
        /// Index as supplied by the caller, before normalization
        index: isize,
    },
    /// Removal attempted on a container with no elements
    #[error("Cannot remove from an empty container")]
    EmptyContainer,
}
