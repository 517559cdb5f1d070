use thiserror::Error;

/// Errors raised by canvas operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// A snapshot taken from a canvas of another size cannot be restored
    #[error("snapshot is {found:?} but canvas is {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
}
