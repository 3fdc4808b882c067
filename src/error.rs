//! Error types for cell and symmetry computations

use thiserror::Error;

/// Boxed error from the host boundary; propagated unmodified.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for cell operations
pub type CellResult<T = ()> = Result<T, CellError>;

/// Errors from unit cell construction and symmetry placement
#[derive(Debug, Error)]
pub enum CellError {
    /// gamma of 0 or 180 degrees collapses the a/b plane
    #[error("degenerate cell: sin(gamma) is zero for gamma = {gamma} degrees")]
    DegenerateGamma { gamma: f32 },

    /// The angle triple admits no real c axis (negative radicand)
    #[error("impossible cell angles ({alpha}, {beta}, {gamma}): c axis has no real solution")]
    InvalidAngles { alpha: f32, beta: f32, gamma: f32 },

    /// Cell edge lengths must be strictly positive
    #[error("cell edge '{axis}' must be positive, got {value}")]
    NonPositiveEdge { axis: char, value: f32 },

    /// Malformed symmetry operation triplet string
    #[error("invalid symmetry operation '{op}': {reason}")]
    BadSymop { op: String, reason: String },

    /// Failure from an injected host call
    #[error(transparent)]
    Host(#[from] HostError),
}

impl CellError {
    /// Create a symop parse error
    pub fn bad_symop(op: impl Into<String>, reason: impl Into<String>) -> Self {
        CellError::BadSymop {
            op: op.into(),
            reason: reason.into(),
        }
    }
}
