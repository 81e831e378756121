use thiserror::Error;

use crate::errors::ValidationError;

/// Top-level failure of one projection pass.
///
/// Either the snapshot could not be decoded at all, or its roster failed
/// seating validation. Both abort the pass; neither is retried internally.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("snapshot decode failed: {0}")]
    SnapshotDecode(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ProjectionError {
    /// Stable code mirroring [`ValidationError::code`].
    pub fn code(&self) -> &'static str {
        match self {
            ProjectionError::SnapshotDecode(_) => "SNAPSHOT_DECODE",
            ProjectionError::Validation(err) => err.code(),
        }
    }
}
