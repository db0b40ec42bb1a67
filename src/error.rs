//! Error types for tooltip placement
//!
//! Missing measurements are not errors: the engine degrades to sentinel
//! positions instead. These variants cover contract violations at the
//! boundaries (bad direction tokens, absent targets, JS marshalling).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Token outside `up|down|left|right` with an optional `-start|-middle|-end`
    #[error("Invalid direction token: {0:?}")]
    InvalidDirectionToken(String),

    /// Every placement needs an anchor element
    #[error("Placement target is missing")]
    MissingTarget,

    #[error("Failed to deserialize placement input: {0}")]
    Deserialize(String),

    #[error("Failed to serialize placement result: {0}")]
    Serialize(String),

    /// Browser APIs unavailable or returned an error
    #[error("DOM access failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, PlacementError>;
