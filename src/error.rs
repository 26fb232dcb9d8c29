use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the physics core.
///
/// Stepping the simulation never fails; configuration loading and the
/// observers that consume each frame can.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration value outside its supported range.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Writing a frame or reading a settings file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Settings file or trace record could not be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
