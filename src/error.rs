use thiserror::Error;

pub type MarkerResult<T> = Result<T, MarkerError>;

#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("invalid alpha: {0} (expected a value in [0, 1])")]
    InvalidAlpha(f64),

    #[error("invalid axis range: lower={lower}, upper={upper}")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
