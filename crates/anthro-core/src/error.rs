use anthro_model::GrowthError;
use anthro_standards::StandardsError;
use thiserror::Error;

/// Error from the free functions, which load the embedded tables on first
/// use.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Growth(#[from] GrowthError),

    #[error(transparent)]
    Standards(#[from] StandardsError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
