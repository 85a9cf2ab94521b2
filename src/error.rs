use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("Level {index} does not exist ({count} levels defined)")]
    UnknownLevel { index: usize, count: usize },
    #[error("Level requires {required} pairs but its cards only form {available}")]
    NotEnoughPairs { required: u32, available: u32 },
    #[error("Level has not been completed yet")]
    NotComplete,
    #[error("Flip duration must be non-zero")]
    ZeroFlipDuration,
    #[error("Invalid level data: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LevelError>;
