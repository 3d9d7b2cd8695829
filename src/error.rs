use std::fmt;

/// Custom error types for the ant simulation
#[derive(Debug)]
pub enum SimError {
    /// IO operation failed (frame export)
    Io(std::io::Error),
    /// A configuration value is outside its documented range
    InvalidConfig(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io(err) => write!(f, "IO error: {}", err),
            SimError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
