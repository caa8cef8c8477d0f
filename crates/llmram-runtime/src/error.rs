use std::fmt;

/// Result type for llmram-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Quantization table construction failed
    Table(llmram_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration file could not be read or written
    Config(String),

    /// A setting is outside its allowed range
    InvalidSetting(String),

    /// Refused to overwrite an existing file
    AlreadyExists(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Table(err) => write!(f, "Table error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidSetting(msg) => write!(f, "Invalid setting: {}", msg),
            Error::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Table(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::InvalidSetting(_) | Error::AlreadyExists(_) => None,
        }
    }
}

impl From<llmram_types::Error> for Error {
    fn from(err: llmram_types::Error) -> Self {
        Error::Table(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
