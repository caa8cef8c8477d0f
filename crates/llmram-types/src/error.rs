use std::fmt;

/// Result type for llmram-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A quantization table has no levels
    EmptyTable(String),

    /// The same level name appears twice in one table
    DuplicateLevel { table: String, level: String },

    /// A bit-width is zero, negative, NaN or infinite
    InvalidBitWidth { level: String, bits: f64 },

    /// The requested default level is not part of the table
    UnknownDefault { table: String, level: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyTable(table) => write!(f, "Quantization table '{}' has no levels", table),
            Error::DuplicateLevel { table, level } => write!(
                f,
                "Quantization table '{}' defines level '{}' more than once",
                table, level
            ),
            Error::InvalidBitWidth { level, bits } => write!(
                f,
                "Level '{}' has invalid bit-width {} (must be a positive number)",
                level, bits
            ),
            Error::UnknownDefault { table, level } => write!(
                f,
                "Default level '{}' is not defined in quantization table '{}'",
                level, table
            ),
        }
    }
}

impl std::error::Error for Error {}
