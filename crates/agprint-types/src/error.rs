use thiserror::Error;

/// Result type for agprint-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding a record
#[derive(Debug, Error)]
pub enum Error {
    /// Input was not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input was valid JSON but not an object
    #[error("record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A checked record kind is missing required fields
    #[error(
        "Invalid {kind} message: missing required field(s): {}\nExample of a valid {kind} message:\n{example}",
        .missing.join(", ")
    )]
    Validation {
        kind: &'static str,
        missing: Vec<&'static str>,
        example: String,
    },

    /// Fields are present but do not have the expected shape
    #[error("Malformed {kind} message: {source}")]
    Malformed {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// True when the input line itself could not be parsed as JSON.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Json(_))
    }

    /// Names of the missing fields for validation errors, empty otherwise.
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Error::Validation { missing, .. } => missing,
            _ => &[],
        }
    }
}
