use std::fmt;

/// The main error type for Foam parsing and writing.
#[derive(Debug, Clone, PartialEq)]
pub enum FoamError {
    /// Raised when the lexer hits input matching no token pattern.
    /// Carries the first ten characters of the unconsumed remainder and
    /// the absolute character offset of the failure.
    UnexpectedCharacter {
        preview: String,
        position: usize,
    },
    /// Raised when the parser sees a structurally invalid token.
    UnexpectedToken {
        token: String,
    },
    /// Raised when the writer is handed a root value that is not a dict.
    InvalidRootElement,
    /// Raised by the file convenience helpers, never by the codec itself.
    FileError {
        message: String,
        path: String,
    },
}

impl fmt::Display for FoamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoamError::UnexpectedCharacter { preview, position } =>
                write!(f, "[FOAM] Unexpected character at offset {}: {:?}", position, preview),
            FoamError::UnexpectedToken { token } =>
                write!(f, "[FOAM] Unexpected token '{}'", token),
            FoamError::InvalidRootElement =>
                write!(f, "[FOAM] Root element must be a dictionary"),
            FoamError::FileError { message, path } =>
                write!(f, "[FOAM] File Error '{}': {}", path, message),
        }
    }
}

impl std::error::Error for FoamError {}
