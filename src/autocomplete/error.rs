use thiserror::Error;

/// Errors raised by the autocomplete engine and its input/output adapters.
#[derive(Error, Debug)]
pub enum AutocompleteError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    #[error("argument `{name}` is out of range ({value}): {reason}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("range [{from}, {from}+{length}) exceeds array of length {len}")]
    RangeViolation {
        from: usize,
        length: usize,
        len: usize,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AutocompleteError>;

impl AutocompleteError {
    /// Name of the offending argument, if the error is a validation failure.
    pub fn argument_name(&self) -> Option<&'static str> {
        match self {
            AutocompleteError::InvalidArgument { name, .. } => Some(*name),
            AutocompleteError::OutOfRange { name, .. } => Some(*name),
            _ => None,
        }
    }
}
