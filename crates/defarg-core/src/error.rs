//! Error types for defarg-core.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Result type for defarg-core operations.
pub type Result<T> = std::result::Result<T, OverloadError>;

/// Why an identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierFault {
    /// Nothing left after trimming whitespace.
    Empty,
    /// Does not start with a letter, or contains characters other than
    /// letters, digits, `_` and `$`.
    IllegalSymbols,
    /// A Java reserved word.
    ReservedWord,
}

impl fmt::Display for IdentifierFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierFault::Empty => f.write_str("identifier is empty"),
            IdentifierFault::IllegalSymbols => f.write_str("contains illegal symbols"),
            IdentifierFault::ReservedWord => f.write_str("is a reserved keyword"),
        }
    }
}

/// Errors that can occur while describing or generating overloads.
#[derive(Error, Diagnostic, Debug)]
pub enum OverloadError {
    /// Illegal characters or a reserved word.
    #[error("Invalid identifier '{identifier}': {fault}")]
    #[diagnostic(
        code(defarg::invalid_identifier),
        help("identifiers start with a letter followed by letters, digits, '_' or '$'")
    )]
    InvalidIdentifier {
        identifier: String,
        fault: IdentifierFault,
    },

    /// Argument name reused within one method.
    #[error("Identifier '{identifier}' is already in use")]
    #[diagnostic(code(defarg::duplicate_identifier))]
    DuplicateIdentifier { identifier: String },

    /// Adding the argument would reach the defaulted-argument ceiling.
    #[error("Using {limit} or more arguments with default values is restricted")]
    #[diagnostic(
        code(defarg::too_many_defaults),
        help("every defaulted argument doubles the number of generated overloads")
    )]
    TooManyDefaults { limit: usize },

    /// A required input was absent or blank.
    #[error("Missing required field: {field}")]
    #[diagnostic(code(defarg::missing_field))]
    MissingField { field: &'static str },

    /// Generation was requested for a method without arguments.
    #[error("No arguments provided for method '{method}'")]
    #[diagnostic(
        code(defarg::no_arguments),
        help("add at least one argument before generating overloads")
    )]
    NoArguments { method: String },

    /// Writing to the output sink failed.
    #[error("Failed to write overloads: {0}")]
    #[diagnostic(code(defarg::io))]
    Io(#[from] std::io::Error),
}

impl OverloadError {
    pub(crate) fn invalid_identifier(identifier: &str, fault: IdentifierFault) -> Self {
        OverloadError::InvalidIdentifier {
            identifier: identifier.to_string(),
            fault,
        }
    }
}
