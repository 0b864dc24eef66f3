//! Java identifier validation.

use crate::error::{IdentifierFault, OverloadError, Result};

/// Java reserved keywords that can never name a method or parameter.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "continue", "for", "new", "switch", "assert", "boolean",
    "break", "byte", "case", "catch", "char", "class", "const", "default",
    "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "package", "private", "protected", "public", "return",
    "short", "static", "strictfp", "super", "synchronized", "this", "throw",
    "throws", "transient", "try", "void", "volatile", "while",
];

/// Check whether `word` is a Java reserved keyword.
pub fn is_reserved(word: &str) -> bool {
    JAVA_KEYWORDS.contains(&word)
}

/// Validate a proposed method or parameter name.
///
/// Surrounding whitespace is ignored; the trimmed identifier is returned on
/// success. The identifier must start with an ASCII letter, continue with
/// ASCII letters, digits, `_` or `$`, and must not be a reserved word.
pub fn validate_identifier(identifier: &str) -> Result<&str> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(OverloadError::invalid_identifier(identifier, IdentifierFault::Empty));
    }

    if !has_legal_symbols(trimmed) {
        return Err(OverloadError::invalid_identifier(
            trimmed,
            IdentifierFault::IllegalSymbols,
        ));
    }

    if is_reserved(trimmed) {
        return Err(OverloadError::invalid_identifier(
            trimmed,
            IdentifierFault::ReservedWord,
        ));
    }

    Ok(trimmed)
}

fn has_legal_symbols(identifier: &str) -> bool {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
