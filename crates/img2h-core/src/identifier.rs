//! C identifier validation and derivation.
//!
//! The array name is emitted verbatim into C source, so it has to be a
//! legal identifier: `[A-Za-z_][A-Za-z0-9_]*` and not a reserved keyword.

use std::path::Path;

use thiserror::Error;

/// Reasons a name cannot be used as a C identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier '{0}' starts with a digit")]
    LeadingDigit(String),

    #[error("identifier '{name}' contains invalid character {ch:?}")]
    InvalidCharacter { name: String, ch: char },

    #[error("identifier '{0}' is a reserved C keyword")]
    Keyword(String),
}

/// C89 through C11 keywords.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

/// Check that `name` is a legal C identifier.
pub fn validate_identifier(name: &str) -> Result<(), IdentifierError> {
    let first = name.chars().next().ok_or(IdentifierError::Empty)?;

    if first.is_ascii_digit() {
        return Err(IdentifierError::LeadingDigit(name.to_string()));
    }

    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(IdentifierError::InvalidCharacter {
            name: name.to_string(),
            ch,
        });
    }

    if C_KEYWORDS.contains(&name) {
        return Err(IdentifierError::Keyword(name.to_string()));
    }

    Ok(())
}

/// Derive an array name from an output path: directory and the last
/// extension are stripped (`out/logo.h` -> `logo`).
///
/// The stem is returned as-is; callers validate it like any other name.
pub fn identifier_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}
