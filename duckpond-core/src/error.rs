use thiserror::Error;

/// Raised when a duck kind or behavior identifier cannot be recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {what} '{input}' (expected one of: {expected})")]
pub struct ParseStyleError {
    pub what: &'static str,
    pub input: String,
    pub expected: String,
}

impl ParseStyleError {
    pub(crate) fn new(what: &'static str, input: &str, expected: &[&str]) -> Self {
        Self {
            what,
            input: input.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Errors raised while loading scenario scripts.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("script contains no scenarios")]
    Empty,
    #[error("scenario '{title}' has no steps")]
    NoSteps { title: String },
}

/// Normalise a user-supplied identifier: trimmed, lowercase, `-` folded to `_`.
pub(crate) fn normalize_ident(input: &str) -> String {
    input.trim().to_ascii_lowercase().replace('-', "_")
}
