use thiserror::Error;

/// Reasons a piece of date text could not be turned into a calendar date.
///
/// `Empty` is kept apart from `Unrecognized` because an empty field is cleared
/// on commit while unrecognized text is reverted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date text is empty")]
    Empty,
    #[error("'{0}' does not match DD/MM/YY, DD/MM or DD/MM/YYYY")]
    Unrecognized(String),
}

impl DateParseError {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a year between 1 and 9999, got '{value}'")]
    InvalidYear { key: &'static str, value: String },
    #[error("{key} must be a positive whole number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must not be blank")]
    Blank { key: &'static str },
}
