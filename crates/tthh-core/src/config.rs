/// This config file lists out the default values for the TTHH date input.
/// Each can be overridden by an ENV var of the same name, and some can also be
/// overridden from the command line. These should only be primitive types
///
use crate::exceptions::ConfigError;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// placeholder shown by an empty date field
pub static TTHH_DATE_PLACEHOLDER: &str = "DD/MM/AA";

/// fixed year used to complete DD/MM input and to place two-digit years.
/// Unset means the current local year
pub static TTHH_REFERENCE_YEAR: Option<i32> = None;

/// longest accepted display text, the length of DD/MM/YYYY
pub static TTHH_MAX_INPUT_LEN: usize = 10;

/// two-digit years resolve into the century window ending this many years
/// after the reference year
pub static TTHH_TWO_DIGIT_YEAR_LOOKAHEAD: i32 = 50;

/// Settings threaded into every date field of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    pub placeholder: String,
    pub reference_year: Option<i32>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            placeholder: TTHH_DATE_PLACEHOLDER.to_string(),
            reference_year: TTHH_REFERENCE_YEAR,
        }
    }
}

impl InputConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to the defaults above
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(placeholder) = lookup("TTHH_DATE_PLACEHOLDER") {
            if placeholder.trim().is_empty() {
                return Err(ConfigError::Blank {
                    key: "TTHH_DATE_PLACEHOLDER",
                });
            }
            config.placeholder = placeholder;
        }

        if let Some(year) = lookup("TTHH_REFERENCE_YEAR") {
            config.reference_year = Some(parse_year("TTHH_REFERENCE_YEAR", &year)?);
        }

        Ok(config)
    }

    pub fn with_reference_year(mut self, year: Option<i32>) -> Self {
        if year.is_some() {
            self.reference_year = year;
        }
        self
    }

    /// The year used for DD/MM completion right now
    pub fn effective_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }
}

pub fn parse_year(key: &'static str, value: &str) -> Result<i32, ConfigError> {
    match value.trim().parse::<i32>() {
        Ok(year) if (1..=9999).contains(&year) => Ok(year),
        _ => Err(ConfigError::InvalidYear {
            key,
            value: value.to_string(),
        }),
    }
}
