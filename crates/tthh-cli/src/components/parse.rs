use crate::exceptions::CliError;
use crate::models::OutputFormat;
use serde::Serialize;
use tthh_core::{InputConfig, format_display, format_iso, match_date_text};

/// Parse date text the way a date field commits it
#[derive(clap::Args, Debug)]
#[command(version, about, long_about = None)]
pub struct ParseArgs {
    /// Text as a user would type it: DD/MM/YY, DD/MM or DD/MM/YYYY
    pub text: String,

    /// Shorthand for `--format iso`
    #[arg(long, conflicts_with = "format")]
    pub iso: bool,

    /// Output format
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Year used for DD/MM and as the centre of the two-digit year window.
    /// Overrides TTHH_REFERENCE_YEAR
    #[arg(long, short = 'y', value_parser = super::parse_reference_year)]
    pub reference_year: Option<i32>,
}

#[derive(Debug, Serialize)]
struct ParsedDate {
    input: String,
    pattern: &'static str,
    display: String,
    iso: String,
}

impl ParseArgs {
    fn output_format(&self) -> OutputFormat {
        if self.iso {
            OutputFormat::Iso
        } else {
            self.format.unwrap_or_default()
        }
    }

    pub fn run(&self, config: InputConfig) -> Result<String, CliError> {
        let year = config.with_reference_year(self.reference_year).effective_year();
        let (pattern, date) = match_date_text(&self.text, year).map_err(|source| {
            CliError::Parse {
                text: self.text.clone(),
                source,
            }
        })?;
        log::debug!("'{}' parsed as {} (reference year {})", self.text, date, year);

        let output = match self.output_format() {
            OutputFormat::Display => format_display(date),
            OutputFormat::Iso => format_iso(date),
            OutputFormat::Json => serde_json::to_string(&ParsedDate {
                input: self.text.clone(),
                pattern: pattern.label(),
                display: format_display(date),
                iso: format_iso(date),
            })?,
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tthh_core::{DateParseError, DatePattern};

    fn args(text: &str) -> ParseArgs {
        ParseArgs {
            text: text.to_string(),
            iso: false,
            format: None,
            reference_year: Some(2025),
        }
    }

    #[test]
    fn test_display_output() {
        assert_eq!(args("15/05").run(InputConfig::default()).unwrap(), "15/05/25");
        assert_eq!(args("1/2/1999").run(InputConfig::default()).unwrap(), "01/02/99");
    }

    #[test]
    fn test_iso_flag() {
        let mut a = args("15/05/24");
        a.iso = true;
        assert_eq!(a.run(InputConfig::default()).unwrap(), "2024-05-15");
    }

    #[test]
    fn test_flag_overrides_config_year() {
        let config = InputConfig {
            reference_year: Some(1990),
            ..InputConfig::default()
        };
        assert_eq!(args("01/01").run(config).unwrap(), "01/01/25");
    }

    #[test]
    fn test_json_output() {
        let mut a = args("15/05/2024");
        a.format = Some(OutputFormat::Json);
        let out: serde_json::Value = serde_json::from_str(&a.run(InputConfig::default()).unwrap()).unwrap();
        assert_eq!(out["iso"], "2024-05-15");
        assert_eq!(out["display"], "15/05/24");
        assert_eq!(out["pattern"], DatePattern::DayMonthLongYear.label());
    }

    #[test]
    fn test_unparseable_text() {
        let err = args("31/02/24").run(InputConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Parse {
                source: DateParseError::Unrecognized(_),
                ..
            }
        ));
        let err = args("  ").run(InputConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Parse {
                source: DateParseError::Empty,
                ..
            }
        ));
    }
}
