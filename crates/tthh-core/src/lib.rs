mod calendar;
mod canonical;
mod exceptions;
mod field;
mod filter;
mod parser;

// public api
pub mod config;
pub use calendar::{CalendarStep, Week, days_in_month, month_weeks, step as step_calendar};
pub use canonical::{Canonical, IsoStringValue, NaiveDateValue};
pub use config::InputConfig;
pub use exceptions::{ConfigError, DateParseError};
pub use field::{
    Change, Commit, CommitOutcome, DateField, DateFieldEvent, DateFieldProps, DateInput,
    DateStringInput,
};
pub use filter::{format_deletion, format_input, sanitize};
pub use parser::{
    DatePattern, expand_two_digit_year, format_display, format_iso, match_date_text,
    parse_date_text, parse_date_text_with_year, parse_iso,
};
