use serde::Serialize;

/// How `tthh parse` prints a date
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// DD/MM/YY, as a field shows it
    #[default]
    Display,
    /// YYYY-MM-DD, as the string variant stores it
    Iso,
    /// both forms plus the pattern that matched
    Json,
}
