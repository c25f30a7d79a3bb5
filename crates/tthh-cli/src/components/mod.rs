pub mod filter;
pub mod form;
pub mod parse;

/// Value parser for `--reference-year`, held to the same range as TTHH_REFERENCE_YEAR
pub fn parse_reference_year(text: &str) -> Result<i32, String> {
    tthh_core::config::parse_year("--reference-year", text).map_err(|e| e.to_string())
}
