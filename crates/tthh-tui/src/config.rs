/// Settings of the terminal front end. Date handling settings live in
/// `tthh_core::config`.
use tthh_core::ConfigError;

/// How often the event loop polls the terminal for input
pub static TTHH_TUI_POLL_INTERVAL_MS: u64 = 16;

/// Log lines kept in memory for the logs tab
pub static TTHH_TUI_MAX_LOG_LINES: usize = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiConfig {
    pub poll_interval_ms: u64,
    pub max_log_lines: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: TTHH_TUI_POLL_INTERVAL_MS,
            max_log_lines: TTHH_TUI_MAX_LOG_LINES,
        }
    }
}

impl TuiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, falling back to the statics above
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup("TTHH_TUI_POLL_INTERVAL_MS") {
            config.poll_interval_ms = parse_positive("TTHH_TUI_POLL_INTERVAL_MS", &value)? as u64;
        }
        if let Some(value) = lookup("TTHH_TUI_MAX_LOG_LINES") {
            config.max_log_lines = parse_positive("TTHH_TUI_MAX_LOG_LINES", &value)?;
        }
        Ok(config)
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Blank { key });
    }
    match trimmed.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        }),
    }
}
