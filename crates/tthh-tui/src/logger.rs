/// Logger that captures records into memory for the logs tab.
/// Writing to stdout would corrupt the terminal UI.
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

/// A log entry with timestamp and formatted message
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Thread-safe ring of log entries
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<RwLock<VecDeque<LogEntry>>>,
    max_lines: usize,
}

impl LogBuffer {
    pub fn new(max_lines: usize) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            logs: Arc::new(RwLock::new(VecDeque::with_capacity(max_lines))),
            max_lines,
        }
    }

    pub fn add_log(&self, entry: LogEntry) {
        let mut logs = self.logs.write().unwrap_or_else(PoisonError::into_inner);

        // drop the oldest entry once full
        if logs.len() >= self.max_lines {
            logs.pop_front();
        }

        logs.push_back(entry);
    }

    pub fn get_logs(&self) -> Vec<String> {
        self.logs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(LogEntry::format)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.logs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct BufferedLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl BufferedLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        Self { buffer, level }
    }
}

impl log::Log for BufferedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let entry = LogEntry {
                timestamp: chrono::Local::now()
                    .format("%Y-%m-%d %H:%M:%S%.3f")
                    .to_string(),
                level: record.level().to_string(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            };

            self.buffer.add_log(entry);
        }
    }

    fn flush(&self) {}
}

/// Install the buffered logger as the global logger and return its buffer.
///
/// Fails when another logger is already installed, e.g. when the CLI set up
/// env_logger before starting the form.
pub fn init_buffered_logger(max_lines: usize) -> Result<LogBuffer, SetLoggerError> {
    let buffer = LogBuffer::new(max_lines);
    let logger = BufferedLogger::new(buffer.clone(), LevelFilter::Debug);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};

    fn log_line(logger: &BufferedLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("tthh_tui::test")
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest_when_full() {
        let buffer = LogBuffer::new(2);
        let logger = BufferedLogger::new(buffer.clone(), LevelFilter::Debug);
        log_line(&logger, Level::Info, "one");
        log_line(&logger, Level::Info, "two");
        log_line(&logger, Level::Info, "three");

        let logs = buffer.get_logs();
        assert_eq!(logs.len(), 2);
        assert!(logs[0].ends_with("INFO tthh_tui::test: two"));
        assert!(logs[1].ends_with("INFO tthh_tui::test: three"));
    }

    #[test]
    fn test_level_filter() {
        let buffer = LogBuffer::new(10);
        let logger = BufferedLogger::new(buffer.clone(), LevelFilter::Info);
        log_line(&logger, Level::Debug, "hidden");
        log_line(&logger, Level::Warn, "shown");
        assert_eq!(buffer.len(), 1);
    }
}
