//! Console Logger
//!
//! Installs a `tracing` subscriber whose output goes to the browser console
//! (`console.error` / `warn` / `info` / `log` by level). Off the browser the
//! same lines go to stderr, which keeps native test runs readable.

use std::io;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log level: {0}")]
    InvalidLevel(String),

    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Parse `off`, `error`, `warn`, `info`, `debug` or `trace` (any case)
pub fn parse_level(raw: &str) -> Result<LevelFilter, LoggerError> {
    raw.trim()
        .parse::<LevelFilter>()
        .map_err(|_| LoggerError::InvalidLevel(raw.to_string()))
}

/// Install the global subscriber. Fails, without panicking, if one is
/// already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        // wasm32-unknown-unknown has no system clock
        .without_time()
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}

/// Console method an event is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Log,
        }
    }
}

/// Hands out one [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new((*meta.level()).into())
    }
}

/// Buffers one formatted event and emits it as a single console call
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    /// Take the buffered line, without its trailing newline
    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buffer)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        self.buffer.clear();
        Some(line)
    }

    fn emit(&mut self) {
        if let Some(line) = self.take_line() {
            write_console(self.method, &line);
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(method: ConsoleMethod, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => console::error_1(&line),
        ConsoleMethod::Warn => console::warn_1(&line),
        ConsoleMethod::Info => console::info_1(&line),
        ConsoleMethod::Log => console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidLevel(_))));
    }

    #[test]
    fn test_level_routing() {
        assert_eq!(ConsoleMethod::from(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::from(Level::DEBUG), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::from(Level::TRACE), ConsoleMethod::Log);
    }

    #[test]
    fn test_writer_buffers_one_line() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Info);
        write!(writer, " INFO console: ").unwrap();
        writeln!(writer, "loaded 3 customers").unwrap();

        assert_eq!(
            writer.take_line().as_deref(),
            Some(" INFO console: loaded 3 customers")
        );
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_second_init_is_an_error() {
        // The first call may lose to another test's subscriber; either way
        // the second one must fail cleanly.
        let _ = init_logger(LevelFilter::INFO);
        assert!(matches!(
            init_logger(LevelFilter::INFO),
            Err(LoggerError::AlreadyInitialized(_))
        ));
    }
}
