//! Rolling Logger
//!
//! A `log` backend for the browser. Every record is written to the console
//! (stderr off-wasm) and the most recent lines are kept in a bounded ring so
//! the app can show or dump them later.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{Local, NaiveTime};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Fixed-capacity line buffer; the oldest line is dropped when full
#[derive(Debug, Default)]
pub struct LineRing {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    ring: Mutex<LineRing>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            ring: Mutex::new(LineRing::new(capacity)),
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.ring.lock() {
            Ok(ring) => ring.lines(),
            Err(poisoned) => poisoned.into_inner().lines(),
        }
    }

    fn remember(&self, line: String) {
        match self.ring.lock() {
            Ok(mut ring) => ring.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            Local::now().time(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if any logger is already installed.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines kept by the global logger (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent_lines).unwrap_or_default()
}

pub fn format_line(time: NaiveTime, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", time.format("%H:%M:%S"), level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::log_1(&value),
        Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_drops_oldest() {
        let mut ring = LineRing::new(2);
        ring.push("a".into());
        ring.push("b".into());
        ring.push("c".into());
        assert_eq!(ring.lines(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut ring = LineRing::new(0);
        ring.push("a".into());
        assert!(ring.is_empty());
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut ring = LineRing::new(usize::MAX);
        ring.push("a".into());
        ring.push("b".into());
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn test_format_line() {
        let time = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
        let line = format_line(time, Level::Warn, "card_board_ui::form", "oversized file");
        assert_eq!(line, "09:05:03 WARN  [card_board_ui::form] oversized file");
    }

    #[test]
    fn test_global_logger_keeps_recent_lines() {
        assert!(recent_lines().is_empty());
        init(LevelFilter::Info, 2).unwrap();
        log::info!(target: "test", "one");
        log::info!(target: "test", "two");
        log::info!(target: "test", "three");

        let lines = recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[test] two"));
        assert!(lines[1].ends_with("[test] three"));
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = RollingLogger::new(LevelFilter::Info, 8);
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("test")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("test")
                .args(format_args!("shown"))
                .build(),
        );

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[test] shown"));
    }
}
