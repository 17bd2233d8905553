//! A small stderr logger for the `log` facade.
//!
//! The library itself only emits `log` records (width decisions, group syncs,
//! ignored descriptions). Binaries that want to see them without pulling in a
//! full logging stack can install a [`TableLogger`].

use std::io::{self, Write};
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::style::Style;
use crate::sync::lock_recover;
use crate::terminal;

const DEFAULT_TIME_FORMAT: &str = "[hour]:[minute]:[second]";

/// Logger that writes one line per record, optionally with a timestamp and
/// a colored level column.
///
/// # Thread Safety
///
/// All internal state sits behind mutexes with poison recovery, so records
/// from several threads interleave by line and never tear.
pub struct TableLogger {
    level: LevelFilter,
    show_time: bool,
    omit_repeated_times: bool,
    show_level: bool,
    show_target: bool,
    styled: bool,
    time_format: OwnedFormatItem,
    last_time: Mutex<Option<String>>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for TableLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl TableLogger {
    /// Create a logger writing to stderr at `Info` level.
    ///
    /// Level names are colored when stderr supports styling.
    #[must_use]
    pub fn new() -> Self {
        let time_format = time::format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
            .unwrap_or_else(|_| OwnedFormatItem::StringLiteral(String::new().into_boxed_str()));
        Self {
            level: LevelFilter::Info,
            show_time: true,
            omit_repeated_times: true,
            show_level: true,
            show_target: false,
            styled: terminal::supports_styling(),
            time_format,
            last_time: Mutex::new(None),
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Blank out a timestamp identical to the previous one.
    #[must_use]
    pub fn omit_repeated_times(mut self, omit: bool) -> Self {
        self.omit_repeated_times = omit;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Append the record's target (usually its module path).
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Force level coloring on or off.
    #[must_use]
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Override the time format (`time` crate format description).
    ///
    /// An invalid description keeps the current format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        match time::format_description::parse_owned::<2>(format) {
            Ok(parsed) => self.time_format = parsed,
            Err(err) => log::warn!("ignoring invalid time format {format:?}: {err}"),
        }
        self
    }

    /// Send output somewhere other than stderr.
    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Mutex::new(Box::new(writer));
        self
    }

    /// Install as the global logger.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn level_style(level: Level) -> Style {
        match level {
            Level::Trace => Style::new().dim(),
            Level::Debug => Style::new().dim().color(4),
            Level::Info => Style::new().color(2),
            Level::Warn => Style::new().color(3),
            Level::Error => Style::new().bold().color(1),
        }
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            let time_str = self.format_time();
            if self.omit_repeated_times {
                let mut last = lock_recover(&self.last_time);
                if last.as_ref() == Some(&time_str) {
                    line.push_str(&" ".repeat(time_str.len()));
                } else {
                    line.push_str(&time_str);
                    *last = Some(time_str);
                }
            } else {
                line.push_str(&time_str);
            }
            line.push(' ');
        }

        if self.show_level {
            let padded = format!("{:<5}", record.level());
            if self.styled {
                line.push_str(&Self::level_style(record.level()).render(&padded));
            } else {
                line.push_str(&padded);
            }
            line.push(' ');
        }

        line.push_str(&record.args().to_string());

        if self.show_target && !record.target().is_empty() {
            line.push_str(&format!(" ({})", record.target()));
        }
        line
    }
}

impl Log for TableLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let mut writer = lock_recover(&self.writer);
        // Nowhere to report a failed log write.
        let _ = writeln!(writer, "{line}");
    }

    fn flush(&self) {
        let _ = lock_recover(&self.writer).flush();
    }
}
