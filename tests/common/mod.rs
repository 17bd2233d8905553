//! Common test utilities and logging infrastructure
//!
//! Library diagnostics go through the `log` facade; `tracing-subscriber`
//! bridges them, so `RUST_LOG=advisory_table=trace` shows width decisions
//! next to the test's own events.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=advisory_table::renderables::widths=trace` - Width allocation detail
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

use std::sync::Once;

use advisory_table::Table;
use advisory_table::ansi::visible_length;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Idempotent; output is captured by the test harness unless `--nocapture`.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("advisory_table=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A table with a fixed console width and styling off, so output does not
/// depend on the terminal running the tests.
pub fn plain_table(headers: &[&str]) -> Table {
    let mut table = Table::new(headers.iter().copied());
    table.set_console_width(80).set_supports_styling(false);
    table
}

/// Visible width of every rendered line.
pub fn line_widths(output: &str) -> Vec<usize> {
    output.lines().map(visible_length).collect()
}

/// Assert every line of `output` has the same visible width.
#[track_caller]
pub fn assert_rectangular(output: &str) {
    let widths = line_widths(output);
    tracing::debug!(?widths, "checking line widths");
    assert!(
        widths.windows(2).all(|w| w[0] == w[1]),
        "ragged output {widths:?}:\n{output}"
    );
}
