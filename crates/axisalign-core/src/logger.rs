//! Stderr logger for the planning tools.
//!
//! Lines look like `[  0.012s  INFO plan] message`, where the last field is
//! the module that emitted the record. Records from outside the `axisalign`
//! crates are shown only at `warn` and above, so `--log-level debug` stays
//! focused on the planner. With the `tracing` feature, [`init_tracing`]
//! installs a `tracing-subscriber` instead.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

const PLANNER_TARGET_PREFIX: &str = "axisalign";

struct PlanLogger {
    level: LevelFilter,
    started: Instant,
}

impl PlanLogger {
    fn accepts(&self, level: Level, target: &str) -> bool {
        level <= self.level && (level <= Level::Warn || target.starts_with(PLANNER_TARGET_PREFIX))
    }
}

impl Log for PlanLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.accepts(metadata.level(), metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            self.started.elapsed(),
            record.level(),
            record.target(),
            record.args(),
        );
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {}
}

/// Last `::` segment of a log target: `axisalign::plan` becomes `plan`.
fn stage_name(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

fn format_line(elapsed: Duration, level: Level, target: &str, args: &fmt::Arguments) -> String {
    format!(
        "[{:7.3}s {:>5} {}] {}",
        elapsed.as_secs_f64(),
        level,
        stage_name(target),
        args
    )
}

static LOGGER: OnceLock<PlanLogger> = OnceLock::new();

/// Install the stderr logger with the given level filter.
///
/// Only the first call installs the logger; later calls are no-ops.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| PlanLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default
/// `axisalign=info`), writing to stderr so reports on stdout stay clean.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,axisalign=info"));
    let builder = tracing_fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    if json {
        let _ = builder.json().flatten_event(true).finish().try_init();
    } else {
        let _ = builder
            .with_timer(tracing_fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}
