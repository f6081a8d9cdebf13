use crate::error::{CliError, Result as CliErrorResult};

use std::fmt::{Arguments, Display};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, debug};

/// Install the global logger.
///
/// Diagnostics go to `log_file` when one is configured, otherwise to stderr.
/// stdout is never used: it carries the generated title. `colored` only
/// applies to stderr.
#[track_caller]
pub fn initialize(
    log_level: titler_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let level_filter = *log_level;

    let sink = match log_file.as_deref() {
        Some(path) => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(open_log_file(path)?),
        None if colored => {
            let colors = level_colors();
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stderr())
        }
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(sink)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => debug!("Logging at {level_filter} to {}", path.display()),
        None => debug!("Logging at {level_filter} to stderr"),
    }

    Ok(())
}

/// `<rfc3339> <LEVEL> [<target>] <message>`
fn write_line(
    out: FormatCallback<'_>,
    message: &Arguments<'_>,
    record: &Record<'_>,
    level: impl Display,
) {
    out.finish(format_args!(
        "{} {:<5} [{}] {}",
        humantime::format_rfc3339_seconds(SystemTime::now()),
        level,
        record.target(),
        message,
    ))
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

#[track_caller]
fn open_log_file(path: &Path) -> CliErrorResult<std::fs::File> {
    fern::log_file(path).map_err(|e| {
        CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
    })
}
