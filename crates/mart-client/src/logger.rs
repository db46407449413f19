use crate::error::{CliError, Result as CliResult};

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, debug};
use mart_config::LogLevel;

/// Install the global logger.
///
/// Lines go to `log_file` when one is configured, otherwise to stderr so
/// stdout stays reserved for command output. `colored` only affects stderr.
/// Every line ends with the `[file:line]` that emitted it.
pub fn initialize(level: LogLevel, log_file: Option<&Path>, colored: bool) -> CliResult<()> {
    let dispatch = Dispatch::new().level(*level);

    let dispatch = match log_file {
        Some(path) => dispatch
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {message}{}",
                    timestamp(),
                    record.level(),
                    origin(record)
                ))
            })
            .chain(open_log_file(path)?),
        None if colored => {
            let colors = level_colors();
            dispatch
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {message}{}",
                        timestamp(),
                        colors.color(record.level()),
                        origin(record)
                    ))
                })
                .chain(std::io::stderr())
        }
        None => dispatch
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {message}{}",
                    timestamp(),
                    record.level(),
                    origin(record)
                ))
            })
            .chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => debug!("Logger initialized: level={level}, file={}", path.display()),
        None => debug!("Logger initialized: level={level}, stderr"),
    }

    Ok(())
}

fn open_log_file(path: &Path) -> CliResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::logger(format!("Failed to open log file {}: {e}", path.display())))
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn timestamp() -> humantime::Rfc3339Timestamp {
    humantime::format_rfc3339(SystemTime::now())
}

/// ` [src/storefront/storefront.rs:42]`, or nothing when the record has no source.
fn origin(record: &Record) -> String {
    match (record.file(), record.line()) {
        (Some(file), Some(line)) => format!(" [{file}:{line}]"),
        _ => String::new(),
    }
}
