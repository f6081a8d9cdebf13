use crate::cli::Cli;
use crate::error::{CliError, Result as CliErrorResult};

use std::ffi::OsString;

use clap::Parser;
use log::debug;
use titler_config::Config;
use titler_core::{Idea, generate_title};

/// Load and validate configuration, then install the logger.
pub fn startup() -> CliErrorResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    crate::logger::initialize(
        config.logging.level,
        config.log_file_path(),
        config.logging.colored,
    )?;

    debug!("Starting titler v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    Ok(config)
}

/// Generate a title from the process arguments (program name first).
///
/// Exactly one argument is accepted: the JSON idea list.
pub fn run<I, T>(args: I) -> CliErrorResult<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        return Err(CliError::usage(format!(
            "expected exactly one argument, got {}",
            args.len().saturating_sub(1)
        )));
    }

    // A closure, not a path, so `from_clap` records this call site.
    #[allow(clippy::redundant_closure)]
    let cli = Cli::try_parse_from(args).map_err(|e| CliError::from_clap(e))?;

    let ideas = Idea::list_from_json(&cli.ideas)?;
    debug!("Parsed {} ideas", ideas.len());

    let title = generate_title(&ideas)?;
    debug!("Generated title: {}", title);

    Ok(title)
}
