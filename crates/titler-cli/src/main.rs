//! titler - idea list title generator
//!
//! Prints a short title for a JSON list of ideas, picked as the most
//! representative sentence of their combined text.
//!
//! # Examples
//!
//! ```bash
//! titler '[{"title": "Buy milk", "description": "Need 2% milk from store"}]'
//! ```
//!
//! Any failure prints `My Ideas` and exits with status 1.

use std::process::ExitCode;

use log::warn;
use titler_core::FALLBACK_TITLE;

fn main() -> ExitCode {
    if let Err(e) = titler_cli::startup() {
        eprintln!("Error: {}", e);
        return fallback();
    }

    match titler_cli::run(std::env::args_os()) {
        Ok(title) => {
            println!("{}", title);
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!("Falling back to \"{}\": {}", FALLBACK_TITLE, e);
            fallback()
        }
    }
}

fn fallback() -> ExitCode {
    println!("{}", FALLBACK_TITLE);
    ExitCode::FAILURE
}
