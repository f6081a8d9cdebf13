//! titler library
//!
//! Argument handling, logging setup and the fallback policy of the `titler`
//! binary, exported for tests.

pub mod app;
pub(crate) mod cli;
pub mod error;
pub mod logger;


pub use app::{run, startup};
pub use error::{CliError, Result as CliResult};
