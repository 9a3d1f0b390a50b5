//! Terminal menu driver for the backpack inventory.
//!
//! Everything here is IO glue: reading and validating user input, calling
//! into `mochila-inventory`, and rendering results. The session is generic
//! over `BufRead`/`Write` so it can be driven by scripted input in tests.

pub mod config;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod session;

pub use config::{Cli, OutputMode, SessionConfig};
pub use error::{CliError, CliResult};
pub use session::Session;
