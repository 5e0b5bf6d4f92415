//! The raw contents of the TOML files, before they are validated.

mod config_file;
mod shift_file;

pub use config_file::*;
pub use shift_file::*;
