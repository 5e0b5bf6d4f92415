mod config;
mod shifts;

pub mod toml_input;

pub use config::*;
pub use shifts::*;
