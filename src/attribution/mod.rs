//! Attribution of on-call shifts to the categories they are billed as.

mod engine;
mod process;
mod shifts;

pub use engine::*;
pub use process::*;
pub use shifts::*;
