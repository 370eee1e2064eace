//! Command-line interface definitions.

mod args;
mod enums;

pub use args::{Args, Command, ConfigAction};
pub use enums::Effect;
