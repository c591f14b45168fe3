//! Render output: draw list and view command protocol

mod commands;
mod display;

pub use commands::{ViewCommand, ViewCommands};
pub use display::{DrawList, DrawPage};
