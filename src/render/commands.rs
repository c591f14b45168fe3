//! Commands the core issues to the host view

use crate::document::CurrentPageChanged;

/// A single instruction for the host view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Jump the scroll position
    ScrollTo { x: i32, y: i32 },
    /// Start an animated scroll by a pixel delta
    StartPageScroll { dx: i32, dy: i32 },
    /// Redraw the view around the given current page
    Redraw { current: usize },
    /// The current page changed
    CurrentPageChanged(CurrentPageChanged),
}

/// Ordered command queue drained by the host
#[derive(Debug, Clone, Default)]
pub struct ViewCommands {
    commands: Vec<ViewCommand>,
}

impl ViewCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command
    pub fn push(&mut self, command: ViewCommand) {
        self.commands.push(command);
    }

    /// Take all pending commands in issue order
    pub fn drain(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Pending commands without draining
    pub fn pending(&self) -> &[ViewCommand] {
        &self.commands
    }
}
