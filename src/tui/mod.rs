//! Console host for the widget.
//!
//! The terminal plays the part of the host page: stdin lines are submitted
//! through the widget, transcript entries are printed as they are appended,
//! and the terminal height stands in for the container height.

mod host;
pub mod renderer;
pub mod settings;

pub use host::{run_console, TerminalSurface};
pub use renderer::ConsoleRenderer;
