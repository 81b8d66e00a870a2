//! Rendering contract between the transcript renderer and a live surface.
//!
//! `RenderSink` is what the session loop talks to. The console host in
//! `crate::tui` is the default implementation; tests substitute a recorder.

use crate::transcript::{InputLine, TranscriptEntry};
use crate::ui::theme::Theme;

/// Injectable surface notified of every transcript and input-line change.
pub trait RenderSink: Send {
    /// A new entry was appended to the transcript.
    fn entry_appended(&self, entry: &TranscriptEntry);
    /// Visibility, focus, value or disabled state of the input line changed.
    fn input_changed(&self, input: &InputLine);
    /// The widget theme was applied during initialization.
    fn theme_applied(&self, _theme: &Theme) {}
}
