//! The transcript renderer: owns the output region and the input line.

use crate::config::EffectiveConfig;
use crate::ui::render::RenderSink;

use super::markup::output_rows;
use super::{EntryKind, InputLine, Transcript, TranscriptEntry, TranscriptRow};

/// Appends entries to the transcript and manages the input line around them.
///
/// An optional [`RenderSink`] receives every change so a live surface can
/// project it; without one the renderer is a pure model.
#[derive(Default)]
pub struct TranscriptRenderer {
    transcript: Transcript,
    input: InputLine,
    sink: Option<Box<dyn RenderSink>>,
}

impl TranscriptRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: Box<dyn RenderSink>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::default()
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    /// Render response or injected text and re-arm the input line.
    pub fn append(&mut self, config: &EffectiveConfig, text: &str) {
        let rows = output_rows(text, config.tab_width, config.prompt_text.is_some());
        self.push_entry(EntryKind::Output, rows);

        self.input.show();
        self.input.clear();
        self.input.focus();
        // A disabled control never scrolls into view on its own.
        if config.input_disabled {
            self.input.pulse_focus();
        }
        self.notify_input();
    }

    /// Record the issued command, prompt first, ahead of its response.
    pub fn echo_command(&mut self, config: &EffectiveConfig, raw_input: &str) {
        let prompt = config.prompt_text.as_deref().unwrap_or("");
        let line = format!("{prompt}{}", raw_input.trim());
        self.push_entry(EntryKind::Echo, vec![TranscriptRow::literal(line)]);
    }

    /// Render the hello message as authored.
    pub fn greet(&mut self, message: &str) {
        self.push_entry(
            EntryKind::Greeting,
            vec![TranscriptRow::literal(message.to_string())],
        );
    }

    pub(crate) fn set_input_value(&mut self, value: &str) -> bool {
        self.input.set_value(value)
    }

    /// Hide the input line and clear the accepted value.
    pub(crate) fn hide_input(&mut self) {
        self.input.hide();
        self.input.clear();
        self.notify_input();
    }

    pub(crate) fn focus_input(&mut self) {
        self.input.focus();
        self.notify_input();
    }

    pub(crate) fn disable_input(&mut self) {
        self.input.disable();
        self.notify_input();
    }

    pub(crate) fn apply_theme(&mut self, theme: &crate::ui::theme::Theme) {
        if let Some(sink) = &self.sink {
            sink.theme_applied(theme);
        }
    }

    fn push_entry(&mut self, kind: EntryKind, rows: Vec<TranscriptRow>) {
        let entry = self.transcript.push(TranscriptEntry { kind, rows });
        if let Some(sink) = &self.sink {
            sink.entry_appended(entry);
        }
    }

    fn notify_input(&self) {
        if let Some(sink) = &self.sink {
            sink.input_changed(&self.input);
        }
    }
}
