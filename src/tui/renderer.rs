//! Console projection of the transcript.
//!
//! Rows go to stdout; prompts only appear on an interactive terminal. When
//! the echo of a typed command arrives, the line the user just typed is
//! replaced by it so the command is not shown twice.

use crate::transcript::{EntryKind, InputLine, TranscriptEntry, TranscriptRow};
use crate::tui::settings;
use crate::ui::render::RenderSink;
use crate::ui::theme::{Theme, ThemeToken};
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct ConsoleState {
    /// Theme applied by the widget, if any.
    theme: Option<Theme>,
    /// Whether the prompt is on screen awaiting input.
    prompt_shown: bool,
}

/// Terminal renderer for one widget.
#[derive(Debug)]
pub struct ConsoleRenderer {
    color: bool,
    interactive: bool,
    prompt: String,
    state: Mutex<ConsoleState>,
}

impl ConsoleRenderer {
    pub fn new(prompt: Option<&str>, color: bool, interactive: bool) -> Self {
        Self {
            color,
            interactive,
            prompt: prompt.unwrap_or_default().to_string(),
            state: Mutex::new(ConsoleState::default()),
        }
    }

    /// Print the prompt again on a fresh line, e.g. after blank input.
    pub fn reprompt(&self, input: &InputLine) {
        if let Ok(mut state) = self.state.lock() {
            state.prompt_shown = false;
            self.show_prompt(&mut state, input);
        }
    }

    /// Print a host-level warning (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_WARNING.with(crossterm::style::Color::Yellow).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print a host-level error (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_ERROR.with(crossterm::style::Color::Red).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_ERROR);
        }
    }

    fn show_prompt(&self, state: &mut ConsoleState, input: &InputLine) {
        if !self.interactive || state.prompt_shown || !input.is_ready() {
            return;
        }
        let mut out = io::stdout();
        let _ = self.queue_text(&mut out, state.theme, &self.prompt, ThemeToken::Echo);
        let _ = out.flush();
        state.prompt_shown = true;
    }

    fn write_entry<W: Write + QueueableCommand>(
        &self,
        out: &mut W,
        state: &ConsoleState,
        entry: &TranscriptEntry,
    ) -> io::Result<()> {
        if state.prompt_shown {
            if entry.kind == EntryKind::Echo {
                // The typed line already ended with a newline; step back onto it.
                out.queue(MoveUp(1))?;
            }
            out.queue(MoveToColumn(0))?;
            out.queue(Clear(ClearType::CurrentLine))?;
        }
        for row in &entry.rows {
            let token = row_token(entry.kind, row);
            self.queue_text(out, state.theme, &row.text, token)?;
            if row.line_break {
                out.queue(Print("\n"))?;
            }
        }
        out.flush()
    }

    fn queue_text<W: Write + QueueableCommand>(
        &self,
        out: &mut W,
        theme: Option<Theme>,
        text: &str,
        token: ThemeToken,
    ) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        match theme.filter(|_| self.color) {
            Some(theme) => {
                let styled = text
                    .with(theme.color(token))
                    .on(theme.color(ThemeToken::Background));
                out.queue(PrintStyledContent(styled))?;
            }
            None if self.color && token == ThemeToken::Error => {
                out.queue(PrintStyledContent(text.red()))?;
            }
            None => {
                out.queue(Print(text))?;
            }
        }
        Ok(())
    }
}

fn row_token(kind: EntryKind, row: &TranscriptRow) -> ThemeToken {
    match kind {
        EntryKind::Echo => ThemeToken::Echo,
        EntryKind::Output if row.text.starts_with(settings::TRANSCRIPT_ERROR_PREFIX) => {
            ThemeToken::Error
        }
        EntryKind::Greeting | EntryKind::Output => ThemeToken::Text,
    }
}

impl RenderSink for Arc<ConsoleRenderer> {
    fn entry_appended(&self, entry: &TranscriptEntry) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        let mut out = io::stdout();
        if let Err(err) = self.write_entry(&mut out, &state, entry) {
            tracing::warn!(error = %err, "failed to write transcript entry");
        }
        state.prompt_shown = false;
    }

    fn input_changed(&self, input: &InputLine) {
        if let Ok(mut state) = self.state.lock() {
            self.show_prompt(&mut state, input);
        }
    }

    fn theme_applied(&self, theme: &Theme) {
        if let Ok(mut state) = self.state.lock() {
            state.theme = Some(*theme);
        }
    }
}
