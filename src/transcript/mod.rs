//! Append-only transcript model and the renderer that feeds it.
//!
//! The transcript is the source of truth for everything the widget has shown.
//! Markup and plain-text views are projections computed from the entries, so
//! the session loop can be tested without any rendering surface.

mod input;
mod markup;
mod renderer;

pub use input::InputLine;
pub use markup::{escape_markup, output_rows, TranscriptRow};
pub use renderer::TranscriptRenderer;

/// What produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The configured hello message.
    Greeting,
    /// A command echoed before its request is dispatched.
    Echo,
    /// Response text, error text, or externally appended output.
    Output,
}

/// One appended block of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub rows: Vec<TranscriptRow>,
}

impl TranscriptEntry {
    /// Markup projection of this entry.
    pub fn to_markup(&self) -> String {
        let rows: String = self.rows.iter().map(row_markup).collect();
        match self.kind {
            EntryKind::Output => format!("<span>{rows}</span>"),
            EntryKind::Greeting | EntryKind::Echo => rows,
        }
    }
}

fn row_markup(row: &TranscriptRow) -> String {
    if row.line_break {
        format!("<span>{}<br /></span>", row.markup)
    } else {
        format!("<span>{}</span>", row.markup)
    }
}

/// Append-only history of everything rendered into the output region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: TranscriptEntry) -> &TranscriptEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Markup of the whole output region.
    pub fn to_markup(&self) -> String {
        self.entries.iter().map(TranscriptEntry::to_markup).collect()
    }

    /// Visual lines as a reader would see them.
    ///
    /// Rows without a trailing break run into whatever follows; an unfinished
    /// empty row at the end is where the input line sits and is not a line.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut pending: Option<String> = None;
        for row in self.entries.iter().flat_map(|entry| entry.rows.iter()) {
            pending.get_or_insert_with(String::new).push_str(&row.text);
            if row.line_break {
                lines.extend(pending.take());
            }
        }
        if let Some(rest) = pending.filter(|rest| !rest.is_empty()) {
            lines.push(rest);
        }
        lines
    }
}
