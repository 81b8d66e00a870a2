//! Centralized, hardcoded settings for the console host.

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
/// Prefix that marks a classified request failure in the transcript.
pub const TRANSCRIPT_ERROR_PREFIX: &str = "ERROR: ";

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Pixel height reported per terminal row when the widget asks for the
/// container height.
pub const ROW_HEIGHT_PX: u32 = 16;
/// Rows assumed when the terminal size is unavailable.
pub const FALLBACK_ROWS: u16 = 24;
