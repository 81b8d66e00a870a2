//! Text-to-markup conversion for transcript output.
//!
//! Output text is escaped before tab expansion so the inserted `&nbsp;`
//! entities survive, and split on `\n` the same way a browser text node would
//! be split into display rows.

/// One display row of a transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRow {
    /// Plain-text projection with tabs expanded to spaces.
    pub text: String,
    /// Markup projection.
    pub markup: String,
    /// Whether a line break follows this row.
    pub line_break: bool,
}

impl TranscriptRow {
    /// A row whose text is trusted markup, always terminated by a break.
    pub(crate) fn literal(text: String) -> Self {
        Self {
            markup: text.clone(),
            text,
            line_break: true,
        }
    }
}

/// Escape text so it can be inserted as markup without being interpreted.
///
/// Non-breaking spaces come out as `&nbsp;` so they stay visible in the
/// markup source.
pub fn escape_markup(text: &str) -> String {
    let escaped = v_htmlescape::escape(text).to_string();
    if escaped.contains('\u{a0}') {
        escaped.replace('\u{a0}', "&nbsp;")
    } else {
        escaped
    }
}

/// Convert raw output text into display rows.
///
/// Every row is followed by a line break except a trailing empty row while a
/// prompt is configured, so output ending in `\n` does not leave a blank row
/// above the prompt.
pub fn output_rows(text: &str, tab_width: usize, prompt_active: bool) -> Vec<TranscriptRow> {
    let tabs = text
        .contains('\t')
        .then(|| (" ".repeat(tab_width), "&nbsp;".repeat(tab_width)));
    let escaped = escape_markup(text);

    let raw_rows: Vec<&str> = text.split('\n').collect();
    let markup_rows: Vec<&str> = escaped.split('\n').collect();
    let last = raw_rows.len().saturating_sub(1);

    raw_rows
        .iter()
        .zip(markup_rows.iter())
        .enumerate()
        .map(|(index, (raw, markup))| {
            let (text, markup) = match &tabs {
                Some((tab_text, tab_markup)) => {
                    (raw.replace('\t', tab_text), markup.replace('\t', tab_markup))
                }
                None => (raw.to_string(), markup.to_string()),
            };
            TranscriptRow {
                text,
                markup,
                line_break: !(index == last && raw.is_empty() && prompt_active),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(
            escape_markup("<b>fish & \"chips\"</b>"),
            "&lt;b&gt;fish &amp; &quot;chips&quot;&lt;&#x2f;b&gt;"
        );
    }

    #[test]
    fn non_breaking_space_becomes_entity() {
        assert_eq!(escape_markup("a\u{a0}<b"), "a&nbsp;&lt;b");
    }

    #[test]
    fn huge_tab_width_is_harmless_without_tabs() {
        let rows = output_rows("plain\ntext", usize::MAX, true);
        assert_eq!(rows[0].markup, "plain");
        assert_eq!(rows[1].text, "text");
    }

    #[test]
    fn tabs_expand_to_configured_width() {
        let rows = output_rows("a\tb", 4, false);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "a    b");
        assert_eq!(rows[0].markup, "a&nbsp;&nbsp;&nbsp;&nbsp;b");

        let rows = output_rows("\t", 0, false);
        assert_eq!(rows[0].text, "");
    }

    #[test]
    fn newlines_produce_rows_with_breaks() {
        let rows = output_rows("file1\nfile2", 4, true);
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["file1", "file2"]);
        assert!(rows.iter().all(|r| r.line_break));
    }

    #[test]
    fn trailing_empty_row_skips_break_only_with_prompt() {
        let with_prompt = output_rows("done\n", 4, true);
        assert_eq!(with_prompt.len(), 2);
        assert!(with_prompt[0].line_break);
        assert!(!with_prompt[1].line_break);

        let without_prompt = output_rows("done\n", 4, false);
        assert!(without_prompt[1].line_break);
    }

    #[test]
    fn empty_payload_with_prompt_is_a_single_unbroken_row() {
        let rows = output_rows("", 4, true);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "");
        assert!(!rows[0].line_break);
    }

    #[test]
    fn escaping_happens_before_tab_expansion() {
        let rows = output_rows("<\t&", 1, false);
        assert_eq!(rows[0].markup, "&lt;&nbsp;&amp;");
        assert_eq!(rows[0].text, "< &");
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn markup_never_contains_raw_angle_brackets(
                text in proptest::string::string_regex("[ -~\t\n]{0,64}").expect("regex"),
                tab_width in 0usize..8,
            ) {
                let rows = output_rows(&text, tab_width, true);
                prop_assert_eq!(rows.len(), text.split('\n').count());
                for row in &rows {
                    prop_assert!(!row.markup.contains('<'));
                    prop_assert!(!row.markup.contains('>'));
                    prop_assert!(!row.markup.contains('\t'));
                    prop_assert!(!row.text.contains('\t'));
                }
            }
        }
    }
}
