//! The fixed "unix" presentation: monospace, light text on black.
//!
//! The same theme feeds two projections: inline style declarations for the
//! widget markup and terminal colors for the console host.

use crossterm::style::Color;

/// Element of the widget a style rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    Container,
    Form,
    Input,
    /// Every text-bearing element: transcript spans, prompt and input.
    Text,
}

/// Semantic color token used by the console host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeToken {
    Text,
    Background,
    Echo,
    Error,
}

/// CSS-like property/value pair.
pub type Declaration = (&'static str, &'static str);

/// A presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    name: &'static str,
    container: &'static [Declaration],
    form: &'static [Declaration],
    input: &'static [Declaration],
    text: &'static [Declaration],
}

/// Dark background, light grey monospace text, no borders or padding.
pub const UNIX_THEME: Theme = Theme {
    name: "unix",
    container: &[("border", "none"), ("background-color", "black")],
    form: &[("padding", "0"), ("margin", "0")],
    input: &[
        ("border", "none"),
        ("background-color", "black"),
        ("padding", "0"),
        ("margin", "0"),
    ],
    text: &[
        ("color", "lightgrey"),
        ("font-family", "monospace"),
        ("font-size", "1em"),
        ("line-height", "1.3em"),
    ],
};

impl Theme {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declarations for one target.
    pub fn declarations(&self, target: StyleTarget) -> &'static [Declaration] {
        match target {
            StyleTarget::Container => self.container,
            StyleTarget::Form => self.form,
            StyleTarget::Input => self.input,
            StyleTarget::Text => self.text,
        }
    }

    /// Terminal color for a semantic token.
    pub fn color(&self, token: ThemeToken) -> Color {
        match token {
            ThemeToken::Text => Color::Grey,
            ThemeToken::Background => Color::Black,
            ThemeToken::Echo => Color::White,
            ThemeToken::Error => Color::Red,
        }
    }
}

/// Join declarations into an inline `style` attribute value.
pub fn inline_style(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_theme_is_dark_and_monospace() {
        let container = inline_style(UNIX_THEME.declarations(StyleTarget::Container));
        assert!(container.contains("background-color: black;"));
        let text = inline_style(UNIX_THEME.declarations(StyleTarget::Text));
        assert!(text.contains("font-family: monospace;"));
        assert!(text.contains("color: lightgrey;"));
    }

    #[test]
    fn inline_style_joins_pairs() {
        assert_eq!(
            inline_style(&[("padding", "0"), ("margin", "0")]),
            "padding: 0; margin: 0;"
        );
        assert_eq!(inline_style(&[]), "");
    }

    #[test]
    fn console_colors_match_presentation() {
        assert_eq!(UNIX_THEME.color(ThemeToken::Background), Color::Black);
        assert_eq!(UNIX_THEME.color(ThemeToken::Text), Color::Grey);
    }
}
