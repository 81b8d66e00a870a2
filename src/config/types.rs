//! Configuration data model.
//!
//! `TerminalOptions` is the user-facing partial option set (every field
//! optional); `EffectiveConfig` is the fully resolved, per-instance record the
//! session controller owns. Resolution lives in `config::resolve`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::defaults::{DEFAULT_TIMEOUT_SECS, FILL_AVAILABLE_KEYWORDS};

/// Requested height cap for the scrollable output region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "MaxHeightRepr")]
pub enum MaxHeight {
    /// Resolve to the host container's inner height at initialization.
    #[default]
    FillAvailable,
    /// Fixed pixel cap.
    Pixels(u32),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaxHeightRepr {
    Pixels(u32),
    Keyword(String),
}

impl From<MaxHeightRepr> for MaxHeight {
    fn from(repr: MaxHeightRepr) -> Self {
        match repr {
            MaxHeightRepr::Pixels(px) => Self::Pixels(px),
            MaxHeightRepr::Keyword(raw) => Self::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unrecognized max_height; filling container");
                Self::FillAvailable
            }),
        }
    }
}

impl MaxHeight {
    /// Parse `fill`/`100%` keywords or a pixel count with optional `px` suffix.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if FILL_AVAILABLE_KEYWORDS
            .iter()
            .any(|kw| trimmed.eq_ignore_ascii_case(kw))
        {
            return Some(Self::FillAvailable);
        }
        let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        digits.parse::<u32>().ok().map(Self::Pixels)
    }
}

/// Zero-argument callback invoked once initialization completes.
#[derive(Clone)]
pub struct LoadHook(Arc<dyn Fn() + Send + Sync>);

impl LoadHook {
    pub fn new(hook: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for LoadHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoadHook(..)")
    }
}

/// User-supplied widget options.
///
/// Accepts snake_case keys, the camelCase spelling of an options object, and
/// a few legacy names. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TerminalOptions {
    #[serde(alias = "maxHeight")]
    pub max_height: Option<MaxHeight>,
    #[serde(alias = "formMethod")]
    pub form_method: Option<String>,
    #[serde(alias = "inputFieldName", alias = "input_name")]
    pub input_field_name: Option<String>,
    #[serde(alias = "extraPostFields", alias = "post_vars")]
    pub extra_post_fields: Option<BTreeMap<String, String>>,
    #[serde(alias = "promptText", alias = "custom_prompt")]
    pub prompt_text: Option<String>,
    #[serde(alias = "focusOnLoad")]
    pub focus_on_load: Option<bool>,
    #[serde(alias = "submitOnLoad")]
    pub submit_on_load: Option<bool>,
    #[serde(alias = "grabFocusOnClick")]
    pub grab_focus_on_click: Option<bool>,
    #[serde(alias = "helloMessage")]
    pub hello_message: Option<String>,
    #[serde(alias = "themeEnabled", alias = "unix_theme")]
    pub theme_enabled: Option<bool>,
    #[serde(alias = "allowEmptyInput")]
    pub allow_empty_input: Option<bool>,
    #[serde(alias = "tabWidth")]
    pub tab_width: Option<usize>,
    #[serde(alias = "inputDisabled", alias = "disable_input")]
    pub input_disabled: Option<bool>,
    #[serde(skip)]
    pub on_load: Option<LoadHook>,
}

impl TerminalOptions {
    /// Parse options from a JSON object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Attach the `on_load` callback.
    pub fn with_on_load(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_load = Some(LoadHook::new(hook));
        self
    }

    /// Overlay `top` onto `self`: every field `top` sets wins.
    pub fn overlay(self, top: TerminalOptions) -> TerminalOptions {
        TerminalOptions {
            max_height: top.max_height.or(self.max_height),
            form_method: top.form_method.or(self.form_method),
            input_field_name: top.input_field_name.or(self.input_field_name),
            extra_post_fields: top.extra_post_fields.or(self.extra_post_fields),
            prompt_text: top.prompt_text.or(self.prompt_text),
            focus_on_load: top.focus_on_load.or(self.focus_on_load),
            submit_on_load: top.submit_on_load.or(self.submit_on_load),
            grab_focus_on_click: top.grab_focus_on_click.or(self.grab_focus_on_click),
            hello_message: top.hello_message.or(self.hello_message),
            theme_enabled: top.theme_enabled.or(self.theme_enabled),
            allow_empty_input: top.allow_empty_input.or(self.allow_empty_input),
            tab_width: top.tab_width.or(self.tab_width),
            input_disabled: top.input_disabled.or(self.input_disabled),
            on_load: top.on_load.or(self.on_load),
        }
    }
}

/// Fully resolved per-instance configuration.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    /// Output region cap in pixels.
    pub max_height: u32,
    pub form_method: String,
    pub input_field_name: String,
    pub extra_post_fields: BTreeMap<String, String>,
    /// Trimmed prompt with exactly one trailing space.
    pub prompt_text: Option<String>,
    pub focus_on_load: bool,
    pub submit_on_load: bool,
    pub grab_focus_on_click: bool,
    pub hello_message: Option<String>,
    pub theme_enabled: bool,
    pub allow_empty_input: bool,
    pub tab_width: usize,
    pub input_disabled: bool,
    pub on_load: Option<LoadHook>,
}

/// Remote endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Console host display settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Top-level configuration as loaded from file and environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub terminal: TerminalOptions,
    pub display: DisplayConfig,
}

/// Configuration payload plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: super::ConfigSource,
}

/// Result of `webterm --init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created { path: std::path::PathBuf },
    AlreadyInitialized { path: std::path::PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_height_parses_keywords_and_pixels() {
        assert_eq!(MaxHeight::parse("fill"), Some(MaxHeight::FillAvailable));
        assert_eq!(MaxHeight::parse("100%"), Some(MaxHeight::FillAvailable));
        assert_eq!(MaxHeight::parse("240px"), Some(MaxHeight::Pixels(240)));
        assert_eq!(MaxHeight::parse(" 120 "), Some(MaxHeight::Pixels(120)));
        assert_eq!(MaxHeight::parse("tall"), None);
    }

    #[test]
    fn camel_case_options_object_is_accepted() {
        let opts = TerminalOptions::from_json(
            r#"{"promptText":"$","allowEmptyInput":true,"maxHeight":300,"tabWidth":2}"#,
        )
        .unwrap();
        assert_eq!(opts.prompt_text.as_deref(), Some("$"));
        assert_eq!(opts.allow_empty_input, Some(true));
        assert_eq!(opts.max_height, Some(MaxHeight::Pixels(300)));
        assert_eq!(opts.tab_width, Some(2));
    }

    #[test]
    fn unknown_options_are_ignored() {
        let opts = TerminalOptions::from_json(r#"{"blink":true,"formMethod":"GET"}"#).unwrap();
        assert_eq!(opts.form_method.as_deref(), Some("GET"));
    }

    #[test]
    fn unrecognized_max_height_keyword_falls_back_to_fill() {
        let opts = TerminalOptions::from_json(r#"{"maxHeight":"tall"}"#).unwrap();
        assert_eq!(opts.max_height, Some(MaxHeight::FillAvailable));
    }

    #[test]
    fn overlay_prefers_top_fields() {
        let base = TerminalOptions {
            prompt_text: Some(">".into()),
            tab_width: Some(8),
            ..TerminalOptions::default()
        };
        let top = TerminalOptions {
            tab_width: Some(2),
            ..TerminalOptions::default()
        };
        let merged = base.overlay(top);
        assert_eq!(merged.prompt_text.as_deref(), Some(">"));
        assert_eq!(merged.tab_width, Some(2));
    }

    #[test]
    fn load_hook_debug_is_opaque() {
        let opts = TerminalOptions::default().with_on_load(|| {});
        assert!(format!("{opts:?}").contains("LoadHook(..)"));
    }
}
