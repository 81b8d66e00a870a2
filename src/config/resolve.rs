//! Option resolution: overlay user options onto defaults and normalize.

use super::defaults::{
    DEFAULT_FORM_METHOD, DEFAULT_INPUT_FIELD_NAME, DEFAULT_TAB_WIDTH, MAX_TAB_WIDTH,
};
use super::{EffectiveConfig, MaxHeight, TerminalOptions};

/// Resolve user options into the effective configuration for one instance.
///
/// `container_height` is only consulted when `max_height` asks to fill the
/// container, and only once.
pub fn resolve_effective_config<F>(options: &TerminalOptions, container_height: F) -> EffectiveConfig
where
    F: FnOnce() -> u32,
{
    let max_height = match options.max_height.unwrap_or_default() {
        MaxHeight::Pixels(px) => px,
        MaxHeight::FillAvailable => container_height(),
    };

    EffectiveConfig {
        max_height,
        form_method: non_blank(&options.form_method)
            .map(|method| method.to_ascii_uppercase())
            .unwrap_or_else(|| DEFAULT_FORM_METHOD.to_string()),
        input_field_name: non_blank(&options.input_field_name)
            .unwrap_or_else(|| DEFAULT_INPUT_FIELD_NAME.to_string()),
        extra_post_fields: options.extra_post_fields.clone().unwrap_or_default(),
        prompt_text: options.prompt_text.as_deref().and_then(normalize_prompt),
        focus_on_load: options.focus_on_load.unwrap_or(true),
        submit_on_load: options.submit_on_load.unwrap_or(false),
        grab_focus_on_click: options.grab_focus_on_click.unwrap_or(true),
        hello_message: options
            .hello_message
            .clone()
            .filter(|message| !message.is_empty()),
        theme_enabled: options.theme_enabled.unwrap_or(true),
        allow_empty_input: options.allow_empty_input.unwrap_or(false),
        tab_width: options
            .tab_width
            .unwrap_or(DEFAULT_TAB_WIDTH)
            .min(MAX_TAB_WIDTH),
        input_disabled: options.input_disabled.unwrap_or(false),
        on_load: options.on_load.clone(),
    }
}

/// Trim a custom prompt and append exactly one trailing space.
///
/// Only an empty string counts as no prompt; a whitespace-only prompt
/// becomes a single space.
pub fn normalize_prompt(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(format!("{} ", raw.trim()))
    }
}

/// A supplied value, as given, unless it is blank.
fn non_blank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}
