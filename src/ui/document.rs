//! Markup projection of the whole widget.
//!
//! Layout: container > scroll region > (output span, inline form > (prompt
//! span, text input)). Theme declarations are inlined when enabled.

use crate::config::EffectiveConfig;
use crate::transcript::{escape_markup, InputLine, Transcript};

use super::theme::{inline_style, Declaration, StyleTarget, UNIX_THEME};

const SCROLL_REGION_STYLE: &[Declaration] = &[
    ("display", "block"),
    ("overflow-x", "hidden"),
    ("overflow-y", "auto"),
    ("padding", "0"),
];

/// Render the widget's current state as a markup fragment.
pub fn render_document(
    url: &str,
    config: &EffectiveConfig,
    transcript: &Transcript,
    input: &InputLine,
) -> String {
    let themed = |target: StyleTarget| -> Vec<Declaration> {
        if config.theme_enabled {
            UNIX_THEME.declarations(target).to_vec()
        } else {
            Vec::new()
        }
    };
    let text_style = themed(StyleTarget::Text);

    let container_style = inline_style(&themed(StyleTarget::Container));
    let scroll_style = format!(
        "{} max-height: {}px;",
        inline_style(SCROLL_REGION_STYLE),
        config.max_height
    );

    let mut form_decls: Vec<Declaration> = vec![(
        "display",
        if input.is_visible() { "inline" } else { "none" },
    )];
    form_decls.extend(themed(StyleTarget::Form));

    let mut input_decls: Vec<Declaration> = vec![("width", "80%")];
    input_decls.extend(themed(StyleTarget::Input));
    input_decls.extend(text_style.iter().copied());

    let prompt = config
        .prompt_text
        .as_deref()
        .map(|prompt| {
            format!(
                "<span{}>{}</span>",
                style_attr(&text_style),
                escape_markup(prompt)
            )
        })
        .unwrap_or_default();

    let mut input_attrs = format!(
        "type=\"text\" name=\"{}\" autocomplete=\"off\" value=\"{}\"",
        escape_markup(&config.input_field_name),
        escape_markup(input.value())
    );
    if input.is_disabled() {
        input_attrs.push_str(" disabled=\"disabled\"");
    }
    if input.is_focused() {
        input_attrs.push_str(" autofocus=\"autofocus\"");
    }

    format!(
        "<div{container}><div{scroll}><span{text}>{output}</span>\
         <form method=\"{method}\" action=\"{action}\"{form}>{prompt}\
         <input {input_attrs}{input_style} /></form></div></div>",
        container = style_attr_raw(&container_style),
        scroll = style_attr_raw(&scroll_style),
        text = style_attr(&text_style),
        output = transcript.to_markup(),
        method = escape_markup(&config.form_method),
        action = escape_markup(url),
        form = style_attr(&form_decls),
        input_style = style_attr(&input_decls),
    )
}

fn style_attr(declarations: &[Declaration]) -> String {
    style_attr_raw(&inline_style(declarations))
}

fn style_attr_raw(style: &str) -> String {
    if style.is_empty() {
        String::new()
    } else {
        format!(" style=\"{style}\"")
    }
}
