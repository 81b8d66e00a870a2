//! Default configuration constants.
//!
//! Keeping defaults in one module lets the resolver, loader and template
//! share the same literals.

/// Embedded default `webterm.toml` template written by `webterm --init`.
pub(super) const DEFAULT_WEBTERM_CONFIG_TEMPLATE: &str = include_str!("../templates/webterm.toml");
/// HTTP method used for command submission.
pub(super) const DEFAULT_FORM_METHOD: &str = "POST";
/// Form field carrying the command text.
pub(super) const DEFAULT_INPUT_FIELD_NAME: &str = "input";
/// Spaces substituted per tab character.
pub(super) const DEFAULT_TAB_WIDTH: usize = 4;
/// Upper bound on `tab_width`.
pub(super) const MAX_TAB_WIDTH: usize = 64;
/// Request timeout applied by the HTTP transport.
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Keywords accepted for `max_height` meaning "fill the container".
pub(super) const FILL_AVAILABLE_KEYWORDS: &[&str] = &["fill", "100%", "auto"];
