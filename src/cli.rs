//! CLI argument parsing via clap.

use clap::Parser;

/// A line-oriented terminal that submits each command to a remote endpoint
/// and prints the plain-text response.
#[derive(Debug, Parser)]
#[command(name = "webterm", version)]
pub struct Args {
    /// Command endpoint URL (overrides config and WEBTERM_URL).
    pub url: Option<String>,

    /// Path to config file (default: ./webterm.toml or ~/.config/webterm/webterm.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Widget options as a JSON object, e.g. '{"promptText":"$"}'.
    #[arg(long = "options", value_name = "JSON")]
    pub options: Option<String>,

    /// Prompt echoed before each command.
    #[arg(short = 'p', long = "prompt")]
    pub prompt: Option<String>,

    /// HTTP method used for submissions.
    #[arg(short = 'X', long = "method")]
    pub method: Option<String>,

    /// Form field carrying the command text.
    #[arg(long = "field")]
    pub field: Option<String>,

    /// Extra form field sent with every submission (repeatable).
    #[arg(long = "post", value_name = "NAME=VALUE", value_parser = parse_post_field)]
    pub post: Vec<(String, String)>,

    /// Message printed once before the first command.
    #[arg(long = "hello")]
    pub hello: Option<String>,

    /// Fire one submission with empty input at startup.
    #[arg(long = "submit-on-load")]
    pub submit_on_load: bool,

    /// Send blank lines to the endpoint instead of ignoring them.
    #[arg(long = "allow-empty")]
    pub allow_empty: bool,

    /// Spaces substituted per tab character.
    #[arg(long = "tab-width")]
    pub tab_width: Option<usize>,

    /// Render output only; typed lines are ignored.
    #[arg(long = "disable-input")]
    pub disable_input: bool,

    /// Request timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable the dark monospace theme.
    #[arg(long = "no-theme")]
    pub no_theme: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Write the widget markup to PATH on exit.
    #[arg(long = "dump-html", value_name = "PATH")]
    pub dump_html: Option<String>,

    /// Write the default config to ~/.config/webterm/webterm.toml and exit.
    #[arg(long = "init")]
    pub init: bool,
}

fn parse_post_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}
