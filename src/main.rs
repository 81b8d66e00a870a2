//! CLI entry point for webterm.

mod cli;

use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use webterm::config::{
    initialize_default_global_config, load_config_with_source, GlobalConfigInitResult,
    TerminalOptions,
};
use webterm::error::{ConfigError, HostError};
use webterm::session::TerminalWidget;
use webterm::transport::HttpTransport;
use webterm::tui::{run_console, ConsoleRenderer, TerminalSurface};
use webterm::ui::render_document;

const LOG_ENV: &str = "WEBTERM_LOG";

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_logging();

    let color = !args.no_color;
    if let Err(e) = run(args).await {
        ConsoleRenderer::new(None, color, false).error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(args: cli::Args) -> Result<(), HostError> {
    if args.init {
        match initialize_default_global_config()? {
            GlobalConfigInitResult::Created { path } => {
                println!("wrote default config to {}", path.display());
            }
            GlobalConfigInitResult::AlreadyInitialized { path } => {
                println!("config already exists at {}", path.display());
            }
        }
        return Ok(());
    }

    let loaded = load_config_with_source(args.config.as_deref())?;
    tracing::debug!(source = ?loaded.source, "loaded config");
    let mut config = loaded.config;

    let url = args
        .url
        .clone()
        .or_else(|| config.endpoint.url.take())
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            ConfigError::Invalid(
                "no endpoint url; pass one as an argument, set WEBTERM_URL, or add [endpoint] url"
                    .to_string(),
            )
        })?;
    let timeout_secs = args.timeout.unwrap_or(config.endpoint.timeout_secs).max(1);
    let color = config.display.color && !args.no_color;

    let mut options = config.terminal;
    if let Some(json) = &args.options {
        options = options.overlay(TerminalOptions::from_json(json).map_err(ConfigError::from)?);
    }
    options = options.overlay(options_from_flags(&args));

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    let prompt = options
        .prompt_text
        .as_deref()
        .and_then(webterm::config::normalize_prompt);
    let renderer = Arc::new(ConsoleRenderer::new(prompt.as_deref(), color, interactive));
    let transport = HttpTransport::new(Duration::from_secs(timeout_secs));

    let mut widget = TerminalWidget::init(
        url,
        &options,
        &TerminalSurface,
        Arc::new(transport),
        Some(Box::new(Arc::clone(&renderer))),
    );
    run_console(&mut widget, &renderer).await?;

    if let Some(path) = &args.dump_html {
        let html = render_document(
            widget.url(),
            widget.config(),
            widget.transcript(),
            widget.input(),
        );
        std::fs::write(path, html)?;
        tracing::info!(path = %path, "wrote widget markup");
    }
    Ok(())
}

/// Options set explicitly on the command line; unset flags leave the lower
/// layers alone.
fn options_from_flags(args: &cli::Args) -> TerminalOptions {
    let extra_post_fields = if args.post.is_empty() {
        None
    } else {
        Some(args.post.iter().cloned().collect())
    };
    TerminalOptions {
        form_method: args.method.clone(),
        input_field_name: args.field.clone(),
        extra_post_fields,
        prompt_text: args.prompt.clone(),
        submit_on_load: args.submit_on_load.then_some(true),
        hello_message: args.hello.clone(),
        theme_enabled: args.no_theme.then_some(false),
        allow_empty_input: args.allow_empty.then_some(true),
        tab_width: args.tab_width,
        input_disabled: args.disable_input.then_some(true),
        ..TerminalOptions::default()
    }
}
