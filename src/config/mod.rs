//! Configuration loading and option resolution.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`WEBTERM_URL`, `WEBTERM_TIMEOUT_SECS`).
//! 2. TOML file specified via --config CLI flag
//! 3. ./webterm.toml in the current directory
//! 4. $XDG_CONFIG_HOME/webterm/webterm.toml (or ~/.config/webterm/webterm.toml)
//! 5. Built-in defaults
//!
//! Widget options from the file are later overlaid by `--options` JSON and
//! explicit CLI flags, then resolved per instance by [`resolve_effective_config`].

mod defaults;
mod env;
mod init;
mod loader;
mod resolve;
mod sources;
mod types;

pub use init::{config_root_dir, default_global_config_path, initialize_default_global_config};
pub use loader::{load_config, load_config_with_source};
pub use resolve::{normalize_prompt, resolve_effective_config};
pub use sources::ConfigSource;
pub use types::{
    Config, DisplayConfig, EffectiveConfig, EndpointConfig, GlobalConfigInitResult, LoadHook,
    LoadedConfig, MaxHeight, TerminalOptions,
};
