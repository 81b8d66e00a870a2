//! `webterm --init`: place the default config where the loader will find it.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::error::ConfigError;

use super::defaults::DEFAULT_WEBTERM_CONFIG_TEMPLATE;
use super::sources::global_config_file;
use super::GlobalConfigInitResult;

/// Per-user config file path, if a config root can be determined.
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|root| global_config_file(&root))
}

/// Write the default template to the per-user path unless a file exists.
pub fn initialize_default_global_config() -> Result<GlobalConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid("no config directory available for webterm.toml".to_string())
    })?;
    write_template(path)
}

pub(super) fn write_template(path: PathBuf) -> Result<GlobalConfigInitResult, ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let opened = OpenOptions::new().write(true).create_new(true).open(&path);
    let mut file = match opened {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::info!(path = %path.display(), "config already present; left untouched");
            return Ok(GlobalConfigInitResult::AlreadyInitialized { path });
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(DEFAULT_WEBTERM_CONFIG_TEMPLATE.as_bytes())?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(GlobalConfigInitResult::Created { path })
}

/// Base directory for per-user config: `$XDG_CONFIG_HOME` when it is an
/// absolute path, else the platform config dir.
pub fn config_root_dir() -> Option<PathBuf> {
    config_root_from(|name| std::env::var_os(name))
}

fn config_root_from<F>(env_lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    env_lookup("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
        .or_else(dirs::config_dir)
}
