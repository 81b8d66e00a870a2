//! Config-file discovery.
//!
//! An explicit `--config` path replaces the search entirely. Otherwise the
//! first readable file among `./webterm.toml` and the per-user file wins, and
//! an empty document (all defaults) is used when neither exists.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const CONFIG_DIR_NAME: &str = "webterm";
const CONFIG_FILE_NAME: &str = "webterm.toml";

/// Where the active configuration was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The `--config` path.
    Explicit(PathBuf),
    /// `./webterm.toml`.
    Local,
    /// The per-user file under the config root.
    Global(PathBuf),
    /// No file found.
    BuiltInDefaults,
}

impl ConfigSource {
    /// File backing this source.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Global(path) => Some(path),
            Self::Local => Some(Path::new(CONFIG_FILE_NAME)),
            Self::BuiltInDefaults => None,
        }
    }
}

/// `<root>/webterm/webterm.toml`.
pub(super) fn global_config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

fn search_order(config_root: Option<PathBuf>) -> Vec<ConfigSource> {
    let mut order = vec![ConfigSource::Local];
    order.extend(config_root.map(|root| ConfigSource::Global(global_config_file(&root))));
    order
}

/// Read the text of the highest-precedence config file.
pub(super) fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(raw) = path_override {
        let path = PathBuf::from(raw);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    for source in search_order(config_root()) {
        let Some(path) = source.path() else {
            continue;
        };
        match read_file(path) {
            Ok(text) => return Ok((text, source)),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable config file");
            }
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}
