//! Environment overrides for endpoint settings.
//!
//! `WEBTERM_*` variables take precedence over file values.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty_env(env_lookup, "WEBTERM_URL") {
        config.endpoint.url = Some(url);
    }
    if let Some(timeout) = non_empty_env(env_lookup, "WEBTERM_TIMEOUT_SECS") {
        // Clamp to at least 1 second so a zero never disables the timeout.
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid WEBTERM_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.endpoint.timeout_secs = parsed.max(1);
    }
    Ok(())
}

fn non_empty_env<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn url_and_timeout_override_file_values() {
        let mut config = Config::default();
        apply_runtime_env_overrides(
            &mut config,
            &env_from(&[
                ("WEBTERM_URL", " http://localhost:9000/cmd "),
                ("WEBTERM_TIMEOUT_SECS", "5"),
            ]),
        )
        .unwrap();
        assert_eq!(config.endpoint.url.as_deref(), Some("http://localhost:9000/cmd"));
        assert_eq!(config.endpoint.timeout_secs, 5);
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let mut config = Config::default();
        apply_runtime_env_overrides(&mut config, &env_from(&[("WEBTERM_TIMEOUT_SECS", "0")]))
            .unwrap();
        assert_eq!(config.endpoint.timeout_secs, 1);
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let mut config = Config::default();
        let err = apply_runtime_env_overrides(
            &mut config,
            &env_from(&[("WEBTERM_TIMEOUT_SECS", "soon")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("WEBTERM_TIMEOUT_SECS"), "got: {err}");
    }
}
