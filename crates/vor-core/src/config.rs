use std::path::{Path, PathBuf};

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let optional_path = |var: &str| -> Option<PathBuf> {
        lookup(var)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    };

    let env = parse_environment(&or_default("VOR_ENV", "development"))?;

    let bind_addr = or_default("VOR_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("VOR_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("VOR_LOG_LEVEL", "info");
    let catalog_path = optional_path("VOR_CATALOG_PATH");
    let lexicon_path = optional_path("VOR_LEXICON_PATH");

    let search_default_limit = or_default("VOR_SEARCH_DEFAULT_LIMIT", "10")
        .parse::<usize>()
        .map_err(|e| invalid("VOR_SEARCH_DEFAULT_LIMIT", e.to_string()))?;

    let reddit_base_url = or_default("REDDIT_BASE_URL", "https://www.reddit.com");
    if !reddit_base_url.starts_with("http://") && !reddit_base_url.starts_with("https://") {
        return Err(invalid(
            "REDDIT_BASE_URL",
            format!("'{reddit_base_url}' is not an http(s) URL"),
        ));
    }

    let reddit_user_agent = or_default("REDDIT_USER_AGENT", "VoicesOfReddit/1.0");
    let reddit_request_timeout_secs = or_default("REDDIT_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("REDDIT_REQUEST_TIMEOUT_SECS", e.to_string()))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        lexicon_path,
        search_default_limit,
        reddit_base_url,
        reddit_user_agent,
        reddit_request_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VOR_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Read a YAML file into any deserializable type.
///
/// # Errors
///
/// Returns [`ConfigError::FileIo`] if the file cannot be read and
/// [`ConfigError::YamlParse`] if it is not valid YAML for `T`.
pub fn read_yaml_file<T>(path: &Path) -> Result<T, ConfigError>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
