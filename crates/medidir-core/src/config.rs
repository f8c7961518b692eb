use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric value cannot be parsed.
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
/// Returns `ConfigError` if a numeric value cannot be parsed.
fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can drive it
/// from a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let log_level = or_default("MEDIDIR_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("MEDIDIR_DATA_DIR", "./data"));
    let seed_path = PathBuf::from(or_default("MEDIDIR_SEED_PATH", "./config/doctors.yaml"));

    let profile_host = or_default("MEDIDIR_PROFILE_HOST", "linqmd.com");
    let proxy_endpoint = or_default("MEDIDIR_PROXY_ENDPOINT", "https://api.allorigins.win/raw");
    let scraper_user_agent = or_default(
        "MEDIDIR_SCRAPER_USER_AGENT",
        "medidir/0.1 (doctor-directory)",
    );
    let scraper_timeout_secs = parse_optional_u64("MEDIDIR_SCRAPER_TIMEOUT_SECS")?;
    let demo_latency_ms = parse_u64("MEDIDIR_DEMO_LATENCY_MS", "1500")?;
    let analysis_delay_ms = parse_u64("MEDIDIR_ANALYSIS_DELAY_MS", "1500")?;

    Ok(AppConfig {
        log_level,
        data_dir,
        seed_path,
        profile_host,
        proxy_endpoint,
        scraper_user_agent,
        scraper_timeout_secs,
        demo_latency_ms,
        analysis_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
