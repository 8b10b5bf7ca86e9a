use crate::config::types::{
    AnalysisConfig, CacheConfig, Config, FetcherConfig, RenderConfig,
};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_cache_config(&config.cache)?;
    validate_analysis_config(&config.analysis)?;
    validate_render_config(&config.render)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.workers < 1 || config.workers > 100 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 100, got {}",
            config.workers
        )));
    }

    if config.max_redirects > 50 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= 50, got {}",
            config.max_redirects
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII
    if !config
        .user_agent
        .chars()
        .all(|c| c.is_ascii_graphic() || c == ' ')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent must be printable ASCII, got '{}'",
            config.user_agent
        )));
    }

    Ok(())
}

/// Validates cache configuration
fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.ttl_secs < 1 {
        return Err(ConfigError::Validation(
            "ttl-secs must be >= 1".to_string(),
        ));
    }

    if config.capacity < 1 {
        return Err(ConfigError::Validation(
            "capacity must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates analysis configuration
fn validate_analysis_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.top_words < 1 || config.top_words > 1000 {
        return Err(ConfigError::Validation(format!(
            "top-words must be between 1 and 1000, got {}",
            config.top_words
        )));
    }

    Ok(())
}

/// Validates render configuration
fn validate_render_config(config: &RenderConfig) -> Result<(), ConfigError> {
    for (name, value) in [("width", config.width), ("height", config.height)] {
        if !(100..=4000).contains(&value) {
            return Err(ConfigError::Validation(format!(
                "render {} must be between 100 and 4000, got {}",
                name, value
            )));
        }
    }

    Ok(())
}
