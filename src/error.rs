use thiserror::Error;

/// Errors raised while loading showfinder configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
