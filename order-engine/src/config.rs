//! Engine configuration
//!
//! All fields can be overridden through environment variables:
//!
//! | Environment variable | Default | Meaning |
//! |----------------------|-------------|---------------------------------|
//! | ENVIRONMENT | development | Runtime environment |
//! | LOG_LEVEL | info | Default tracing filter |
//! | LOG_DIR | (unset) | Directory for rotated file logs |

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Default tracing filter (overridden by RUST_LOG when set)
    pub log_level: String,
    /// Optional directory for daily-rotated file logs
    pub log_dir: Option<String>,
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
