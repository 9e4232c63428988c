//! Configuration loading and management

use crate::core::validation::ValidationOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration for the dashboard server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Connection string for the PostgreSQL backend; absent means the
    /// in-memory stores are used
    #[serde(default)]
    pub database_url: Option<String>,

    /// Validation toggles
    #[serde(default)]
    pub validation: ValidationOptions,

    /// Credential pair for the static development identity provider
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Credential pair accepted by the static development provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: "user@acme.dev".to_string(),
            password: "123456".to_string(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: None,
            validation: ValidationOptions::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
