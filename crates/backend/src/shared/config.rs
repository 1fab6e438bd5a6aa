use serde::Deserialize;
use std::path::{Path, PathBuf};

/// In-memory SQLite marker for `[database] path`
pub const IN_MEMORY_DB: &str = ":memory:";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// OpenAI-compatible endpoint for keyword suggestions; heuristic only when absent
    #[serde(default)]
    pub llm: Option<LlmConfig>,
    #[serde(default)]
    pub registration: RegistrationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    /// Insert the demo data set when the consultant table is empty
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Custom base URL for OpenAI-compatible APIs
    #[serde(default)]
    pub api_endpoint: Option<String>,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistrationConfig {
    /// Demo mode: every verification code equals this value
    #[serde(default)]
    pub fixed_code: Option<String>,
    #[serde(default = "default_code_ttl")]
    pub code_ttl_minutes: i64,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            fixed_code: None,
            code_ttl_minutes: default_code_ttl(),
        }
    }
}

fn default_code_ttl() -> i64 {
    15
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "db/agence.db"
seed_demo_data = true

[registration]
fixed_code = "123456"
code_ttl_minutes = 15
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolve the database file path; None for an in-memory database.
/// Relative paths are resolved against the executable directory.
pub fn get_database_path(config: &Config) -> Option<PathBuf> {
    let db_path_str = config.database.path.trim();
    if db_path_str == IN_MEMORY_DB {
        return None;
    }
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Some(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(db_path));
        }
    }

    Some(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "db/agence.db");
        assert_eq!(config.server.port, 3000);
        assert!(config.database.seed_demo_data);
        assert!(config.llm.is_none());
        assert_eq!(config.registration.fixed_code.as_deref(), Some("123456"));
    }

    #[test]
    fn test_optional_sections_fall_back_to_defaults() {
        let config = parse_config(
            r#"
            [database]
            path = ":memory:"

            [llm]
            api_key = "sk-test"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.registration.code_ttl_minutes, 15);
        assert!(config.registration.fixed_code.is_none());
        let llm = config.llm.as_ref().unwrap();
        assert_eq!(llm.model, "gpt-4o-mini");
        assert!(llm.api_endpoint.is_none());
        assert!(get_database_path(&config).is_none());
    }
}
