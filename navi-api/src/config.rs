use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub catalog: CatalogConfig,
    pub cors: Option<CorsConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Location of the questionnaire catalog used by the seeding endpoints
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    /// `"*"` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                path: get_default_db_path(),
            },
            catalog: CatalogConfig {
                path: PathBuf::from("json/questions.json"),
            },
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
        }
    }
}

impl ApiConfig {
    /// Loads the configuration file and applies `NAVI_` environment overrides
    /// (`NAVI_SERVER__PORT=9000`).
    ///
    /// Without an explicit path the file lives in the user config directory
    /// and is created with defaults on first run.
    pub fn load(explicit_path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = get_config_path();
                write_default_config(&path)?;
                path
            }
        };

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .add_source(Environment::with_prefix("NAVI").separator("__"))
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;
        config.database.path = expand_tilde(&config.database.path);
        config.catalog.path = expand_tilde(&config.catalog.path);

        Ok((config, config_path))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn write_default_config(config_path: &Path) -> Result<(), ConfigError> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    let default_config = format!(
        r#"
[server]
host = "127.0.0.1"
port = 8080

[database]
path = "{}"

[catalog]
path = "json/questions.json"

[cors]
allowed_origins = ["http://localhost:3000"]
"#,
        get_default_db_path().display()
    );

    std::fs::write(config_path, default_config)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))
}

fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("navi/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

fn get_default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("navi/navi.db")
    } else {
        PathBuf::from("navi.db")
    }
}
