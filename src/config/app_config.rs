use core::fmt;
use std::env;

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("{}", e)));

#[derive(Serialize, Deserialize, Debug)]
pub enum Runtime {
    Dev,
    Prod,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Runtime::Dev => write!(f, "development"),
            Runtime::Prod => write!(f, "production"),
        }
    }
}

impl From<String> for Runtime {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DEVELOPMENT" => Runtime::Dev,
            "PRODUCTION" => Runtime::Prod,
            _ => Runtime::Prod,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub game: GameConfig,
}

fn default_question_seconds() -> u8 {
    10
}

fn default_option_pool() -> usize {
    4
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    // joined with relative endpoint paths, so it must end with a slash
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_question_seconds")]
    pub question_seconds: u8,
    #[serde(default = "default_option_pool")]
    pub option_pool: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            question_seconds: default_question_seconds(),
            option_pool: default_option_pool(),
        }
    }
}

impl AppConfig {
    fn load() -> Result<Self, ConfigError> {
        let runtime: Runtime = env::var("ENVIRONMENT")
            .map(Runtime::from)
            .unwrap_or(Runtime::Dev);

        let config: AppConfig = Config::builder()
            .add_source(File::with_name(&format!("src/config/{}.toml", runtime)))
            .add_source(Environment::with_prefix("TRIVIA").separator("__"))
            .build()?
            .try_deserialize()?;

        debug!(
            "Loaded config: {}",
            serde_json::to_string_pretty(&config).unwrap()
        );

        Ok(config)
    }
}
