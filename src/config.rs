//! Runtime settings.
//!
//! Sources, later ones winning: built-in defaults, an optional `trivia.toml`
//! in the working directory, then `TRIVIA_*` environment variables
//! (`TRIVIA_DATABASE_URL`, `TRIVIA_HOST`, `TRIVIA_PORT`).

use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Deserialize)]
struct RawSettings {
    database_url: String,
    host: String,
    port: u16,
}

pub struct Settings {
    pub database_url: SecretString,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::build(Environment::with_prefix("TRIVIA"))
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        let raw: RawSettings = Config::builder()
            .set_default("database_url", "sqlite:trivia.db")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .add_source(File::with_name("trivia").required(false))
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(Settings {
            database_url: SecretString::from(raw.database_url),
            host: raw.host,
            port: raw.port,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn database_url(&self) -> &str {
        self.database_url.expose_secret()
    }
}
