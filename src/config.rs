use std::net::SocketAddr;

use anyhow::Context;
use ::config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub listen_addr: String,
    pub cors_origins: String,
}

impl Settings {
    /// Reads settings from the environment, after loading `.env` if present.
    pub fn load() -> anyhow::Result<Settings> {
        dotenv::dotenv().ok();
        Self::from_source(Environment::default())
    }

    fn from_source(env: Environment) -> anyhow::Result<Settings> {
        Config::builder()
            .set_default("db_path", "trivia.db")?
            .set_default("listen_addr", "0.0.0.0:8080")?
            .set_default("cors_origins", "*")?
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listen_addr
            .parse()
            .with_context(|| format!("LISTEN_ADDR {} is not a socket address", self.listen_addr))
    }

    /// `None` means any origin is allowed.
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_owned)
            .collect();
        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }
}
