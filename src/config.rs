use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_server_port() -> u16 {
    8080
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    /// Destination for form notifications. Unset or empty is a valid
    /// configuration: the service starts but dispatching is disabled.
    #[serde(default)]
    pub webhook_url: Option<String>,

    #[serde(default)]
    pub webhook_username: Option<String>,

    #[serde(default)]
    pub webhook_avatar_url: Option<String>,

    /// Optional plain-text prefix for every message, e.g. a role mention.
    #[serde(default)]
    pub webhook_mention: Option<String>,

    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid environmental variable"))?;
        Ok(config)
    }
}
