use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_ENDPOINT: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceConfig {
    pub endpoint: SocketAddr,
    /// In-memory persistence is used when unset.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub seed_data: bool,
}

impl ServiceConfig {
    /// Reads `.env` and the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let endpoint = endpoint
            .parse::<SocketAddr>()
            .with_context(|| format!("ENDPOINT '{endpoint}' is not a socket address"))?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS '{value}' is not a number"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let seed_data = match lookup("SEED_DATA") {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("SEED_DATA '{value}' is not a boolean"))?,
            None => true,
        };

        Ok(Self {
            endpoint,
            database_url,
            max_connections,
            seed_data,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow::anyhow!("expected true or false")),
    }
}
