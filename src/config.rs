use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    /// The fixed price plan catalogue, loaded once at startup.
    pub plans: Vec<PlanConfig>,
    /// Smart meter id -> subscribed price plan id.
    pub accounts: HashMap<String, String>,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanConfig {
    pub name: String,
    pub supplier: String,
    pub unit_rate: Decimal,
}

/// Synthetic reading generation for meters listed in `accounts`, so the
/// service has data to compare against straight after startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub enabled: bool,
    pub days: i64,
    pub interval_minutes: i64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("PPC__").split("__"));
        Ok(figment.extract()?)
    }
}
