use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

const DEFAULT_PORT: u16 = 3000;

/// Runtime settings. `DATABASE_URL` is required; the listen address
/// defaults to loopback so a bare `cargo run` works against `.env`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    /// Read settings from the environment. Unlike a silent fallback, a
    /// malformed `APP_HOST` or `APP_PORT` is an error naming the value.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let host = match env::var("APP_HOST") {
            Ok(raw) => raw
                .parse::<IpAddr>()
                .with_context(|| format!("APP_HOST is not an IP address: {raw}"))?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match env::var("APP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("APP_PORT is not a port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
