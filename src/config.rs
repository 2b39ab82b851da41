//! Server configuration from command-line flags and environment variables.

use crate::activity::domain::{CapacityPolicy, ParseCapacityPolicyError};
use camino::Utf8PathBuf;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// Mergington High School activities API.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "mergington")]
#[command(about = "Mergington High School extracurricular activities API")]
#[command(version)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "MERGINGTON_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "MERGINGTON_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory served under /static
    #[arg(long, env = "MERGINGTON_STATIC_DIR", default_value = "static")]
    pub static_dir: Utf8PathBuf,

    /// JSON catalog replacing the built-in activities
    #[arg(long, env = "MERGINGTON_CATALOG")]
    pub catalog: Option<Utf8PathBuf>,

    /// Whether full activities reject signups (enforce|ignore)
    #[arg(
        long,
        env = "MERGINGTON_CAPACITY_POLICY",
        default_value = "enforce",
        value_parser = parse_capacity_policy
    )]
    pub capacity_policy: CapacityPolicy,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "MERGINGTON_LOG", default_value = "info")]
    pub log_filter: String,
}

/// Errors returned while interpreting configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The host is not an IP address.
    #[error("invalid listen host '{0}', expected an IP address")]
    InvalidHost(String),
}

impl ServerConfig {
    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_capacity_policy(value: &str) -> Result<CapacityPolicy, ParseCapacityPolicyError> {
    CapacityPolicy::try_from(value)
}
