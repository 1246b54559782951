//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::distance::DistanceConfig;

/// Dataset used when `STATIONS_PATH` is not set.
pub const DEFAULT_STATIONS_PATH: &str = "data/stations_and_lines.json";

/// Address used when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a socket address, got {value:?}")]
    InvalidAddress { var: &'static str, value: String },

    #[error("{var} must be a non-negative number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Path to the stations and lines JSON dataset
    pub stations_path: PathBuf,

    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Thresholds for distance queries
    pub distance: DistanceConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to their defaults; set but malformed ones
    /// are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stations_path = match lookup("STATIONS_PATH") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: "STATIONS_PATH",
                });
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_STATIONS_PATH),
        };

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                var: "BIND_ADDR",
                value: raw_addr.clone(),
            })?;

        let defaults = DistanceConfig::default();
        let proximity_threshold_km = number(
            &lookup,
            "PROXIMITY_THRESHOLD_KM",
            defaults.proximity_threshold_km,
        )?;
        let at_station_radius_m =
            number(&lookup, "AT_STATION_RADIUS_M", defaults.at_station_radius_m)?;

        Ok(Self {
            stations_path,
            bind_addr,
            distance: DistanceConfig::new(at_station_radius_m, proximity_threshold_km),
        })
    }
}

fn number<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}
