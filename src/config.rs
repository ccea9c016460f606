use std::env;
use std::str::FromStr;

use chrono_tz::Tz;
use services::TokenConfig;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub token: TokenConfig,
    pub time_zone: Tz,
    pub auto_migrate: bool,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));
        let or_default = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        Ok(Config {
            database_url: required("DATABASE_URL")?,
            host: or_default("HOST", "127.0.0.1"),
            port: parse("PORT", or_default("PORT", "8080"))?,
            token: TokenConfig {
                secret: required("TOKEN_SECRET")?,
                issuer: or_default("HOST_NAME", "localhost"),
                expiration_seconds: parse(
                    "TOKEN_EXPIRATION_SECONDS",
                    or_default("TOKEN_EXPIRATION_SECONDS", "86400"),
                )?,
            },
            time_zone: parse("TIME_ZONE", or_default("TIME_ZONE", "UTC"))?,
            auto_migrate: parse_flag("AUTO_MIGRATE", or_default("AUTO_MIGRATE", "false"))?,
            log_format: match or_default("LOG_FORMAT", "pretty").to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" | "" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "LOG_FORMAT",
                        value: or_default("LOG_FORMAT", ""),
                    })
                }
            },
        })
    }
}

fn parse<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value }),
    }
}
