use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtConfigError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error(transparent)]
    Jwt(#[from] JwtConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

/// Dashboard account created on startup when both values are present.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub redis_url: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub argon2: Option<Argon2Settings>,
    pub admin_seed: Option<AdminSeed>,
    pub site_title: String,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Reads the process environment. Call after the `.env` files are loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let or_default = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        let jwt = JwtConfig::new(
            required("JWT_SECRET")?,
            or_default("JWT_ISSUER", "portfolio-cms"),
            parse_value("JWT_ACCESS_EXPIRY", &or_default("JWT_ACCESS_EXPIRY", "1800"))?,
            parse_value("JWT_REFRESH_EXPIRY", &or_default("JWT_REFRESH_EXPIRY", "604800"))?,
        )?;

        let argon2 = match (
            get("ARGON2_MEMORY_KIB"),
            get("ARGON2_ITERATIONS"),
            get("ARGON2_PARALLELISM"),
        ) {
            (None, None, None) => None,
            (memory, iterations, parallelism) => Some(Argon2Settings {
                memory_kib: parse_value("ARGON2_MEMORY_KIB", &memory.unwrap_or_else(|| "4096".into()))?,
                iterations: parse_value("ARGON2_ITERATIONS", &iterations.unwrap_or_else(|| "3".into()))?,
                parallelism: parse_value(
                    "ARGON2_PARALLELISM",
                    &parallelism.unwrap_or_else(|| "1".into()),
                )?,
            }),
        };

        let admin_seed = match (get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                email,
                password,
                display_name: get("ADMIN_NAME"),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            host: or_default("HOST", "127.0.0.1"),
            port: parse_value("PORT", &or_default("PORT", "8080"))?,
            jwt,
            argon2,
            admin_seed,
            site_title: or_default("SITE_TITLE", "Portfolio"),
            run_migrations: parse_flag("RUN_MIGRATIONS", &or_default("RUN_MIGRATIONS", "true"))?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const BASE: &[(&str, &str)] = &[
        ("DATABASE_URL", "postgres://localhost/portfolio"),
        ("REDIS_URL", "redis://localhost:6379"),
        ("JWT_SECRET", "0123456789abcdef0123456789abcdef"),
    ];

    #[test]
    fn defaults_fill_optional_values() {
        let config = AppConfig::from_lookup(env(BASE)).unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.jwt.access_token_expiry, 1800);
        assert_eq!(config.jwt.refresh_token_expiry, 604_800);
        assert_eq!(config.site_title, "Portfolio");
        assert!(config.run_migrations);
        assert!(config.argon2.is_none());
        assert!(config.admin_seed.is_none());
    }

    #[test]
    fn missing_database_url_is_reported() {
        let result = AppConfig::from_lookup(env(&BASE[1..]));
        assert!(matches!(result, Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn weak_jwt_secret_is_rejected() {
        let mut pairs = BASE.to_vec();
        pairs[2] = ("JWT_SECRET", "short");

        let result = AppConfig::from_lookup(env(&pairs));

        assert!(matches!(
            result,
            Err(ConfigError::Jwt(JwtConfigError::SecretTooShort))
        ));
    }

    #[test]
    fn admin_seed_needs_email_and_password() {
        let mut pairs = BASE.to_vec();
        pairs.push(("ADMIN_EMAIL", "owner@example.com"));
        assert!(AppConfig::from_lookup(env(&pairs)).unwrap().admin_seed.is_none());

        pairs.push(("ADMIN_PASSWORD", "long-enough"));
        let seed = AppConfig::from_lookup(env(&pairs)).unwrap().admin_seed.unwrap();
        assert_eq!(seed.email, "owner@example.com");
        assert_eq!(seed.display_name, None);
    }

    #[test]
    fn partial_argon2_settings_use_defaults() {
        let mut pairs = BASE.to_vec();
        pairs.push(("ARGON2_MEMORY_KIB", "19456"));

        let argon2 = AppConfig::from_lookup(env(&pairs)).unwrap().argon2.unwrap();

        assert_eq!(
            argon2,
            Argon2Settings {
                memory_kib: 19456,
                iterations: 3,
                parallelism: 1
            }
        );
    }

    #[test]
    fn bad_port_and_flag_are_invalid() {
        let mut pairs = BASE.to_vec();
        pairs.push(("PORT", "eighty"));
        assert!(matches!(
            AppConfig::from_lookup(env(&pairs)),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));

        let mut pairs = BASE.to_vec();
        pairs.push(("RUN_MIGRATIONS", "maybe"));
        assert!(matches!(
            AppConfig::from_lookup(env(&pairs)),
            Err(ConfigError::Invalid { name: "RUN_MIGRATIONS", .. })
        ));
    }
}
