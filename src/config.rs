use actix_web::http::header::HeaderValue;
use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_PATH: &str = "db.json";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://127.0.0.1:5500";
pub const DEFAULT_BCRYPT_COST: u32 = 10;
/// Work factors the bcrypt crate accepts
pub const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;
/// `DB_PATH` value selecting the non-persistent in-memory store
pub const MEMORY_DB_PATH: &str = ":memory:";

/// Runtime settings, read from the environment (and `.env`) at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    pub allowed_origin: String,
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            db_path: DEFAULT_DB_PATH.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port, |_| true),
            db_path: lookup("DB_PATH").unwrap_or(defaults.db_path),
            allowed_origin: valid_origin(lookup("ALLOWED_ORIGIN"), defaults.allowed_origin),
            bcrypt_cost: parse_or(
                "BCRYPT_COST",
                lookup("BCRYPT_COST"),
                defaults.bcrypt_cost,
                |cost| BCRYPT_COST_RANGE.contains(cost),
            ),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(
    key: &str,
    raw: Option<String>,
    default: T,
    accept: impl Fn(&T) -> bool,
) -> T {
    let Some(value) = raw else {
        return default;
    };

    match value.trim().parse::<T>() {
        Ok(parsed) if accept(&parsed) => parsed,
        _ => {
            log::warn!("⚠️  Invalid {}={:?}, using {}", key, value, default);
            default
        }
    }
}

/// The origin is echoed verbatim in a header, so it must be a non-empty header value
fn valid_origin(raw: Option<String>, default: String) -> String {
    match raw {
        Some(origin) if !origin.trim().is_empty() && HeaderValue::from_str(&origin).is_ok() => origin,
        Some(origin) => {
            log::warn!("⚠️  Invalid ALLOWED_ORIGIN={:?}, using {}", origin, default);
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.port, 5000);
        assert_eq!(config.db_path, "db.json");
        assert_eq!(config.allowed_origin, "http://127.0.0.1:5500");
        assert_eq!(config.bcrypt_cost, 10);
    }

    #[test]
    fn overrides_and_bad_numbers() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "8080"),
            ("DB_PATH", "/var/lib/buddyup/db.json"),
            ("BCRYPT_COST", "twelve"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, "/var/lib/buddyup/db.json");
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
    }

    #[test]
    fn bcrypt_cost_outside_supported_range_falls_back() {
        for raw in ["3", "32", "0"] {
            let config = AppConfig::from_lookup(|key| (key == "BCRYPT_COST").then(|| raw.to_string()));
            assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST, "cost {}", raw);
        }

        let config = AppConfig::from_lookup(|key| (key == "BCRYPT_COST").then(|| "12".to_string()));
        assert_eq!(config.bcrypt_cost, 12);
    }

    #[test]
    fn unusable_origin_falls_back_to_default() {
        for raw in ["", "   ", "http://bad\norigin"] {
            let config =
                AppConfig::from_lookup(|key| (key == "ALLOWED_ORIGIN").then(|| raw.to_string()));
            assert_eq!(config.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
        }

        let config = AppConfig::from_lookup(|key| {
            (key == "ALLOWED_ORIGIN").then(|| "http://localhost:3000".to_string())
        });
        assert_eq!(config.allowed_origin, "http://localhost:3000");
    }
}
