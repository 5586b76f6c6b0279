use crate::error::{AppError, Result};

pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DASHBOARD_PORT: u16 = 8501;

/// Source table written by the ingestion job.
pub const DEFAULT_SENTIMENT_TABLE: &str = "raw_data.crypto_sentiment";

/// Nullable price column added by the one-shot schema migration.
pub const DEFAULT_PRICE_COLUMN: &str = "btc_price";

/// Row cap for the dashboard query.
pub const DEFAULT_FETCH_LIMIT: i64 = 100;

/// Characters of the latest headline shown in the metric preview.
pub const HEADLINE_PREVIEW_CHARS: usize = 120;

#[derive(Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    /// Schema-qualified table to read (SENTIMENT_TABLE)
    pub sentiment_table: String,
    /// Column holding the asset price (PRICE_COLUMN)
    pub price_column: String,
    /// Max rows per render cycle (FETCH_LIMIT)
    pub fetch_limit: i64,
    pub dashboard_port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::Config(format!("{key} must be set")))
        };

        let sentiment_table = lookup("SENTIMENT_TABLE")
            .unwrap_or_else(|| DEFAULT_SENTIMENT_TABLE.to_string());
        validate_identifier("SENTIMENT_TABLE", &sentiment_table)?;

        let price_column =
            lookup("PRICE_COLUMN").unwrap_or_else(|| DEFAULT_PRICE_COLUMN.to_string());
        validate_identifier("PRICE_COLUMN", &price_column)?;

        let fetch_limit = match lookup("FETCH_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    AppError::Config("FETCH_LIMIT must be a positive integer".to_string())
                })?,
            None => DEFAULT_FETCH_LIMIT,
        };

        Ok(Self {
            db_host: required("DB_HOST")?,
            db_port: parse_port(lookup("DB_PORT"), "DB_PORT", DEFAULT_DB_PORT)?,
            db_name: required("DB_NAME")?,
            db_user: required("DB_USER")?,
            db_password: required("DB_PASSWORD")?,
            sentiment_table,
            price_column,
            fetch_limit,
            dashboard_port: parse_port(
                lookup("DASHBOARD_PORT"),
                "DASHBOARD_PORT",
                DEFAULT_DASHBOARD_PORT,
            )?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_name", &self.db_name)
            .field("db_user", &self.db_user)
            .field("db_password", &"<redacted>")
            .field("sentiment_table", &self.sentiment_table)
            .field("price_column", &self.price_column)
            .field("fetch_limit", &self.fetch_limit)
            .field("dashboard_port", &self.dashboard_port)
            .field("log_level", &self.log_level)
            .finish()
    }
}

fn parse_port(raw: Option<String>, key: &str, default: u16) -> Result<u16> {
    match raw {
        Some(v) => v
            .trim()
            .parse::<u16>()
            .map_err(|_| AppError::Config(format!("{key} must be a valid port number"))),
        None => Ok(default),
    }
}

/// Table and column names are spliced into SQL, so only plain
/// (optionally schema-qualified) identifiers are accepted.
fn validate_identifier(key: &str, value: &str) -> Result<()> {
    let valid = !value.is_empty()
        && value.split('.').count() <= 2
        && value.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if valid {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "{key} must be a plain SQL identifier, got {value:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const CREDS: [(&str, &str); 4] = [
        ("DB_HOST", "db.internal"),
        ("DB_NAME", "postgres"),
        ("DB_USER", "reader"),
        ("DB_PASSWORD", "hunter2"),
    ];

    #[test]
    fn defaults_applied_when_only_credentials_set() {
        let cfg = Config::from_lookup(lookup_from(&CREDS)).unwrap();
        assert_eq!(cfg.db_host, "db.internal");
        assert_eq!(cfg.db_port, DEFAULT_DB_PORT);
        assert_eq!(cfg.sentiment_table, DEFAULT_SENTIMENT_TABLE);
        assert_eq!(cfg.price_column, DEFAULT_PRICE_COLUMN);
        assert_eq!(cfg.fetch_limit, DEFAULT_FETCH_LIMIT);
        assert_eq!(cfg.dashboard_port, DEFAULT_DASHBOARD_PORT);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn each_credential_is_required() {
        for missing in ["DB_HOST", "DB_NAME", "DB_USER", "DB_PASSWORD"] {
            let pairs: Vec<_> = CREDS.iter().copied().filter(|(k, _)| *k != missing).collect();
            let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(err.to_string().contains(missing), "{missing}: {err}");
        }
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let mut pairs = CREDS.to_vec();
        pairs.push(("DB_HOST", "  "));
        let pairs: Vec<_> = pairs.into_iter().skip(1).collect();
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn rejects_bad_limit_and_port() {
        let mut pairs = CREDS.to_vec();
        pairs.push(("FETCH_LIMIT", "0"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());

        let mut pairs = CREDS.to_vec();
        pairs.push(("DASHBOARD_PORT", "http"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn rejects_injected_table_name() {
        let mut pairs = CREDS.to_vec();
        pairs.push(("SENTIMENT_TABLE", "crypto_sentiment; DROP TABLE x"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());

        let mut pairs = CREDS.to_vec();
        pairs.push(("PRICE_COLUMN", "1price"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn debug_output_hides_password() {
        let cfg = Config::from_lookup(lookup_from(&CREDS)).unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));
    }
}
