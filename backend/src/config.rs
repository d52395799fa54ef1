// src/config.rs

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use url::Url;

/// Percentage at or above which a quiz attempt counts as passed.
pub const PASSING_SCORE_PERCENTAGE: f64 = 70.0;

/// Topics scoring below this percentage receive a recommendation.
pub const DEFAULT_RECOMMENDATION_THRESHOLD: f64 = 70.0;

pub const QUIZ_TIME_LIMIT_MINUTES: u32 = 30;

/// Number of knowledge chunks the chatbot cites per answer.
pub const CHAT_TOP_K: usize = 3;

pub const DISCOVERY_MAX_RESULTS: usize = 3;

const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:8501,http://localhost:3000,http://127.0.0.1:8501,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub host: String,
    pub port: u16,
    /// Overrides the bundled catalog when set.
    pub catalog_path: Option<PathBuf>,
    pub cors_origins: Vec<String>,
    /// Relative artifact URLs are resolved against this base when set.
    pub asset_base_url: Option<Url>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://companion.db?mode=rwc".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        let catalog_path = env::var("CATALOG_PATH").ok().map(PathBuf::from);

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let asset_base_url = env::var("ASSET_BASE_URL").ok().and_then(|raw| {
            Url::parse(&raw)
                .map_err(|e| tracing::warn!("Ignoring invalid ASSET_BASE_URL {}: {}", raw, e))
                .ok()
        });

        Self {
            database_url,
            rust_log,
            host,
            port,
            catalog_path,
            cors_origins,
            asset_base_url,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_default_origins() {
        assert_eq!(parse_origins(DEFAULT_CORS_ORIGINS).len(), 4);
    }
}
