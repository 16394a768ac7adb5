use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Missing required variables abort startup — a half-configured service
/// must not come up and fail on first use instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// API key for the email+password identity provider.
    pub auth_api_key: String,
    /// Base URL of the identity provider. Overridable for tests.
    pub auth_base_url: String,
    pub gemini_api_key: String,
    /// Email allowed to view the admin analytics dashboard.
    pub admin_email: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            auth_api_key: require_env("AUTH_API_KEY")?,
            auth_base_url: std::env::var("AUTH_BASE_URL")
                .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com".to_string()),
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
