use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "sergioadmin";

fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^\S+$").unwrap();
    }
    USERNAME_RE.is_match(username)
}

/// Credentials of the account created on first boot.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.into(),
            password: DEFAULT_ADMIN_PASSWORD.into(),
        }
    }
}

impl AdminConfig {
    pub fn from_vars(username: Option<String>, password: Option<String>) -> anyhow::Result<Self> {
        let username = username.unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.into());
        if !is_valid_username(&username) {
            anyhow::bail!("ADMIN_USERNAME must be non-empty and contain no whitespace");
        }
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_ADMIN_PASSWORD.into(),
        };
        Ok(Self { username, password })
    }

    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_ADMIN_PASSWORD
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let database_url = std::env::var("DATABASE_URL")?;
        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let admin = AdminConfig::from_vars(
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        )?;
        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            admin,
        })
    }
}
