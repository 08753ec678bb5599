use anyhow::Context;
use std::env;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@medicare.com";

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sender: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub static_dir: String,
    pub admin_email: String,
    /// `None` when no SMTP credentials are configured.
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `lookup`. Unset and blank variables are treated alike.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_opt = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let var_or = |key: &str, default: &str| var_opt(key).unwrap_or_else(|| default.to_string());

        let port = var_or("MAIL_PORT", "587")
            .parse::<u16>()
            .context("MAIL_PORT must be a port number")?;

        let smtp = match (var_opt("MAIL_USERNAME"), var_opt("MAIL_PASSWORD")) {
            (Some(username), Some(password)) => Some(SmtpConfig {
                server: var_or("MAIL_SERVER", "smtp.gmail.com"),
                port,
                sender: var_or("MAIL_DEFAULT_SENDER", username.as_str()),
                username,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: var_or("DATABASE_URL", "medicare.db"),
            bind_address: var_or("BIND_ADDRESS", "127.0.0.1:8080"),
            static_dir: var_or("STATIC_DIR", "static"),
            admin_email: var_or("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            smtp,
        })
    }
}
