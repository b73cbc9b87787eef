use std::env;

use anyhow::{Context, Result};

use crate::session::DEFAULT_LOGIN_URL;

/// Run settings, read once from the process environment (the binary layers
/// `.env.local` / `.env` on top via dotenvy before this runs).
#[derive(Debug, Clone)]
pub struct Settings {
    pub username: String,
    pub password: String,
    pub login_url: String,
    pub verbose: bool,
    pub people: Vec<String>,
    pub season: Option<u32>,
    pub division: Option<String>,
}

impl Settings {
    /// Credentials are the only hard requirement; everything else has a
    /// default. Missing credentials abort before any network traffic.
    pub fn from_env() -> Result<Settings> {
        let username = env::var("LL_USERNAME").context("LL_USERNAME is not set")?;
        let password = env::var("LL_PASSWORD").context("LL_PASSWORD is not set")?;
        let login_url = env::var("LL_LOGIN_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string());
        let people = env::var("LL_PEOPLE")
            .map(|raw| split_people(&raw))
            .unwrap_or_default();
        let season = env::var("LL_SEASON").ok().and_then(|v| v.parse().ok());
        let division = env::var("LL_DIVISION")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Ok(Settings {
            username,
            password,
            login_url,
            verbose: env_bool("LL_VERBOSE", false),
            people,
            season,
            division,
        })
    }
}

fn split_people(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

// "false"-looking strings are off, anything else set is on. Notably
// LL_VERBOSE=False stays off; bare non-empty truthiness would read it as on.
fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .map(|v| {
            let t = v.trim().to_ascii_lowercase();
            !(t.is_empty() || t == "0" || t == "false" || t == "off" || t == "no")
        })
        .unwrap_or(default)
}
