use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

pub const LL_BASE: &str = "https://www.learnedleague.com";
pub const DEFAULT_LOGIN_URL: &str = "https://www.learnedleague.com/ucp.php?mode=login";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Logged-in connection to the league site. The cookie jar picked up at
/// login is the entire auth state; every later fetch reuses it.
pub struct Session {
    client: Client,
}

impl Session {
    /// POST the login form and keep whatever session cookies come back.
    ///
    /// Only transport and HTTP-level failures are detectable here: the site
    /// answers a wrong password with a plain 200 login page, so bad
    /// credentials surface later as score pages with nothing on them.
    pub fn login(login_url: &str, username: &str, password: &str) -> Result<Session> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")?;
        let form = [
            ("login", "Login"),
            ("username", username),
            ("password", password),
        ];
        debug!(login_url, username, "logging in");
        client
            .post(login_url)
            .header(USER_AGENT, "Mozilla/5.0")
            .form(&form)
            .send()
            .context("login request failed")?
            .error_for_status()
            .context("login request rejected")?;
        Ok(Session { client })
    }

    /// GET a page with the session cookies and hand back the body text.
    pub fn get(&self, url: &str) -> Result<String> {
        debug!(url, "fetching");
        self.client
            .get(url)
            .header(USER_AGENT, "Mozilla/5.0")
            .send()
            .with_context(|| format!("request failed: {url}"))?
            .error_for_status()
            .with_context(|| format!("request rejected: {url}"))?
            .text()
            .context("failed reading body")
    }
}
