use anyhow::{Context as _, Result};
use reqwest::blocking::Client;
use reqwest::header::COOKIE;

use crate::context::{Context, TOKEN_VAR};

/// GET a page from the puzzle site, authenticated with the session cookie.
pub fn get(ctx: &Context, url: &str) -> Result<String> {
    let token = ctx
        .token
        .as_deref()
        .with_context(|| format!("no session token; pass --token or set {TOKEN_VAR}"))?;
    log::debug!("GET {url}");
    let body = Client::new()
        .get(url)
        .header(COOKIE, format!("session={token}"))
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url}"))?
        .text()
        .with_context(|| format!("reading body of {url}"))?;
    Ok(body)
}
