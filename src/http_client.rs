use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

// The summarizer can take a while in thorough mode, hence the generous timeout.
const REQUEST_TIMEOUT_SECS: u64 = 60;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Shared blocking client for the record store and the summarizer.
pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}
