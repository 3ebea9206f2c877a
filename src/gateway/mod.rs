//! Thin blocking clients for the public APIs the app reads from.
//!
//! Every client takes its base URL at construction so it can be pointed at a
//! local mock server.

pub mod aladhan;
pub mod nominatim;
pub mod quran;

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::models::MalformedTime;

pub use aladhan::{AladhanClient, PRAYER_METHODS, method_name};
pub use nominatim::NominatimClient;
pub use quran::QuranClient;

const USER_AGENT: &str = concat!("nur/", env!("CARGO_PKG_VERSION"), " (terminal prayer companion)");
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{service} responded with status {status}")]
    Status { service: &'static str, status: u16 },
    #[error("unexpected {service} response: {detail}")]
    Payload { service: &'static str, detail: String },
    #[error(transparent)]
    MalformedTime(#[from] MalformedTime),
}

pub(crate) fn http_client() -> Result<Client, GatewayError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

pub(crate) fn get_json<T, Q>(
    client: &Client,
    service: &'static str,
    url: &str,
    query: &Q,
) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    debug!("GET {url}");
    let resp = client.get(url).query(query).send()?;
    let status = resp.status();
    if !status.is_success() {
        warn!("{service} returned {status} for {url}");
        return Err(GatewayError::Status {
            service,
            status: status.as_u16(),
        });
    }
    Ok(resp.json::<T>()?)
}

pub(crate) fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
