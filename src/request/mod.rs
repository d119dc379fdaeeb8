//! Remote JSON fetch primitive.
//!
//! A single GET per call, decoded as JSON. HTTP status failures, transport
//! failures and decode failures all surface as [`FetchError`] so callers can
//! turn them into a display message without matching on reqwest types.
//!
//! The primitive is abstracted behind [`JsonFetcher`] so the fetch hook can be
//! handed a scripted implementation in tests instead of a real client.

use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

/// Message used when an error carries no description of its own.
pub const FALLBACK_ERROR: &str = "An error occurred";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Decode(String),
    #[error("An error occurred")]
    Unknown,
}

impl FetchError {
    /// Human-readable description stored in fetch state.
    pub fn message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            text
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return FetchError::Http {
                status: status.as_u16(),
            };
        }
        if e.is_decode() {
            return FetchError::Decode(e.to_string());
        }
        if e.is_request() || e.is_body() {
            return FetchError::Network(e.to_string());
        }
        FetchError::Unknown
    }
}

/// Something that can GET a URL and hand back its JSON body.
pub trait JsonFetcher {
    fn get_json(&self, url: &str) -> LocalBoxFuture<'static, Result<serde_json::Value, FetchError>>;
}

/// Fetch `url` through `fetcher` and decode the body as `T`.
///
/// The shape is trusted: any mismatch is reported as [`FetchError::Decode`].
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn JsonFetcher,
    url: &str,
) -> Result<T, FetchError> {
    let value = fetcher.get_json(url).await?;
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

/// [`JsonFetcher`] backed by reqwest (the browser `fetch` API on wasm).
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl JsonFetcher for HttpFetcher {
    fn get_json(&self, url: &str) -> LocalBoxFuture<'static, Result<serde_json::Value, FetchError>> {
        let client = self.client.clone();
        let url = url.to_string();
        Box::pin(async move {
            let resp = client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                debug!(url = %url, status = status.as_u16(), "request rejected");
                return Err(FetchError::Http {
                    status: status.as_u16(),
                });
            }

            let body = resp.json::<serde_json::Value>().await?;
            debug!(url = %url, "request complete");
            Ok(body)
        })
    }
}

/// Cloneable handle through which components reach the fetch primitive.
///
/// Provided once at the root of the component tree and read back with
/// `use_context`, so tests and alternative backends can swap it out.
#[derive(Clone)]
pub struct Fetcher(Rc<dyn JsonFetcher>);

impl Fetcher {
    pub fn new(inner: impl JsonFetcher + 'static) -> Self {
        Self(Rc::new(inner))
    }

    pub fn http() -> Self {
        Self::new(HttpFetcher::new())
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        fetch_json(self.0.as_ref(), url).await
    }
}
