use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::debug;
use url::Url;

use crate::error::FetchError;

pub mod fact;
pub mod joke;
pub mod weatherapi;

pub use fact::FactFetcher;
pub use joke::JokeFetcher;
pub use weatherapi::WeatherFetcher;

pub const DEFAULT_WEATHER_URL: &str = "http://api.weatherapi.com/v1/current.json";
pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";
pub const DEFAULT_FACT_URL: &str = "https://uselessfacts.jsph.pl/api/v2/facts/random?language=en";

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by the fetchers.
#[async_trait]
pub trait HttpSource: Send + Sync + Debug {
    async fn get(&self, url: &Url) -> Result<HttpReply, FetchError>;
}

/// Plain `reqwest` client: no timeout override, no retries.
#[derive(Debug, Clone, Default)]
pub struct ReqwestSource {
    http: Client,
}

impl ReqwestSource {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl HttpSource for ReqwestSource {
    async fn get(&self, url: &Url) -> Result<HttpReply, FetchError> {
        let network = |e: reqwest::Error| FetchError::Network {
            url: url.to_string(),
            source: Box::new(e),
        };

        let res = self.http.get(url.clone()).send().await.map_err(network)?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(network)?;

        debug!(%url, status, bytes = body.len(), "GET completed");
        Ok(HttpReply { status, body })
    }
}

/// Base URLs of the three public APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub weather: String,
    pub joke: String,
    pub fact: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            weather: DEFAULT_WEATHER_URL.to_string(),
            joke: DEFAULT_JOKE_URL.to_string(),
            fact: DEFAULT_FACT_URL.to_string(),
        }
    }
}

pub(crate) fn parse_endpoint(base: &str) -> Result<Url, FetchError> {
    Url::parse(base).map_err(|source| FetchError::InvalidUrl { base: base.to_string(), source })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
