use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::{
    error::FetchError,
    model::Weather,
    provider::{HttpSource, parse_endpoint, truncate_body},
};

/// Current weather from WeatherAPI.com.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    base: String,
}

impl WeatherFetcher {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Request URL for `city`, keeping any query already present on the base.
    pub fn request_url(&self, city: &str) -> Result<Url, FetchError> {
        let mut url = parse_endpoint(&self.base)?;
        url.query_pairs_mut().append_pair("q", city);
        Ok(url)
    }

    pub async fn fetch(&self, http: &dyn HttpSource, city: &str) -> Result<Weather, FetchError> {
        let url = self.request_url(city)?;
        debug!(%url, city, "fetching weather");

        let reply = http.get(&url).await?;
        if !reply.is_success() {
            return Err(FetchError::Status {
                status: reply.status,
                body: truncate_body(&reply.body),
            });
        }

        decode_weather(&reply.body)
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

pub fn decode_weather(body: &str) -> Result<Weather, FetchError> {
    let parsed: WaResponse = serde_json::from_str(body)?;

    Ok(Weather {
        location_name: parsed.location.name,
        temperature_c: parsed.current.temp_c,
        condition: parsed.current.condition.text,
    })
}
