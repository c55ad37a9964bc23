use serde::Deserialize;
use tracing::debug;

use crate::{
    error::FetchError,
    fallback::pick_fact,
    model::{Fact, Quip},
    provider::{HttpSource, parse_endpoint},
    random::RandomSource,
};

#[derive(Debug, Clone)]
pub struct FactFetcher {
    base: String,
}

#[derive(Debug, Deserialize)]
struct RawFact {
    text: String,
}

impl FactFetcher {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub async fn fetch(
        &self,
        http: &dyn HttpSource,
        rng: &mut impl RandomSource,
    ) -> Result<Quip<Fact>, FetchError> {
        let url = parse_endpoint(&self.base)?;
        let reply = http.get(&url).await?;

        if !reply.is_success() {
            debug!(status = reply.status, "fact API returned an error status");
            return Ok(Quip::Fallback(pick_fact(rng)));
        }

        Ok(decode_fact(&reply.body, rng))
    }
}

pub fn decode_fact(body: &str, rng: &mut impl RandomSource) -> Quip<Fact> {
    match serde_json::from_str::<RawFact>(body) {
        Ok(raw) => Quip::Remote(Fact { text: raw.text }),
        Err(e) => {
            debug!(error = %e, "fact body did not decode, using fallback");
            Quip::Fallback(pick_fact(rng))
        }
    }
}
