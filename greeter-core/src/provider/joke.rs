use serde::Deserialize;
use tracing::debug;

use crate::{
    error::FetchError,
    fallback::pick_joke,
    model::{Joke, Quip},
    provider::{HttpSource, parse_endpoint},
    random::RandomSource,
};

#[derive(Debug, Clone)]
pub struct JokeFetcher {
    base: String,
}

#[derive(Debug, Deserialize)]
struct RawJoke {
    setup: String,
    punchline: String,
}

impl JokeFetcher {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Fetch a random joke.
    ///
    /// Only transport failures are errors; any reply that does not decode
    /// yields a fallback joke.
    pub async fn fetch(
        &self,
        http: &dyn HttpSource,
        rng: &mut impl RandomSource,
    ) -> Result<Quip<Joke>, FetchError> {
        let url = parse_endpoint(&self.base)?;
        let reply = http.get(&url).await?;

        if !reply.is_success() {
            debug!(status = reply.status, "joke API returned an error status");
            return Ok(Quip::Fallback(pick_joke(rng)));
        }

        Ok(decode_joke(&reply.body, rng))
    }
}

pub fn decode_joke(body: &str, rng: &mut impl RandomSource) -> Quip<Joke> {
    match serde_json::from_str::<RawJoke>(body) {
        Ok(raw) => Quip::Remote(Joke { setup: raw.setup, punchline: raw.punchline }),
        Err(e) => {
            debug!(error = %e, "joke body did not decode, using fallback");
            Quip::Fallback(pick_joke(rng))
        }
    }
}
