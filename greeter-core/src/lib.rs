//! Core library for the `greeter` CLI.
//!
//! This crate defines:
//! - Run configuration
//! - Fetchers for the weather, joke and fact APIs, with local fallbacks
//! - The number guessing game
//! - A random-source abstraction so all of the above are deterministic in tests
//!
//! Nothing here writes to the terminal; rendering belongs to `greeter-cli`.

pub mod config;
pub mod error;
pub mod fallback;
pub mod game;
pub mod input;
pub mod model;
pub mod provider;
pub mod random;

pub use config::Settings;
pub use error::{FetchError, GuessError};
pub use game::{GameEnd, GameState, GameUi, GuessOutcome};
pub use model::{Fact, Joke, Quip, Weather};
pub use provider::{Endpoints, FactFetcher, HttpSource, JokeFetcher, ReqwestSource, WeatherFetcher};
pub use random::{RandomSource, SystemRandom};
