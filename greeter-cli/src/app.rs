use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use greeter_core::{
    FactFetcher, GameState, HttpSource, JokeFetcher, RandomSource, Settings, WeatherFetcher,
    game, input::read_trimmed_line,
};
use tracing::{debug, info, instrument};

use crate::output::Console;

/// Runs the enabled features for one invocation.
pub struct App<'a, R> {
    settings: &'a Settings,
    http: &'a dyn HttpSource,
    rng: R,
}

impl<'a, R: RandomSource> App<'a, R> {
    pub fn new(settings: &'a Settings, http: &'a dyn HttpSource, rng: R) -> Self {
        Self { settings, http, rng }
    }

    /// Greet, then run weather, joke, fact and game in that order.
    ///
    /// Fetch failures are reported on the console and do not stop the run;
    /// only console I/O errors are returned.
    #[instrument(skip_all)]
    pub async fn run<I, W>(&mut self, input: &mut I, console: &mut Console<W>) -> Result<()>
    where
        I: BufRead,
        W: Write,
    {
        let name = self.resolve_name(input, console)?;

        console.greeting(&name).context("Failed to write greeting")?;
        if self.settings.uppercase {
            console.shout(&name)?;
        }

        if self.settings.weather {
            self.weather(console).await?;
        }
        if self.settings.joke {
            self.joke(console).await?;
        }
        if self.settings.fact {
            self.fact(console).await?;
        }
        if self.settings.game {
            self.game(input, console)?;
        }

        if self.settings.wants_hint() {
            console.hint()?;
        }

        Ok(())
    }

    fn resolve_name<I: BufRead, W: Write>(
        &self,
        input: &mut I,
        console: &mut Console<W>,
    ) -> Result<String> {
        if let Some(name) = self.settings.given_name() {
            return Ok(name.to_string());
        }

        console.ask_name()?;
        let name = read_trimmed_line(input)
            .context("Failed to read name from stdin")?
            .unwrap_or_default();
        debug!(%name, "name read from prompt");
        Ok(name)
    }

    async fn weather<W: Write>(&mut self, console: &mut Console<W>) -> Result<()> {
        let fetcher = WeatherFetcher::new(&self.settings.endpoints.weather);
        match fetcher.fetch(self.http, &self.settings.city).await {
            Ok(weather) => console.weather(&weather)?,
            Err(e) => {
                info!(error = %e, city = %self.settings.city, "weather unavailable");
                console.failure("weather", &e)?;
            }
        }
        Ok(())
    }

    async fn joke<W: Write>(&mut self, console: &mut Console<W>) -> Result<()> {
        let fetcher = JokeFetcher::new(&self.settings.endpoints.joke);
        match fetcher.fetch(self.http, &mut self.rng).await {
            Ok(joke) => console.joke(&joke)?,
            Err(e) => {
                info!(error = %e, "joke unavailable");
                console.failure("joke", &e)?;
            }
        }
        Ok(())
    }

    async fn fact<W: Write>(&mut self, console: &mut Console<W>) -> Result<()> {
        let fetcher = FactFetcher::new(&self.settings.endpoints.fact);
        match fetcher.fetch(self.http, &mut self.rng).await {
            Ok(fact) => console.fact(&fact)?,
            Err(e) => {
                info!(error = %e, "fact unavailable");
                console.failure("fact", &e)?;
            }
        }
        Ok(())
    }

    fn game<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        console: &mut Console<W>,
    ) -> Result<()> {
        let state = GameState::new(&mut self.rng);
        debug!(secret = state.target(), "game started");

        console.game_intro()?;
        let end = game::play(state, input, console).context("Guessing game I/O failed")?;
        console.game_end(&end)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use greeter_core::{
        FetchError,
        fallback::{FALLBACK_FACTS, FALLBACK_JOKES},
        provider::HttpReply,
    };
    use std::{io::Cursor, sync::Mutex};
    use url::Url;

    /// Replies per URL prefix and records what was requested.
    #[derive(Debug, Default)]
    struct Routes {
        routes: Vec<(String, Option<HttpReply>)>,
        requested: Mutex<Vec<String>>,
    }

    impl Routes {
        fn reply(mut self, prefix: &str, status: u16, body: &str) -> Self {
            self.routes.push((prefix.to_string(), Some(HttpReply { status, body: body.into() })));
            self
        }

        fn down(mut self, prefix: &str) -> Self {
            self.routes.push((prefix.to_string(), None));
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpSource for Routes {
        async fn get(&self, url: &Url) -> Result<HttpReply, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            let route = self.routes.iter().find(|(prefix, _)| url.as_str().starts_with(prefix));
            match route {
                Some((_, Some(reply))) => Ok(reply.clone()),
                _ => Err(FetchError::Network {
                    url: url.to_string(),
                    source: "connection refused".into(),
                }),
            }
        }
    }

    /// Replays a fixed sequence, repeating the last value.
    struct Script(Vec<u32>);

    impl RandomSource for Script {
        fn between(&mut self, _low: u32, _high: u32) -> u32 {
            if self.0.len() > 1 { self.0.remove(0) } else { self.0[0] }
        }
    }

    const WEATHER_BODY: &str =
        r#"{"location":{"name":"Paris"},"current":{"temp_c":21.0,"condition":{"text":"Sunny"}}}"#;

    async fn run(
        settings: Settings,
        http: &Routes,
        rng: Script,
        stdin: impl AsRef<[u8]>,
    ) -> String {
        let mut input = Cursor::new(stdin.as_ref().to_vec());
        let mut console = Console::new(Vec::new(), false);
        App::new(&settings, http, rng).run(&mut input, &mut console).await.unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    fn named(name: &str) -> Settings {
        Settings { name: Some(name.into()), ..Settings::default() }
    }

    #[tokio::test]
    async fn given_name_greets_once_without_prompt() {
        let out = run(named("Ada"), &Routes::default(), Script(vec![0]), "").await;

        assert_eq!(out.matches("Hello, Ada!").count(), 1);
        assert!(!out.contains("What's your name?"));
    }

    #[tokio::test]
    async fn missing_name_is_prompted_for() {
        let out = run(Settings::default(), &Routes::default(), Script(vec![0]), "  Grace \n").await;

        assert!(out.starts_with("What's your name? >> Hello, Grace!\n"));
    }

    #[tokio::test]
    async fn uppercase_shouts_name_and_suppresses_hint() {
        let settings = Settings { uppercase: true, ..named("ada") };
        let out = run(settings, &Routes::default(), Script(vec![0]), "").await;

        assert!(out.contains("YOUR NAME IN UPPERCASE: ADA"));
        assert!(!out.contains("Try these commands:"));
    }

    #[tokio::test]
    async fn hint_shown_without_feature_flags() {
        let out = run(named("Ada"), &Routes::default(), Script(vec![0]), "").await;

        assert!(out.contains("Try these commands:"));
        for flag in ["--weather", "--joke", "--fact", "--game"] {
            assert!(out.contains(flag));
        }
    }

    #[tokio::test]
    async fn weather_requests_configured_city() {
        let http = Routes::default().reply("http://api.weatherapi.com/", 200, WEATHER_BODY);
        let settings = Settings { weather: true, city: "Paris".into(), ..named("Ada") };

        let out = run(settings, &http, Script(vec![0]), "").await;

        assert_eq!(http.requested(), vec!["http://api.weatherapi.com/v1/current.json?q=Paris"]);
        assert!(out.contains("Current weather in Paris: 21.0°C (Sunny)"));
        assert!(!out.contains("Try these commands:"));
    }

    #[tokio::test]
    async fn fetch_failures_are_reported_and_run_continues() {
        let http = Routes::default()
            .down("http://api.weatherapi.com/")
            .reply("https://official-joke-api.appspot.com/", 200, "not json");
        let settings = Settings { weather: true, joke: true, ..named("Ada") };

        let out = run(settings, &http, Script(vec![1]), "").await;

        assert!(out.contains("Failed to get weather:"));
        assert!(out.contains(&format!("🎭 Joke: {}", FALLBACK_JOKES[1])));
    }

    #[tokio::test]
    async fn fact_network_error_prints_nothing_but_the_failure() {
        let http = Routes::default().down("https://uselessfacts.jsph.pl/");
        let settings = Settings { fact: true, ..named("Ada") };

        let out = run(settings, &http, Script(vec![0]), "").await;

        assert!(out.contains("Failed to get fact:"));
        assert!(!out.contains("🧠"));
        assert!(FALLBACK_FACTS.iter().all(|f| !out.contains(f)));
    }

    #[tokio::test]
    async fn features_run_in_fixed_order() {
        let http = Routes::default()
            .reply("http://api.weatherapi.com/", 200, WEATHER_BODY)
            .reply(
                "https://official-joke-api.appspot.com/",
                200,
                r#"{"setup":"S","punchline":"P"}"#,
            )
            .reply("https://uselessfacts.jsph.pl/", 200, r#"{"text":"F"}"#);
        let settings = Settings {
            weather: true,
            joke: true,
            fact: true,
            game: true,
            ..named("Ada")
        };

        let out = run(settings, &http, Script(vec![7]), "7\n").await;

        let positions: Vec<usize> = ["Current weather", "🎭 S", "🧠 Fact: F", "🔢"]
            .iter()
            .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{out}");
        assert_eq!(http.requested().len(), 3);
    }

    #[tokio::test]
    async fn game_counts_invalid_guesses() {
        let settings = Settings { game: true, ..named("Ada") };

        let out = run(settings, &Routes::default(), Script(vec![60]), "10\nsixty\n80\n60\n").await;

        assert!(out.contains("Too low!"));
        assert!(out.contains("Please enter a valid number!"));
        assert!(out.contains("Too high!"));
        assert!(out.contains("You guessed it in 4 attempts!"));
    }

    #[tokio::test]
    async fn name_is_used_exactly_as_given() {
        let out = run(named(" Ada "), &Routes::default(), Script(vec![0]), "").await;

        assert!(out.contains("Hello,  Ada !"));
        assert!(!out.contains("What's your name?"));
    }

    #[tokio::test]
    async fn invalid_utf8_name_is_greeted_lossily() {
        let out =
            run(Settings::default(), &Routes::default(), Script(vec![0]), b"Ad\xe9\n").await;

        assert!(out.contains("Hello, Ad\u{fffd}!"));
    }

    #[tokio::test]
    async fn invalid_utf8_guess_is_reported_and_game_continues() {
        let settings = Settings { game: true, ..named("Ada") };

        let out =
            run(settings, &Routes::default(), Script(vec![42]), b"\xff\xfe\n42\n").await;

        assert!(out.contains("Please enter a valid number!"));
        assert!(out.contains("You guessed it in 2 attempts!"));
    }

    #[tokio::test]
    async fn game_ends_when_stdin_closes() {
        let settings = Settings { game: true, ..named("Ada") };

        let out = run(settings, &Routes::default(), Script(vec![60]), "10\n").await;

        assert!(out.contains("game abandoned after 1 attempts"));
        assert!(!out.contains("Correct!"));
    }
}
