use clap::{ArgAction, Parser};
use greeter_core::{Endpoints, Settings, config::DEFAULT_CITY};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "greeter",
    version,
    about = "A colorful greeter that can also fetch weather, jokes and facts",
    long_about = "A colorful CLI application that can:\n\
                  - Greet you personally\n\
                  - Tell you the weather\n\
                  - Share interesting facts\n\
                  - Tell jokes\n\
                  - Play a number guessing game"
)]
pub struct Cli {
    /// Shout your name.
    #[arg(short, long)]
    pub uppercase: bool,

    /// Provide name directly instead of being asked for it.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Show current weather.
    #[arg(long)]
    pub weather: bool,

    /// City for the weather report.
    #[arg(long, default_value = DEFAULT_CITY)]
    pub city: String,

    /// Tell a random joke.
    #[arg(long)]
    pub joke: bool,

    /// Share an interesting fact.
    #[arg(long)]
    pub fact: bool,

    /// Play the number guessing game.
    #[arg(long)]
    pub game: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            name: self.name.clone(),
            uppercase: self.uppercase,
            weather: self.weather,
            joke: self.joke,
            fact: self.fact,
            game: self.game,
            city: self.city.clone(),
            endpoints: Endpoints::default(),
        }
    }
}
