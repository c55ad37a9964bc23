//! Terminal presentation: every color decision lives here.

use std::{
    fmt::Display,
    io::{self, IsTerminal, Stdout, Write},
};

use greeter_core::{
    Fact, FetchError, GameEnd, GameUi, GuessOutcome, Joke, Quip, Weather,
    game::{MAX_TARGET, MIN_TARGET},
};
use owo_colors::{OwoColorize, Style};

pub struct Console<W> {
    out: W,
    color: bool,
}

impl Console<Stdout> {
    /// Console on stdout; colors only when stdout is a terminal.
    pub fn stdout(no_color: bool) -> Self {
        let out = io::stdout();
        let color = !no_color && out.is_terminal();
        Self::new(out, color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint<T: Display>(&self, text: T, style: Style) -> String {
        if self.color { text.style(style).to_string() } else { text.to_string() }
    }

    fn line<T: Display>(&mut self, text: T, style: Style) -> io::Result<()> {
        let painted = self.paint(text, style);
        writeln!(self.out, "{painted}")
    }

    fn inline<T: Display>(&mut self, text: T, style: Style) -> io::Result<()> {
        let painted = self.paint(text, style);
        write!(self.out, "{painted}")?;
        self.out.flush()
    }

    pub fn ask_name(&mut self) -> io::Result<()> {
        self.inline("What's your name? ", Style::new().yellow())
    }

    pub fn greeting(&mut self, name: &str) -> io::Result<()> {
        let marker = self.paint(">>", Style::new().green());
        writeln!(self.out, "{marker} Hello, {name}!")
    }

    pub fn shout(&mut self, name: &str) -> io::Result<()> {
        let marker = self.paint("!!", Style::new().red().bold());
        writeln!(self.out, "{marker} YOUR NAME IN UPPERCASE: {}", name.to_uppercase())
    }

    pub fn weather(&mut self, weather: &Weather) -> io::Result<()> {
        let icon = self.paint("☀️", Style::new().yellow());
        let place = self.paint(&weather.location_name, Style::new().blue());
        writeln!(
            self.out,
            "{icon} Current weather in {place}: {:.1}°C ({})",
            weather.temperature_c, weather.condition
        )
    }

    pub fn joke(&mut self, joke: &Quip<Joke>) -> io::Result<()> {
        let cyan = Style::new().cyan();
        match joke {
            Quip::Remote(j) => {
                self.line(format!("\n🎭 {}", j.setup), cyan)?;
                self.line(format!("   {}", j.punchline), cyan)
            }
            Quip::Fallback(text) => self.line(format!("\n🎭 Joke: {text}"), cyan),
        }
    }

    pub fn fact(&mut self, fact: &Quip<Fact>) -> io::Result<()> {
        let text = match fact {
            Quip::Remote(f) => f.text.as_str(),
            Quip::Fallback(text) => *text,
        };
        self.line(format!("\n🧠 Fact: {text}"), Style::new().magenta())
    }

    /// Report a feature that could not be fetched.
    pub fn failure(&mut self, what: &str, err: &FetchError) -> io::Result<()> {
        self.line(format!("Failed to get {what}: {err}"), Style::new().red())
    }

    pub fn game_intro(&mut self) -> io::Result<()> {
        self.line(
            format!(
                "\n🔢 I'm thinking of a number between {MIN_TARGET} and {MAX_TARGET}. \
                 Can you guess it?"
            ),
            Style::new().blue(),
        )
    }

    pub fn game_end(&mut self, end: &GameEnd) -> io::Result<()> {
        match end {
            // The winning line is already printed by `report`.
            GameEnd::Won { .. } => Ok(()),
            GameEnd::InputClosed { attempts } => self.line(
                format!("\nNo more input, game abandoned after {attempts} attempts."),
                Style::new().red(),
            ),
        }
    }

    pub fn hint(&mut self) -> io::Result<()> {
        let cyan = Style::new().cyan();
        self.line("\nTry these commands:", cyan)?;
        self.line("  --weather\tGet current weather (use with --city)", cyan)?;
        self.line("  --joke\tHear a random joke", cyan)?;
        self.line("  --fact\tLearn an interesting fact", cyan)?;
        self.line("  --game\tPlay a number guessing game", cyan)
    }
}

impl<W: Write> GameUi for Console<W> {
    fn prompt(&mut self) -> io::Result<()> {
        self.inline("Your guess: ", Style::new().yellow())
    }

    fn report(&mut self, outcome: &GuessOutcome) -> io::Result<()> {
        match outcome {
            GuessOutcome::Invalid(_) => {
                self.line("Please enter a valid number!", Style::new().red())
            }
            GuessOutcome::TooLow => self.line("Too low!", Style::new().cyan()),
            GuessOutcome::TooHigh => self.line("Too high!", Style::new().cyan()),
            GuessOutcome::Correct { attempts } => self.line(
                format!("🎉 Correct! You guessed it in {attempts} attempts!"),
                Style::new().green(),
            ),
        }
    }
}
