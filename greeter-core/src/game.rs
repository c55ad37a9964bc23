//! Number guessing game.
//!
//! [`GameState`] holds the decision logic; [`play`] drives it from a line
//! reader and hands every step to a [`GameUi`] for rendering.

use std::io::{self, BufRead};

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::{error::GuessError, input::read_trimmed_line, random::RandomSource};

pub const MIN_TARGET: u32 = 1;
pub const MAX_TARGET: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Invalid(GuessError),
    TooLow,
    TooHigh,
    Correct { attempts: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Won { attempts: u32 },
    /// Input ran out before the number was found.
    InputClosed { attempts: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: u32,
    attempts: u32,
}

impl GameState {
    pub fn new(rng: &mut impl RandomSource) -> Self {
        let target = rng.between(MIN_TARGET, MAX_TARGET).clamp(MIN_TARGET, MAX_TARGET);
        Self { target, attempts: 0 }
    }

    pub fn with_target(target: u32) -> Result<Self> {
        if !(MIN_TARGET..=MAX_TARGET).contains(&target) {
            return Err(anyhow!(
                "Target {target} is outside the allowed range {MIN_TARGET}..={MAX_TARGET}."
            ));
        }
        Ok(Self { target, attempts: 0 })
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Evaluate one raw line of input.
    ///
    /// Every submission counts as an attempt, including ones that fail to parse.
    pub fn submit(&mut self, raw: &str) -> GuessOutcome {
        self.attempts += 1;

        let guess: i64 = match raw.trim().parse() {
            Ok(g) => g,
            Err(_) => return GuessOutcome::Invalid(GuessError::NotANumber(raw.to_string())),
        };

        match guess.cmp(&i64::from(self.target)) {
            std::cmp::Ordering::Less => GuessOutcome::TooLow,
            std::cmp::Ordering::Greater => GuessOutcome::TooHigh,
            std::cmp::Ordering::Equal => GuessOutcome::Correct { attempts: self.attempts },
        }
    }
}

/// Rendering hooks for the game loop.
pub trait GameUi {
    fn prompt(&mut self) -> io::Result<()>;
    fn report(&mut self, outcome: &GuessOutcome) -> io::Result<()>;
}

/// Run the game until the number is guessed or input is exhausted.
pub fn play<R, U>(mut state: GameState, input: &mut R, ui: &mut U) -> io::Result<GameEnd>
where
    R: BufRead + ?Sized,
    U: GameUi + ?Sized,
{
    loop {
        ui.prompt()?;
        let Some(line) = read_trimmed_line(input)? else {
            debug!(attempts = state.attempts(), "input closed during game");
            return Ok(GameEnd::InputClosed { attempts: state.attempts() });
        };

        let outcome = state.submit(&line);
        debug!(attempts = state.attempts(), ?outcome, "guess evaluated");
        ui.report(&outcome)?;

        if let GuessOutcome::Correct { attempts } = outcome {
            return Ok(GameEnd::Won { attempts });
        }
    }
}
