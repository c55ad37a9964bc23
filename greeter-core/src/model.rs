/// Current conditions for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    pub location_name: String,
    pub temperature_c: f64,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub text: String,
}

/// A joke or fact: either decoded from the remote API or one of the
/// hardcoded fallback texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quip<T> {
    Remote(T),
    Fallback(&'static str),
}

impl<T> Quip<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Quip::Fallback(_))
    }
}
