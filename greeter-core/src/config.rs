use crate::provider::Endpoints;

pub const DEFAULT_CITY: &str = "London";

/// Run configuration, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name to greet, used exactly as given; prompted for when absent or empty.
    pub name: Option<String>,
    pub uppercase: bool,
    pub weather: bool,
    pub joke: bool,
    pub fact: bool,
    pub game: bool,
    pub city: String,
    pub endpoints: Endpoints,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: None,
            uppercase: false,
            weather: false,
            joke: false,
            fact: false,
            game: false,
            city: DEFAULT_CITY.to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Settings {
    /// The name given on the command line, if it is not empty.
    pub fn given_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn any_feature(&self) -> bool {
        self.weather || self.joke || self.fact || self.game
    }

    /// Whether the usage hint should follow the greeting.
    pub fn wants_hint(&self) -> bool {
        !self.uppercase && !self.any_feature()
    }
}
