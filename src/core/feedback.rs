use serde::{Deserialize, Serialize};

/// Three-level proximity classification shared by every feedback dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Yellow,
    Red,
}

/// North/south half of the globe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NorthSouth {
    N,
    S,
}

/// East/west half of the globe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EastWest {
    E,
    W,
}

/// Which way the secret lies relative to the guess on the population axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulationHint {
    Higher,
    Lower,
    Similar,
}

/// How the guessed country relates to the secret's country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryMatch {
    Exact,
    Neighbor,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HemisphereFeedback {
    /// Quadrant of the guess
    pub ns: NorthSouth,
    pub ew: EastWest,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatitudeFeedback {
    /// Absolute difference in degrees, rounded to two decimals
    pub delta: f64,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<NorthSouth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongitudeFeedback {
    /// Absolute difference in degrees, rounded to two decimals
    pub delta: f64,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<EastWest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationFeedback {
    /// Population of the guess (0 when unknown)
    pub value: u64,
    pub hint: PopulationHint,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryFeedback {
    #[serde(rename = "match")]
    pub match_kind: CountryMatch,
    pub color: Color,
}

/// Structured comparison between a guessed city and the secret city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub hemisphere: HemisphereFeedback,
    pub latitude: LatitudeFeedback,
    pub longitude: LongitudeFeedback,
    pub population: PopulationFeedback,
    pub country: CountryFeedback,
}

impl FeedbackResult {
    /// Every dimension is green
    pub fn is_perfect(&self) -> bool {
        [
            self.hemisphere.color,
            self.latitude.color,
            self.longitude.color,
            self.population.color,
            self.country.color,
        ]
        .iter()
        .all(|c| *c == Color::Green)
    }
}
