use serde::{Deserialize, Serialize};
use std::fmt;

/// Hero identifier as served by the API: either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeroId {
    Num(u64),
    Text(String),
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeroId::Num(n) => write!(f, "{n}"),
            HeroId::Text(s) => f.write_str(s),
        }
    }
}

/// Short hero record used for counter and synergy relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSummary {
    pub hero_id: HeroId,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub hero_id: HeroId,
    pub name: String,
    pub icon: String,
    pub win_rate: f64,
    /// Heroes that perform well against this one.
    #[serde(default)]
    pub countered_by: Vec<HeroSummary>,
    /// Heroes that pair well with this one.
    #[serde(default)]
    pub synergy: Vec<HeroSummary>,
}
pub type HeroList = Vec<Hero>;

/// Failure envelope handed to the presentation layer once retries run out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub message: String,
    pub attempts: u32,
}

/// Result of one fetch sequence as seen by a consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Pending,
    Success(HeroList),
    Failure(FetchFailure),
}
