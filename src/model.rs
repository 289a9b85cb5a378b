use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `/bootstrap-static/`. Only the team list is used.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BootstrapData {
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: None,
        }
    }
}

/// One row of `/fixtures/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Fixture {
    pub id: u32,
    // FPL sends null for fixtures not yet placed in a gameweek.
    #[serde(default, deserialize_with = "null_as_default")]
    pub event: u32,
    #[serde(rename = "team_h")]
    pub home_team_id: u32,
    #[serde(rename = "team_a")]
    pub away_team_id: u32,
    #[serde(default)]
    pub kickoff_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: bool,
    #[serde(rename = "team_h_score", default)]
    pub home_score: Option<u32>,
    #[serde(rename = "team_a_score", default)]
    pub away_score: Option<u32>,
    #[serde(rename = "team_h_difficulty", default, deserialize_with = "null_as_default")]
    pub home_difficulty: u8,
    #[serde(rename = "team_a_difficulty", default, deserialize_with = "null_as_default")]
    pub away_difficulty: u8,
}

impl Fixture {
    /// Kickoff time, if the fixture has a real one scheduled.
    pub fn scheduled_kickoff(&self) -> Option<DateTime<Utc>> {
        self.kickoff_time.filter(|t| t.year() > 1)
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn shares_team_with(&self, other: &Fixture) -> bool {
        other.involves(self.home_team_id) || other.involves(self.away_team_id)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
