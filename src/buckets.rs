use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::{PremError, Result};
use crate::model::{Fixture, Team};

pub const NEXT_FIXTURES_LIMIT: usize = 5;

/// Per-team aggregation record: the team plus what the fixture pass derives for it.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamBucket {
    pub team: Team,
    pub points: u32,
    pub fixtures: Vec<Fixture>,
}

impl TeamBucket {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            points: 0,
            fixtures: Vec::new(),
        }
    }

    fn push_upcoming(&mut self, fixture: &Fixture) {
        if self.fixtures.len() < NEXT_FIXTURES_LIMIT {
            self.fixtures.push(fixture.clone());
        }
    }

    /// Difficulty of `fixture` from this team's side of it.
    pub fn difficulty_of(&self, fixture: &Fixture) -> u8 {
        if fixture.home_team_id == self.team.id {
            fixture.home_difficulty
        } else {
            fixture.away_difficulty
        }
    }

    pub fn total_difficulty(&self) -> u32 {
        self.fixtures
            .iter()
            .map(|f| u32::from(self.difficulty_of(f)))
            .sum()
    }
}

/// Team id to bucket, iterated in ascending id order.
pub type TeamIndex = BTreeMap<u32, TeamBucket>;

pub fn build_team_index(teams: impl IntoIterator<Item = Team>) -> TeamIndex {
    let mut index = TeamIndex::new();
    for team in teams {
        index.insert(team.id, TeamBucket::new(team));
    }
    index
}

/// Single pass over `fixtures`: award points for finished games and keep the
/// first few scheduled fixtures per team.
pub fn process_fixtures(fixtures: &[Fixture], index: &mut TeamIndex) -> Result<()> {
    info!(count = fixtures.len(), "processing fixtures");
    for fixture in fixtures {
        check_teams(fixture, index)?;

        if fixture.finished {
            let home = fixture.home_score.unwrap_or_default();
            let away = fixture.away_score.unwrap_or_default();
            if home > away {
                award(index, fixture.home_team_id, 3);
            } else if home < away {
                award(index, fixture.away_team_id, 3);
            } else {
                award(index, fixture.home_team_id, 1);
                award(index, fixture.away_team_id, 1);
            }
        } else if fixture.scheduled_kickoff().is_some() {
            for team_id in [fixture.home_team_id, fixture.away_team_id] {
                if let Some(bucket) = index.get_mut(&team_id) {
                    bucket.push_upcoming(fixture);
                }
            }
        } else {
            debug!(fixture_id = fixture.id, "skipping fixture without kickoff time");
        }
    }
    Ok(())
}

/// Fails on the first fixture naming a team missing from `index`.
pub fn check_known_teams(fixtures: &[Fixture], index: &TeamIndex) -> Result<()> {
    fixtures.iter().try_for_each(|f| check_teams(f, index))
}

fn check_teams(fixture: &Fixture, index: &TeamIndex) -> Result<()> {
    for team_id in [fixture.home_team_id, fixture.away_team_id] {
        if !index.contains_key(&team_id) {
            return Err(PremError::UnknownTeam {
                fixture_id: fixture.id,
                team_id,
            });
        }
    }
    Ok(())
}

fn award(index: &mut TeamIndex, team_id: u32, points: u32) {
    if let Some(bucket) = index.get_mut(&team_id) {
        bucket.points += points;
    }
}

/// Buckets ordered by points, highest first. Equal points keep ascending team id order.
pub fn points_table(index: &TeamIndex) -> Vec<&TeamBucket> {
    let mut table: Vec<&TeamBucket> = index.values().collect();
    table.sort_by(|a, b| b.points.cmp(&a.points));
    table
}
