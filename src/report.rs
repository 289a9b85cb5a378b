use std::collections::BTreeMap;
use std::fmt::Write;

use crate::buckets::{TeamIndex, points_table};
use crate::model::Fixture;

const KICKOFF_FORMAT: &str = "%a %d %b %H:%M";

/// Teams by points, each with its next fixtures and their combined difficulty.
pub fn render_next(index: &TeamIndex) -> String {
    let mut out = String::new();
    for bucket in points_table(index) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({} pts):", bucket.team.name, bucket.points);
        for fixture in &bucket.fixtures {
            let (marker, opponent_id) = if fixture.home_team_id == bucket.team.id {
                ("H", fixture.away_team_id)
            } else {
                ("A", fixture.home_team_id)
            };
            let kickoff = fixture
                .scheduled_kickoff()
                .map(|t| t.format(KICKOFF_FORMAT).to_string())
                .unwrap_or_else(|| "TBC".to_string());
            let _ = writeln!(
                out,
                "{marker}  {:<24} {}  {kickoff}",
                team_name(index, opponent_id),
                bucket.difficulty_of(fixture),
            );
        }
        let _ = writeln!(out, "Total difficulty: {}", bucket.total_difficulty());
    }
    out
}

pub fn render_blanks(blanks: &BTreeMap<u32, Vec<u32>>, index: &TeamIndex) -> String {
    let mut out = String::new();
    for (gameweek, team_ids) in blanks {
        let _ = writeln!(out, "Gameweek: {gameweek}");
        for id in team_ids {
            let _ = writeln!(out, "{}", team_name(index, *id));
        }
        let _ = writeln!(out);
    }
    out
}

pub fn render_doubles(doubles: &BTreeMap<u32, Vec<Fixture>>, index: &TeamIndex) -> String {
    let mut out = String::new();
    for (gameweek, fixtures) in doubles {
        let _ = writeln!(out, "Gameweek: {gameweek}");
        for fixture in fixtures {
            let _ = writeln!(
                out,
                "{} v {}",
                team_name(index, fixture.home_team_id),
                team_name(index, fixture.away_team_id)
            );
        }
        let _ = writeln!(out);
    }
    out
}

fn team_name(index: &TeamIndex, id: u32) -> String {
    index
        .get(&id)
        .map(|b| b.team.name.clone())
        .unwrap_or_else(|| format!("team {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buckets::{build_team_index, process_fixtures};
    use crate::model::Team;
    use chrono::{TimeZone, Utc};

    fn index() -> TeamIndex {
        build_team_index([
            Team::new(1, "Arsenal"),
            Team::new(2, "Brentford"),
            Team::new(3, "Chelsea"),
        ])
    }

    #[test]
    fn next_lists_teams_by_points_with_difficulty_total() {
        let mut index = index();
        let fixtures = vec![
            Fixture {
                id: 1,
                event: 1,
                home_team_id: 3,
                away_team_id: 2,
                finished: true,
                home_score: Some(2),
                away_score: Some(0),
                ..Fixture::default()
            },
            Fixture {
                id: 2,
                event: 2,
                home_team_id: 1,
                away_team_id: 3,
                kickoff_time: Some(Utc.with_ymd_and_hms(2024, 8, 17, 14, 0, 0).unwrap()),
                home_difficulty: 4,
                away_difficulty: 3,
                ..Fixture::default()
            },
        ];
        process_fixtures(&fixtures, &mut index).unwrap();
        let out = render_next(&index);

        let chelsea = out.find("Chelsea (3 pts):").unwrap();
        let arsenal = out.find("Arsenal (0 pts):").unwrap();
        let brentford = out.find("Brentford (0 pts):").unwrap();
        assert!(chelsea < arsenal && arsenal < brentford);

        assert!(out.contains("H  Chelsea"));
        assert!(out.contains("A  Arsenal"));
        assert!(out.contains("Sat 17 Aug 14:00"));
        assert!(out.contains("Total difficulty: 4"));
        assert!(out.contains("Total difficulty: 3"));
        assert!(out.contains("Total difficulty: 0"));
    }

    #[test]
    fn blanks_print_names_under_each_gameweek() {
        let mut blanks = BTreeMap::new();
        blanks.insert(29, vec![1, 3]);
        blanks.insert(7, vec![2]);
        let out = render_blanks(&blanks, &index());
        assert_eq!(
            out,
            "Gameweek: 7\nBrentford\n\nGameweek: 29\nArsenal\nChelsea\n\n"
        );
    }

    #[test]
    fn doubles_print_each_fixture() {
        let mut doubles = BTreeMap::new();
        doubles.insert(
            34,
            vec![
                Fixture {
                    id: 1,
                    event: 34,
                    home_team_id: 1,
                    away_team_id: 2,
                    ..Fixture::default()
                },
                Fixture {
                    id: 2,
                    event: 34,
                    home_team_id: 3,
                    away_team_id: 1,
                    ..Fixture::default()
                },
            ],
        );
        let out = render_doubles(&doubles, &index());
        assert_eq!(out, "Gameweek: 34\nArsenal v Brentford\nChelsea v Arsenal\n\n");
    }

    #[test]
    fn empty_results_render_nothing() {
        assert!(render_blanks(&BTreeMap::new(), &index()).is_empty());
        assert!(render_doubles(&BTreeMap::new(), &index()).is_empty());
    }
}
