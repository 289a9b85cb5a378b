use std::collections::BTreeMap;

use crate::buckets::TeamIndex;
use crate::model::Fixture;

/// Gameweek number to its fixtures in input order. Event 0 never appears.
pub type GameweekMap = BTreeMap<u32, Vec<Fixture>>;

pub fn group_by_gameweek(fixtures: &[Fixture]) -> GameweekMap {
    let mut gameweeks = GameweekMap::new();
    for fixture in fixtures {
        if fixture.event != 0 {
            gameweeks
                .entry(fixture.event)
                .or_default()
                .push(fixture.clone());
        }
    }
    gameweeks
}

/// Teams with no fixture, per gameweek. Gameweeks where everyone plays are left out.
pub fn find_blanks(gameweeks: &GameweekMap, index: &TeamIndex) -> BTreeMap<u32, Vec<u32>> {
    let mut blanks = BTreeMap::new();
    for (&gameweek, fixtures) in gameweeks {
        let mut ids: Vec<u32> = index.keys().copied().collect();
        for fixture in fixtures {
            ids = remove(ids, fixture.home_team_id);
            ids = remove(ids, fixture.away_team_id);
        }
        if !ids.is_empty() {
            blanks.insert(gameweek, ids);
        }
    }
    blanks
}

/// Fixtures in which at least one side plays again the same gameweek.
pub fn find_doubles(gameweeks: &GameweekMap) -> BTreeMap<u32, Vec<Fixture>> {
    let mut doubles = BTreeMap::new();
    for (&gameweek, fixtures) in gameweeks {
        let found: Vec<Fixture> = fixtures
            .iter()
            .filter(|f| is_double(f, fixtures))
            .cloned()
            .collect();
        if !found.is_empty() {
            doubles.insert(gameweek, found);
        }
    }
    doubles
}

pub fn is_double(fixture: &Fixture, gameweek: &[Fixture]) -> bool {
    gameweek
        .iter()
        .any(|other| other.id != fixture.id && fixture.shares_team_with(other))
}

/// Drops the first occurrence of `value`.
pub fn remove(mut ids: Vec<u32>, value: u32) -> Vec<u32> {
    if let Some(pos) = ids.iter().position(|&id| id == value) {
        ids.remove(pos);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buckets::build_team_index;
    use crate::model::Team;

    fn fixture(id: u32, event: u32, home: u32, away: u32) -> Fixture {
        Fixture {
            id,
            event,
            home_team_id: home,
            away_team_id: away,
            ..Fixture::default()
        }
    }

    #[test]
    fn remove_drops_value() {
        assert_eq!(remove(vec![1, 2, 3, 4], 2), vec![1, 3, 4]);
        assert_eq!(remove(vec![1, 2, 3, 4], 9), vec![1, 2, 3, 4]);
        assert_eq!(remove(Vec::new(), 1), Vec::<u32>::new());
    }

    #[test]
    fn grouping_skips_event_zero() {
        let fixtures = vec![
            fixture(1, 2, 1, 2),
            fixture(2, 0, 3, 4),
            fixture(3, 1, 3, 4),
            fixture(4, 2, 3, 5),
        ];
        let gameweeks = group_by_gameweek(&fixtures);
        assert_eq!(gameweeks.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        let gw2: Vec<u32> = gameweeks[&2].iter().map(|f| f.id).collect();
        assert_eq!(gw2, vec![1, 4]);
        assert!(!gameweeks.values().flatten().any(|f| f.id == 2));
    }

    #[test]
    fn blank_for_team_without_fixture() {
        let index = build_team_index([Team::new(1, "A"), Team::new(2, "B"), Team::new(3, "C")]);
        let gameweeks = group_by_gameweek(&[fixture(1, 1, 1, 2)]);
        let blanks = find_blanks(&gameweeks, &index);
        assert_eq!(blanks.get(&1), Some(&vec![3]));
        assert_eq!(index[&blanks[&1][0]].team.name, "C");
    }

    #[test]
    fn no_blanks_when_everyone_plays() {
        let index = build_team_index((1..=4).map(|id| Team::new(id, format!("T{id}"))));
        let gameweeks = group_by_gameweek(&[
            fixture(1, 1, 1, 2),
            fixture(2, 1, 3, 4),
            fixture(3, 2, 4, 1),
        ]);
        let blanks = find_blanks(&gameweeks, &index);
        assert!(!blanks.contains_key(&1));
        assert_eq!(blanks.get(&2), Some(&vec![2, 3]));
    }

    #[test]
    fn double_keeps_both_fixtures() {
        let gameweeks = group_by_gameweek(&[fixture(1, 1, 1, 2), fixture(2, 1, 1, 3)]);
        let doubles = find_doubles(&gameweeks);
        let gw1 = &doubles[&1];
        assert_eq!(gw1.len(), 2);
        assert_eq!(gw1[0].home_team_id, 1);
        assert_eq!(gw1[1].home_team_id, 1);
    }

    #[test]
    fn double_detected_across_home_and_away() {
        // Team 2 is away in one and home in the other; 5 v 6 is a normal fixture.
        let gameweeks = group_by_gameweek(&[
            fixture(1, 3, 1, 2),
            fixture(2, 3, 5, 6),
            fixture(3, 3, 2, 4),
        ]);
        let ids: Vec<u32> = find_doubles(&gameweeks)[&3].iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn no_doubles_when_each_team_plays_once() {
        let gameweeks = group_by_gameweek(&[fixture(1, 1, 1, 2), fixture(2, 1, 3, 4)]);
        assert!(find_doubles(&gameweeks).is_empty());
    }

    #[test]
    fn is_double_ignores_the_fixture_itself() {
        let fixtures = vec![fixture(1, 1, 1, 2), fixture(2, 1, 1, 3)];
        assert!(is_double(&fixtures[0], &fixtures));
        assert!(!is_double(&fixtures[0], &fixtures[..1]));
        assert!(!is_double(&fixture(3, 1, 4, 5), &fixtures));
    }
}
