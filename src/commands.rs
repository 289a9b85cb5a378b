use tracing::debug;

use crate::buckets::{build_team_index, check_known_teams, process_fixtures};
use crate::error::Result;
use crate::gameweeks::{find_blanks, find_doubles, group_by_gameweek};
use crate::report::{render_blanks, render_doubles, render_next};
use crate::source::DataSource;

pub fn next_fixtures(source: &DataSource) -> Result<String> {
    let mut index = build_team_index(source.teams()?);
    let fixtures = source.fixtures()?;
    process_fixtures(&fixtures, &mut index)?;
    Ok(render_next(&index))
}

pub fn blanks(source: &DataSource) -> Result<String> {
    let index = build_team_index(source.teams()?);
    let fixtures = source.fixtures()?;
    check_known_teams(&fixtures, &index)?;
    let gameweeks = group_by_gameweek(&fixtures);
    let blanks = find_blanks(&gameweeks, &index);
    debug!(gameweeks = gameweeks.len(), with_blanks = blanks.len(), "blanks computed");
    Ok(render_blanks(&blanks, &index))
}

pub fn doubles(source: &DataSource) -> Result<String> {
    let index = build_team_index(source.teams()?);
    let fixtures = source.fixtures()?;
    check_known_teams(&fixtures, &index)?;
    let gameweeks = group_by_gameweek(&fixtures);
    let doubles = find_doubles(&gameweeks);
    debug!(gameweeks = gameweeks.len(), with_doubles = doubles.len(), "doubles computed");
    Ok(render_doubles(&doubles, &index))
}
