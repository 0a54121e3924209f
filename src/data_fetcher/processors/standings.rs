use super::game_outcome::decide_game;
use super::roster::Roster;
use crate::data_fetcher::models::{ContentItem, ContentRef, GameOutcome, TeamStats, Week};
use std::collections::HashMap;
use tracing::debug;

/// Computes the standings table for every team that appears in a playable
/// match. Each playable match adds its game count to both sides; every
/// decided game credits a win and a point to the winner and a loss to the
/// loser. Ties only count as played.
pub fn compute_team_stats(weeks: &[Week], roster: &Roster) -> HashMap<String, TeamStats> {
    let mut stats: HashMap<String, TeamStats> = HashMap::new();
    let mut counted_matches = 0usize;

    for document in weeks.iter().flat_map(|week| week.matches()) {
        let (Some(home), Some(away)) = (
            document.home_team().and_then(ContentRef::id),
            document.away_team().and_then(ContentRef::id),
        ) else {
            continue;
        };
        let games = document.games();
        if games.is_empty() {
            continue;
        }
        counted_matches += 1;

        let game_count = u32::try_from(games.len()).unwrap_or(u32::MAX);
        stats.entry(home.to_string()).or_default().gp += game_count;
        stats.entry(away.to_string()).or_default().gp += game_count;

        for game in games.blocks() {
            let (winner, loser) = match decide_game(game, home, away, roster) {
                GameOutcome::HomeWin => (home, away),
                GameOutcome::AwayWin => (away, home),
                GameOutcome::Tie => continue,
            };
            if let Some(entry) = stats.get_mut(winner) {
                entry.w += 1;
                entry.pts += 1;
            }
            if let Some(entry) = stats.get_mut(loser) {
                entry.l += 1;
            }
        }
    }

    debug!(
        "Computed standings for {} teams from {} matches",
        stats.len(),
        counted_matches
    );
    stats
}

/// Teams ordered by points, highest first. Teams level on points keep
/// their original order.
pub fn sort_teams_by_points<'a>(
    teams: &'a [ContentItem],
    stats: &HashMap<String, TeamStats>,
) -> Vec<&'a ContentItem> {
    let points = |team: &ContentItem| stats.get(&team.id).map_or(0, |s| s.pts);
    let mut sorted: Vec<&ContentItem> = teams.iter().collect();
    sorted.sort_by(|a, b| points(b).cmp(&points(a)));
    sorted
}
