use super::roster::Roster;
use crate::data_fetcher::models::{GameDocument, GameOutcome, MatchDocument};

/// Sum of the scores in a game posted by players of the given team.
pub fn team_total(game: &GameDocument, team_id: &str, roster: &Roster) -> f64 {
    game.scores()
        .filter(|score| {
            score
                .player_id()
                .and_then(|id| roster.team_of(id))
                .is_some_and(|team| team == team_id)
        })
        .fold(0.0, |total, score| total + score.score())
}

/// Decides a single game. Each side's total is the sum of the scores of its
/// rostered players; the strictly greater total wins, equal totals tie.
/// A block without content is a 0-0 tie.
pub fn decide_game(
    game: Option<&GameDocument>,
    home_id: &str,
    away_id: &str,
    roster: &Roster,
) -> GameOutcome {
    let mut home_total = 0.0;
    let mut away_total = 0.0;

    for score in game.into_iter().flat_map(|game| game.scores()) {
        match score.player_id().and_then(|id| roster.team_of(id)) {
            Some(team) if team == home_id => home_total += score.score(),
            Some(team) if team == away_id => away_total += score.score(),
            _ => {}
        }
    }

    if home_total > away_total {
        GameOutcome::HomeWin
    } else if away_total > home_total {
        GameOutcome::AwayWin
    } else {
        GameOutcome::Tie
    }
}

/// Games won by (home, away) over every game block of the match.
pub fn count_game_wins(
    document: &MatchDocument,
    home_id: &str,
    away_id: &str,
    roster: &Roster,
) -> (u32, u32) {
    document
        .games()
        .blocks()
        .map(|game| decide_game(game, home_id, away_id, roster))
        .fold((0, 0), |(home, away), outcome| match outcome {
            GameOutcome::HomeWin => (home + 1, away),
            GameOutcome::AwayWin => (home, away + 1),
            GameOutcome::Tie => (home, away),
        })
}
