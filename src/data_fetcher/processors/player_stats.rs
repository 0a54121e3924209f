use super::roster::Roster;
use crate::data_fetcher::models::{
    GameDocument, MatchDocument, PlayerSummary, PlayerTally, ScoreDocument, Week,
};
use std::collections::HashMap;

/// Season summary for one player: every score entry of the player in every
/// match of every week counts as a game played.
pub fn player_summary(weeks: &[Week], player_id: &str) -> PlayerSummary {
    let tally = weeks
        .iter()
        .flat_map(|week| week.matches())
        .flat_map(|document| document.games().contents())
        .flat_map(|game| game.scores())
        .filter(|score| score.player_id() == Some(player_id))
        .fold(PlayerTally::default(), |mut tally, score| {
            tally.record(score.score());
            tally
        });

    PlayerSummary::from_tally(tally)
}

/// Per-player score totals for a single match. Entries without a player
/// reference are skipped.
pub fn player_tallies_in_match(document: &MatchDocument) -> HashMap<String, PlayerTally> {
    let mut tallies: HashMap<String, PlayerTally> = HashMap::new();

    for score in document.games().contents().flat_map(|game| game.scores()) {
        let Some(player_id) = score.player_id() else {
            continue;
        };
        tallies
            .entry(player_id.to_string())
            .or_default()
            .record(score.score());
    }

    tallies
}

/// Score entries in a game posted by players of the given team.
pub fn player_scores_for_game<'a>(
    game: &'a GameDocument,
    team_id: &str,
    roster: &Roster,
) -> Vec<&'a ScoreDocument> {
    game.scores()
        .filter(|score| {
            score
                .player_id()
                .and_then(|id| roster.team_of(id))
                .is_some_and(|team| team == team_id)
        })
        .collect()
}
