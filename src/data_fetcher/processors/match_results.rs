use super::game_outcome::count_game_wins;
use super::roster::Roster;
use crate::data_fetcher::models::{ContentRef, MatchDocument, MatchResult, Week};

fn summarise(
    document: &MatchDocument,
    home: &ContentRef,
    away: &ContentRef,
    roster: &Roster,
) -> MatchResult {
    let (home_wins, away_wins) = match (home.id(), away.id()) {
        (Some(home_id), Some(away_id)) => count_game_wins(document, home_id, away_id, roster),
        _ => (0, 0),
    };

    MatchResult {
        home: home.clone(),
        away: away.clone(),
        home_wins,
        away_wins,
        name: document.name.clone(),
        slug: document.slug().map(str::to_string),
    }
}

/// The first `limit` playable matches, in week order, in which the player
/// has a score entry.
pub fn recent_matches_for_player(
    weeks: &[Week],
    roster: &Roster,
    player_id: &str,
    limit: usize,
) -> Vec<MatchResult> {
    weeks
        .iter()
        .flat_map(|week| week.matches())
        .filter(|document| document.is_playable() && document.has_player(player_id))
        .filter_map(|document| {
            let home = document.home_team()?;
            let away = document.away_team()?;
            Some(summarise(document, home, away, roster))
        })
        .take(limit)
        .collect()
}

/// Every match with both sides set where the team plays home or away.
/// Matches without games are included with no wins on either side.
pub fn matches_involving_team(weeks: &[Week], roster: &Roster, team_id: &str) -> Vec<MatchResult> {
    weeks
        .iter()
        .flat_map(|week| week.matches())
        .filter_map(|document| {
            let home = document.home_team()?;
            let away = document.away_team()?;
            if home.id() != Some(team_id) && away.id() != Some(team_id) {
                return None;
            }
            Some(summarise(document, home, away, roster))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{ContentFixture, score};
    use serde_json::json;

    fn fixture() -> ContentFixture {
        let mut fixture = ContentFixture::new()
            .team("lions", "Lions")
            .team("bears", "Bears")
            .team("hawks", "Hawks")
            .player("l1", "lions")
            .player("b1", "bears")
            .player("h1", "hawks");

        for week in 1..=4 {
            fixture = fixture.week(
                &format!("w{week}"),
                None,
                vec![ContentFixture::match_block(
                    &format!("lions-bears-{week}"),
                    "lions",
                    "bears",
                    vec![
                        ContentFixture::game_block(json!([
                            score("l1", 100.0 + f64::from(week)),
                            score("b1", 100.0)
                        ])),
                        ContentFixture::game_block(json!([score("l1", 90.0), score("b1", 100.0)])),
                        ContentFixture::game_block(json!([score("l1", 150.0)])),
                    ],
                )],
            );
        }

        fixture.week(
            "w5",
            None,
            vec![
                ContentFixture::match_block("bears-hawks", "bears", "hawks", vec![]),
                ContentFixture::match_block(
                    "hawks-lions",
                    "hawks",
                    "lions",
                    vec![ContentFixture::game_block(json!([score("h1", 10.0)]))],
                ),
            ],
        )
    }

    #[test]
    fn test_recent_matches_limited_and_ordered() {
        let store = fixture().store();
        let recent = recent_matches_for_player(store.all_weeks(), store.roster(), "l1", 3);
        let slugs: Vec<_> = recent.iter().filter_map(|m| m.slug.as_deref()).collect();
        assert_eq!(slugs, vec!["lions-bears-1", "lions-bears-2", "lions-bears-3"]);
        assert_eq!(recent[0].home_wins, 2);
        assert_eq!(recent[0].away_wins, 1);
        assert_eq!(recent[0].home.id(), Some("lions"));
    }

    #[test]
    fn test_recent_matches_require_participation() {
        let store = fixture().store();
        let recent = recent_matches_for_player(store.all_weeks(), store.roster(), "h1", 3);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].slug.as_deref(), Some("hawks-lions"));
        assert_eq!((recent[0].home_wins, recent[0].away_wins), (1, 0));
    }

    #[test]
    fn test_matches_involving_team_includes_gameless_matches() {
        let store = fixture().store();
        let bears = matches_involving_team(store.all_weeks(), store.roster(), "bears");
        assert_eq!(bears.len(), 5);
        let last = bears.last().unwrap();
        assert_eq!(last.slug.as_deref(), Some("bears-hawks"));
        assert_eq!((last.home_wins, last.away_wins), (0, 0));
        assert!(bears.iter().all(|m| m.involves("bears")));

        assert!(matches_involving_team(store.all_weeks(), store.roster(), "eagles").is_empty());
    }
}
