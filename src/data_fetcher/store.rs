//! In-memory league snapshot and the views derived from it.

use crate::constants::{DEFAULT_CONTENT_TAKE, RECENT_MATCHES_LIMIT, content_types};
use crate::data_fetcher::api::{ContentSource, build_content_endpoint};
use crate::data_fetcher::models::{
    ContentItem, GameDocument, MatchDetail, MatchDocument, MatchResult, Player, PlayerSummary,
    PlayerTally, ScoreDocument, TeamStats, Week,
};
use crate::data_fetcher::processors::{
    Roster, compute_team_stats, matches_involving_team, player_scores_for_game, player_summary,
    player_tallies_in_match, recent_matches_for_player, sort_teams_by_points, team_total,
};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Holds the most recently fetched content and answers league queries.
///
/// The snapshot never changes between fetches; a fetch replaces it as a whole.
#[derive(Debug, Clone)]
pub struct LeagueStore {
    content_take: u32,
    items: Vec<ContentItem>,
    teams: Vec<ContentItem>,
    team_lookup: HashMap<String, usize>,
    roster: Roster,
    seasons: Vec<ContentItem>,
    weeks: Vec<Week>,
    matches: Vec<MatchDocument>,
    team_stats: HashMap<String, TeamStats>,
}

impl Default for LeagueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LeagueStore {
    pub fn new() -> Self {
        Self::with_content_take(DEFAULT_CONTENT_TAKE)
    }

    /// Store that requests `take` items per fetch.
    pub fn with_content_take(content_take: u32) -> Self {
        Self {
            content_take,
            items: Vec::new(),
            teams: Vec::new(),
            team_lookup: HashMap::new(),
            roster: Roster::default(),
            seasons: Vec::new(),
            weeks: Vec::new(),
            matches: Vec::new(),
            team_stats: HashMap::new(),
        }
    }

    /// Builds a store directly from already parsed items.
    pub fn from_items(items: Vec<ContentItem>) -> Self {
        let mut store = Self::new();
        store.replace_items(items);
        store
    }

    /// Fetches the content listing and replaces the snapshot with it.
    /// A failed request leaves an empty snapshot.
    #[instrument(skip(self, source))]
    pub async fn fetch_content<S: ContentSource>(&mut self, source: &S) {
        let endpoint = build_content_endpoint(self.content_take);
        let data = source.get(&endpoint).await;
        if data.is_none() {
            warn!("No content received from {endpoint}, clearing league data");
        }

        let items = data.as_ref().map(parse_items).unwrap_or_default();
        self.replace_items(items);

        info!(
            "Loaded {} items: {} teams, {} players, {} seasons, {} weeks, {} matches",
            self.items.len(),
            self.teams.len(),
            self.roster.len(),
            self.seasons.len(),
            self.weeks.len(),
            self.matches.len()
        );
    }

    /// Replaces the snapshot and rebuilds every index from `items`.
    pub fn replace_items(&mut self, items: Vec<ContentItem>) {
        let teams: Vec<ContentItem> = items
            .iter()
            .filter(|item| item.is_type(content_types::TEAM))
            .cloned()
            .collect();
        let mut team_lookup = HashMap::with_capacity(teams.len());
        for (position, team) in teams.iter().enumerate() {
            team_lookup.insert(team.id.clone(), position);
        }

        let players_folder_id = items
            .iter()
            .find(|item| item.is_type(content_types::PLAYERS_FOLDER))
            .map(|folder| folder.id.as_str());
        let players: Vec<Player> = items
            .iter()
            .filter(|item| {
                item.is_type(content_types::PLAYER) && item.start_item_id() == players_folder_id
            })
            .cloned()
            .map(Player::from_item)
            .collect();
        debug!(
            "Players folder {:?} holds {} players",
            players_folder_id,
            players.len()
        );

        let seasons: Vec<ContentItem> = items
            .iter()
            .filter(|item| item.is_type(content_types::SEASON))
            .cloned()
            .collect();
        let weeks: Vec<Week> = items
            .iter()
            .filter(|item| item.is_type(content_types::WEEK))
            .cloned()
            .map(Week::from_item)
            .collect();
        let matches: Vec<MatchDocument> = weeks
            .iter()
            .flat_map(|week| week.matches())
            .filter(|document| document.slug().is_some())
            .cloned()
            .collect();

        self.roster = Roster::new(players);
        self.team_stats = compute_team_stats(&weeks, &self.roster);
        self.items = items;
        self.teams = teams;
        self.team_lookup = team_lookup;
        self.seasons = seasons;
        self.weeks = weeks;
        self.matches = matches;
    }

    pub fn content_take(&self) -> u32 {
        self.content_take
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn all_players(&self) -> &[Player] {
        self.roster.players()
    }

    pub fn all_teams(&self) -> &[ContentItem] {
        &self.teams
    }

    pub fn all_seasons(&self) -> &[ContentItem] {
        &self.seasons
    }

    pub fn all_weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Match documents that carry a slug, in week order.
    pub fn all_matches(&self) -> &[MatchDocument] {
        &self.matches
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn get_player(&self, id: &str) -> Option<&Player> {
        self.roster.get(id)
    }

    pub fn get_team(&self, id: &str) -> Option<&ContentItem> {
        self.team_lookup.get(id).map(|&position| &self.teams[position])
    }

    /// Looks up a match by slug, ignoring surrounding whitespace and case,
    /// and totals each player's scores in it.
    pub fn match_by_slug(&self, slug: &str) -> Option<MatchDetail<'_>> {
        let document = self
            .matches
            .iter()
            .find(|document| document.slug_matches(slug))?;
        Some(MatchDetail {
            document,
            player_stats: player_tallies_in_match(document),
        })
    }

    /// Weeks published under the season or referencing it.
    pub fn weeks_by_season(&self, season_id: &str) -> Vec<&Week> {
        self.weeks
            .iter()
            .filter(|week| week.belongs_to_season(season_id))
            .collect()
    }

    pub fn player_stats(&self, player_id: &str) -> PlayerSummary {
        player_summary(&self.weeks, player_id)
    }

    pub fn recent_matches_for_player(&self, player_id: &str) -> Vec<MatchResult> {
        recent_matches_for_player(&self.weeks, &self.roster, player_id, RECENT_MATCHES_LIMIT)
    }

    /// Standings line for a team, all zeros when it has not played.
    pub fn team_stats(&self, team_id: &str) -> TeamStats {
        self.team_stats.get(team_id).copied().unwrap_or_default()
    }

    pub fn matches_involving_team(&self, team_id: &str) -> Vec<MatchResult> {
        matches_involving_team(&self.weeks, &self.roster, team_id)
    }

    pub fn player_scores_for_game<'a>(
        &self,
        game: &'a GameDocument,
        team_id: &str,
    ) -> Vec<&'a ScoreDocument> {
        player_scores_for_game(game, team_id, &self.roster)
    }

    pub fn game_score(&self, game: &GameDocument, team_id: &str) -> f64 {
        team_total(game, team_id, &self.roster)
    }

    /// Standings for every team that has played, keyed by team id.
    pub fn computed_stats(&self) -> &HashMap<String, TeamStats> {
        &self.team_stats
    }

    pub fn sorted_teams_by_points(&self) -> Vec<&ContentItem> {
        sort_teams_by_points(&self.teams, &self.team_stats)
    }

    /// Teams in standings order paired with their stats.
    pub fn standings(&self) -> Vec<(&ContentItem, TeamStats)> {
        self.sorted_teams_by_points()
            .into_iter()
            .map(|team| (team, self.team_stats(&team.id)))
            .collect()
    }

    pub fn player_averages_in_match(&self, document: &MatchDocument) -> HashMap<String, PlayerTally> {
        player_tallies_in_match(document)
    }
}

/// Extracts the content items from a delivery API listing. Null entries are
/// dropped and entries that are not objects are skipped with a warning.
pub fn parse_items(data: &Value) -> Vec<ContentItem> {
    let Some(raw_items) = data.get("items").and_then(Value::as_array) else {
        warn!("Content listing has no items array");
        return Vec::new();
    };

    raw_items
        .iter()
        .filter(|raw| !raw.is_null())
        .filter_map(|raw| match serde_json::from_value::<ContentItem>(raw.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping unreadable content item: {e}");
                None
            }
        })
        .collect()
}
