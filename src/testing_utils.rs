use crate::data_fetcher::models::{ContentItem, Player};
use crate::data_fetcher::processors::Roster;
use crate::data_fetcher::store::LeagueStore;
use serde_json::{Value, json};

/// Id of the players folder every fixture publishes its players under.
pub const PLAYERS_FOLDER_ID: &str = "players-folder";

/// Builds CMS delivery API content the way the league site publishes it.
#[derive(Debug, Clone)]
pub struct ContentFixture {
    items: Vec<Value>,
}

impl Default for ContentFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentFixture {
    /// Fixture holding only the players folder.
    pub fn new() -> Self {
        Self {
            items: vec![json!({
                "id": PLAYERS_FOLDER_ID,
                "contentType": "playersFolder",
                "name": "Players",
                "route": {"path": "/players/", "startItem": {"id": PLAYERS_FOLDER_ID, "path": "players"}},
                "properties": {}
            })],
        }
    }

    pub fn team(mut self, id: &str, name: &str) -> Self {
        self.items.push(json!({
            "id": id,
            "contentType": "team",
            "name": name,
            "route": {"path": format!("/teams/{id}/")},
            "properties": {}
        }));
        self
    }

    /// Player published under the players folder and assigned to `team`.
    pub fn player(mut self, id: &str, team: &str) -> Self {
        self.items.push(json!({
            "id": id,
            "contentType": "player",
            "name": format!("Player {id}"),
            "route": {
                "path": format!("/players/{id}/"),
                "startItem": {"id": PLAYERS_FOLDER_ID, "path": "players"}
            },
            "properties": {"team": [{"id": team, "contentType": "team"}]}
        }));
        self
    }

    pub fn season(mut self, id: &str, name: &str) -> Self {
        self.items.push(json!({
            "id": id,
            "contentType": "season",
            "name": name,
            "route": {"path": format!("/{name}/"), "startItem": {"id": id, "path": name}},
            "properties": {}
        }));
        self
    }

    /// Week holding the given match blocks, optionally published under a season.
    pub fn week(mut self, id: &str, season: Option<&str>, matches: Vec<Value>) -> Self {
        let route = match season {
            Some(season) => json!({"path": format!("/{season}/{id}/"), "startItem": {"id": season}}),
            None => json!({"path": format!("/{id}/")}),
        };
        self.items.push(json!({
            "id": id,
            "contentType": "week",
            "name": id,
            "route": route,
            "properties": {"matches": {"items": matches}}
        }));
        self
    }

    /// Appends a raw item as is.
    pub fn push_item(&mut self, item: Value) {
        self.items.push(item);
    }

    /// Match block between two teams.
    pub fn match_block(slug: &str, home: &str, away: &str, games: Vec<Value>) -> Value {
        json!({
            "content": {
                "contentType": "match",
                "properties": {
                    "slug": slug,
                    "homeTeam": [{"id": home, "contentType": "team"}],
                    "awayTeam": [{"id": away, "contentType": "team"}],
                    "games": {"items": games}
                }
            }
        })
    }

    /// Game block wrapping the given score blocks.
    pub fn game_block(scores: Value) -> Value {
        json!({"content": Self::game_json(scores)})
    }

    /// Game element content, without the surrounding block.
    pub fn game_json(scores: Value) -> Value {
        json!({
            "contentType": "game",
            "properties": {"playerScores": {"items": scores}}
        })
    }

    pub fn items(&self) -> Vec<ContentItem> {
        self.items
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
            .collect()
    }

    /// Full delivery API listing body.
    pub fn response(&self) -> Value {
        json!({"total": self.items.len(), "items": self.items})
    }

    /// Roster of every player in the fixture, folder or not.
    pub fn roster(&self) -> Roster {
        Roster::new(
            self.items()
                .into_iter()
                .filter(|item| item.is_type("player"))
                .map(Player::from_item)
                .collect(),
        )
    }

    pub fn store(&self) -> LeagueStore {
        LeagueStore::from_items(self.items())
    }
}

/// Score block for a player.
pub fn score(player_id: &str, value: f64) -> Value {
    json!({
        "content": {
            "contentType": "playerScore",
            "properties": {"player": [{"id": player_id, "contentType": "player"}], "score": value}
        }
    })
}
