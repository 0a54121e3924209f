use super::lenient::{each_or_default, or_default};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference from one content node to another, as emitted by CMS content pickers.
/// Pickers always serialize as arrays; only the first entry is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContentRef {
    #[serde(default, deserialize_with = "or_default")]
    pub id: Option<String>,
    #[serde(rename = "contentType", default, deserialize_with = "or_default")]
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub name: Option<String>,
}

impl ContentRef {
    /// The referenced id, treating an empty id as no reference.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// First reference of a picker value that actually carries an id.
pub fn first_ref(refs: &[ContentRef]) -> Option<&ContentRef> {
    refs.first().filter(|r| r.id().is_some())
}

/// Id of the first reference of a picker value.
pub fn first_ref_id(refs: &[ContentRef]) -> Option<&str> {
    refs.first().and_then(ContentRef::id)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StartItem {
    #[serde(default, deserialize_with = "or_default")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Route {
    #[serde(default, deserialize_with = "or_default")]
    pub path: Option<String>,
    #[serde(rename = "startItem", default, deserialize_with = "or_default")]
    pub start_item: Option<StartItem>,
}

/// Generic top-level CMS node. Properties are kept as raw JSON and parsed
/// into typed views on demand with [`ContentItem::properties_as`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContentItem {
    #[serde(default, deserialize_with = "or_default")]
    pub id: String,
    #[serde(rename = "contentType", default, deserialize_with = "or_default")]
    pub content_type: String,
    #[serde(default, deserialize_with = "or_default")]
    pub name: Option<String>,
    #[serde(rename = "createDate", default, deserialize_with = "or_default")]
    pub create_date: Option<String>,
    #[serde(rename = "updateDate", default, deserialize_with = "or_default")]
    pub update_date: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub route: Option<Route>,
    #[serde(default)]
    pub properties: Value,
}

impl ContentItem {
    /// Case-insensitive content type check.
    pub fn is_type(&self, content_type: &str) -> bool {
        self.content_type.eq_ignore_ascii_case(content_type)
    }

    /// Id of the root node this item is published under.
    pub fn start_item_id(&self) -> Option<&str> {
        self.route
            .as_ref()
            .and_then(|route| route.start_item.as_ref())
            .and_then(|start| start.id.as_deref())
    }

    /// Raw property lookup.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Parses the property bag into a typed view, falling back to the default
    /// view when the bag does not have the expected shape.
    pub fn properties_as<P: DeserializeOwned + Default>(&self) -> P {
        serde_json::from_value(self.properties.clone()).unwrap_or_default()
    }
}

/// Block list editor value: `{ "items": [ { "content": ... } ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct BlockList<T> {
    #[serde(default, deserialize_with = "each_or_default")]
    pub items: Vec<Block<T>>,
}

impl<T> Default for BlockList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> BlockList<T> {
    /// Number of blocks, including blocks without content.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Block contents in order, one entry per block.
    pub fn blocks(&self) -> impl Iterator<Item = Option<&T>> {
        self.items.iter().map(|block| block.content.as_ref())
    }

    /// Contents of the blocks that have any.
    pub fn contents(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter_map(|block| block.content.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Block<T> {
    #[serde(default, deserialize_with = "or_default")]
    pub content: Option<T>,
}

impl<T> Default for Block<T> {
    fn default() -> Self {
        Self { content: None }
    }
}

/// Element content nested inside a block list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(bound(deserialize = "P: DeserializeOwned + Default"))]
pub struct Document<P> {
    #[serde(default, deserialize_with = "or_default")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub name: Option<String>,
    #[serde(rename = "contentType", default, deserialize_with = "or_default")]
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub properties: P,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreProperties {
    #[serde(default, deserialize_with = "or_default")]
    pub player: Vec<ContentRef>,
    #[serde(default, deserialize_with = "or_default")]
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameProperties {
    #[serde(rename = "playerScores", default, deserialize_with = "or_default")]
    pub player_scores: BlockList<ScoreDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchProperties {
    #[serde(default, deserialize_with = "or_default")]
    pub slug: Option<String>,
    #[serde(rename = "homeTeam", default, deserialize_with = "or_default")]
    pub home_team: Vec<ContentRef>,
    #[serde(rename = "awayTeam", default, deserialize_with = "or_default")]
    pub away_team: Vec<ContentRef>,
    #[serde(default, deserialize_with = "or_default")]
    pub games: BlockList<GameDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeekProperties {
    #[serde(default, deserialize_with = "or_default")]
    pub matches: BlockList<MatchDocument>,
    #[serde(default, deserialize_with = "or_default")]
    pub season: Vec<ContentRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerProperties {
    #[serde(default, deserialize_with = "or_default")]
    pub team: Vec<ContentRef>,
}

pub type ScoreDocument = Document<ScoreProperties>;
pub type GameDocument = Document<GameProperties>;
pub type MatchDocument = Document<MatchProperties>;

impl ScoreDocument {
    pub fn player_id(&self) -> Option<&str> {
        first_ref_id(&self.properties.player)
    }

    pub fn score(&self) -> f64 {
        self.properties.score
    }
}

impl GameDocument {
    pub fn scores(&self) -> impl Iterator<Item = &ScoreDocument> {
        self.properties.player_scores.contents()
    }
}

impl MatchDocument {
    /// Slug as published, `None` when missing or blank.
    pub fn slug(&self) -> Option<&str> {
        self.properties
            .slug
            .as_deref()
            .filter(|slug| !slug.is_empty())
    }

    /// Slug comparison ignoring surrounding whitespace and case.
    pub fn slug_matches(&self, slug: &str) -> bool {
        self.properties
            .slug
            .as_deref()
            .is_some_and(|own| own.trim().to_lowercase() == slug.trim().to_lowercase())
    }

    pub fn home_team(&self) -> Option<&ContentRef> {
        first_ref(&self.properties.home_team)
    }

    pub fn away_team(&self) -> Option<&ContentRef> {
        first_ref(&self.properties.away_team)
    }

    pub fn games(&self) -> &BlockList<GameDocument> {
        &self.properties.games
    }

    /// Both sides set and at least one game block present.
    pub fn is_playable(&self) -> bool {
        self.home_team().is_some() && self.away_team().is_some() && !self.games().is_empty()
    }

    /// Whether any score entry in the match belongs to the player.
    pub fn has_player(&self, player_id: &str) -> bool {
        self.games()
            .contents()
            .flat_map(|game| game.scores())
            .any(|score| score.player_id() == Some(player_id))
    }
}

/// Week node with its typed property view.
#[derive(Debug, Clone)]
pub struct Week {
    pub item: ContentItem,
    pub properties: WeekProperties,
}

impl Week {
    pub fn from_item(item: ContentItem) -> Self {
        let properties = item.properties_as();
        Self { item, properties }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn season_id(&self) -> Option<&str> {
        first_ref_id(&self.properties.season)
    }

    /// Whether the week belongs to the season, either by being published
    /// under it or by referencing it.
    pub fn belongs_to_season(&self, season_id: &str) -> bool {
        self.item.start_item_id() == Some(season_id) || self.season_id() == Some(season_id)
    }

    pub fn matches(&self) -> impl Iterator<Item = &MatchDocument> {
        self.properties.matches.contents()
    }
}

/// Player node with its typed property view.
#[derive(Debug, Clone)]
pub struct Player {
    pub item: ContentItem,
    pub properties: PlayerProperties,
}

impl Player {
    pub fn from_item(item: ContentItem) -> Self {
        let properties = item.properties_as();
        Self { item, properties }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn name(&self) -> Option<&str> {
        self.item.name.as_deref()
    }

    pub fn team_id(&self) -> Option<&str> {
        first_ref_id(&self.properties.team)
    }
}
