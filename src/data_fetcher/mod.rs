pub mod api;
pub mod models;
pub mod processors;
pub mod store;

pub use api::{ApiClient, ContentSource};
pub use models::{ContentItem, MatchDetail, MatchResult, Player, PlayerSummary, TeamStats, Week};
pub use store::LeagueStore;
