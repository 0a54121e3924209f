//! League content client library
//!
//! This library fetches a league site's published content from a headless
//! CMS delivery API and derives standings, player averages and match results
//! from it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use league_store::config::Config;
//! use league_store::data_fetcher::{ApiClient, LeagueStore};
//! use league_store::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let api = ApiClient::new(&config)?;
//!
//!     // Fetch the snapshot once, then query it
//!     let mut store = LeagueStore::with_content_take(config.content_take);
//!     store.fetch_content(&api).await;
//!
//!     for (team, stats) in store.standings() {
//!         println!("{} {} pts", team.name.as_deref().unwrap_or(&team.id), stats.pts);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{ApiClient, ContentSource};
pub use data_fetcher::models::{ContentItem, MatchResult, PlayerSummary, TeamStats};
pub use data_fetcher::processors::format_date;
pub use data_fetcher::store::LeagueStore;
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
