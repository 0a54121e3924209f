pub mod game_outcome;
pub mod match_results;
pub mod player_stats;
pub mod roster;
pub mod standings;
pub mod time_formatting;

pub use game_outcome::{count_game_wins, decide_game, team_total};
pub use match_results::{matches_involving_team, recent_matches_for_player};
pub use player_stats::{player_scores_for_game, player_summary, player_tallies_in_match};
pub use roster::Roster;
pub use standings::{compute_team_stats, sort_teams_by_points};
pub use time_formatting::{format_date, parse_content_date};
