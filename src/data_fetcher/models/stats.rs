use super::content::{ContentRef, MatchDocument};
use serde::Serialize;
use std::collections::HashMap;

/// Standings line for one team. A point is awarded per game won.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub gp: u32,
    pub w: u32,
    pub l: u32,
    pub pts: u32,
}

impl TeamStats {
    /// Games that ended level.
    pub fn ties(&self) -> u32 {
        self.gp.saturating_sub(self.w + self.l)
    }
}

/// Running score total for a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlayerTally {
    pub total: f64,
    pub games: u32,
}

impl PlayerTally {
    pub fn record(&mut self, score: f64) {
        self.total += score;
        self.games += 1;
    }

    pub fn average(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total / f64::from(self.games)
        }
    }
}

/// Season-wide summary for a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub games_played: u32,
    pub average_score: f64,
}

impl PlayerSummary {
    pub fn from_tally(tally: PlayerTally) -> Self {
        Self {
            games_played: tally.games,
            average_score: tally.average(),
        }
    }

    /// Average with one decimal, or `"0"` for a player without games.
    pub fn formatted_average(&self) -> String {
        if self.games_played == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average_score)
        }
    }
}

/// Result of a single game between the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    HomeWin,
    AwayWin,
    Tie,
}

/// A match summarised as games won per side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub home: ContentRef,
    pub away: ContentRef,
    pub home_wins: u32,
    pub away_wins: u32,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl MatchResult {
    pub fn involves(&self, team_id: &str) -> bool {
        self.home.id() == Some(team_id) || self.away.id() == Some(team_id)
    }
}

/// A match looked up by slug together with per-player totals for it.
#[derive(Debug, Clone)]
pub struct MatchDetail<'a> {
    pub document: &'a MatchDocument,
    pub player_stats: HashMap<String, PlayerTally>,
}
