pub mod content;
pub mod lenient;
pub mod stats;

pub use content::{
    Block, BlockList, ContentItem, ContentRef, Document, GameDocument, GameProperties,
    MatchDocument, MatchProperties, Player, PlayerProperties, Route, ScoreDocument,
    ScoreProperties, StartItem, Week, WeekProperties, first_ref, first_ref_id,
};
pub use stats::{GameOutcome, MatchDetail, MatchResult, PlayerSummary, PlayerTally, TeamStats};
