pub mod club;
pub mod error;
pub mod league;
pub mod profile;
pub mod roster;
pub mod squad;
pub mod transfers;

pub mod utils;

#[cfg(test)]
pub(crate) mod fixtures;

pub use club::{Player, PlayerId, Position, Team, TeamId, VALUED_POSITIONS};
pub use error::{DataIntegrityError, LeagueError, ProfileError};
pub use league::League;
pub use profile::{LeagueProfile, LeagueProfiler, PositionalProfile, SlotSummary, TeamProfile};
pub use roster::{LeagueBuilder, RosterEntry, RosterRecord, ValuationRecord};
pub use squad::{LineupAssignment, LineupConfig, SlotKind, Starter, StarterSelector};
pub use transfers::{
    BundleShape, CandidateTrade, Matching, MatchingSolver, Rejection, RelaxationConfig,
    RelaxationLadder, RelaxationStage, RelaxationTier, RiskFlag, TradeEdge, TradeGenerator,
    TradeGraph, TradeMarket, TradeOutcome, TradeSettings, TradeSide, MAX_MATCHING_NODES,
};
pub use utils::*;
