use crate::club::{PlayerId, Position, TeamId};
use thiserror::Error;

/// Missing or invalid roster/valuation rows. Aborts the run before any matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataIntegrityError {
    #[error("valuation source returned no usable rows")]
    EmptyValuations,

    #[error("roster source returned no teams")]
    EmptyRosters,

    #[error("roster row {index} has no team identifier")]
    MissingTeamId { index: usize },

    #[error("team {0} appears more than once in the roster source")]
    DuplicateTeam(TeamId),

    #[error("team {team} has a roster entry without a player identifier")]
    MissingPlayerId { team: TeamId },

    #[error("player {player} is rostered by both {first} and {second}")]
    DuplicatePlayer {
        player: PlayerId,
        first: TeamId,
        second: TeamId,
    },

    #[error("valuation row for '{key}' has invalid value {value}")]
    InvalidValue { key: String, value: f64 },

    #[error("expected {expected} teams, roster source returned {actual}")]
    TeamCount { expected: usize, actual: usize },

    #[error("{actual} teams exceed the supported maximum of {max}")]
    TooManyTeams { actual: usize, max: usize },
}

/// A team cannot fill a mandatory lineup position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("team {team} has no eligible {position} and the flex slot cannot cover it")]
    MissingMandatoryPosition { team: TeamId, position: Position },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeagueError {
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}
