use crate::club::{Position, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Stable cross-source player key (the league platform's player id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        PlayerId::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub value: f64,
    pub team_id: TeamId,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: String,
        position: Position,
        value: f64,
        team_id: TeamId,
    ) -> Self {
        Player {
            id,
            name,
            position,
            value,
            team_id,
        }
    }

    /// Eligible for lineup math and for trade bundles.
    pub fn is_valued(&self) -> bool {
        self.position.is_valued()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}
