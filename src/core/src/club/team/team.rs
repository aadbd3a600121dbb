use crate::club::{Player, PlayerId, Position};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        TeamId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        TeamId::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Roster order as delivered by the roster source. Lineup ties fall back to it.
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: TeamId, name: String, players: Vec<Player>) -> Self {
        Team { id, name, players }
    }

    pub fn players(&self) -> Vec<&Player> {
        self.players.iter().collect()
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn count_at(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }

    /// Roster as it would look after sending `sent` away and receiving `received`.
    /// Kept players retain their order; incoming players are appended.
    pub fn roster_after<'p>(
        &'p self,
        sent: &[&Player],
        received: &[&'p Player],
    ) -> Vec<&'p Player> {
        self.players
            .iter()
            .filter(|p| !sent.iter().any(|s| s.id == p.id))
            .chain(received.iter().copied())
            .collect()
    }
}
