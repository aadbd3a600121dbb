use serde::{Deserialize, Serialize};

/// One team as delivered by the roster source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRecord {
    pub team_id: String,
    pub display_name: String,
    pub players: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: String,
    #[serde(default)]
    pub position: Option<String>,
    /// Only needed for the name + position fallback join.
    #[serde(default)]
    pub name: Option<String>,
}

impl RosterEntry {
    pub fn new(player_id: impl Into<String>) -> Self {
        RosterEntry {
            player_id: player_id.into(),
            position: None,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>, position: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.position = Some(position.into());
        self
    }
}

/// One market valuation row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRecord {
    pub player_id: Option<String>,
    pub name: String,
    pub position: String,
    pub value: f64,
}
