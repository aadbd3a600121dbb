use crate::club::{Player, PlayerId, Position, TeamId};
use crate::transfers::BundleShape;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

/// One team's half of a candidate trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeSide {
    pub team_id: TeamId,
    pub sends: Vec<Player>,
    pub value_sent: f64,
    /// Post-trade starter value minus pre-trade starter value.
    pub starter_gain: f64,
    /// The starter set differs after the trade.
    pub lineup_changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskFlag {
    /// The side trades away its last rostered player at this position.
    ZeroDepth { team_id: TeamId, position: Position },
}

impl Display for RiskFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RiskFlag::ZeroDepth { team_id, position } => {
                write!(f, "{} left with no {}", team_id, position)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    FairnessExceeded { fairness_pct: f64, threshold_pct: f64 },
    InsufficientGain { team_id: TeamId, gain: f64, minimum: f64 },
    LineupUnchanged { team_id: TeamId },
    RosterNotViable { team_id: TeamId, position: Position },
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Rejection::FairnessExceeded {
                fairness_pct,
                threshold_pct,
            } => write!(f, "fairness {:.1}% over {:.1}%", fairness_pct, threshold_pct),
            Rejection::InsufficientGain {
                team_id,
                gain,
                minimum,
            } => write!(f, "{} gains {:.1}, below {:.1}", team_id, gain, minimum),
            Rejection::LineupUnchanged { team_id } => {
                write!(f, "{} starting lineup unchanged", team_id)
            }
            Rejection::RosterNotViable { team_id, position } => {
                write!(f, "{} short at {}", team_id, position)
            }
        }
    }
}

/// A scored bundle between two teams. Side A always holds the lower team id.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateTrade {
    pub shape: BundleShape,
    pub side_a: TradeSide,
    pub side_b: TradeSide,
    pub fairness_pct: f64,
    pub risk_flags: Vec<RiskFlag>,
    pub score: f64,
    /// Empty for accepted bundles.
    pub rejections: Vec<Rejection>,
}

impl CandidateTrade {
    pub fn is_accepted(&self) -> bool {
        self.rejections.is_empty()
    }

    pub fn involves(&self, team_id: &TeamId) -> bool {
        &self.side_a.team_id == team_id || &self.side_b.team_id == team_id
    }

    pub fn side(&self, team_id: &TeamId) -> Option<&TradeSide> {
        if &self.side_a.team_id == team_id {
            Some(&self.side_a)
        } else if &self.side_b.team_id == team_id {
            Some(&self.side_b)
        } else {
            None
        }
    }

    /// The other side of the trade, the one `team_id` receives players from.
    pub fn counterpart(&self, team_id: &TeamId) -> Option<&TradeSide> {
        if &self.side_a.team_id == team_id {
            Some(&self.side_b)
        } else if &self.side_b.team_id == team_id {
            Some(&self.side_a)
        } else {
            None
        }
    }

    fn player_ids(&self) -> Vec<&PlayerId> {
        self.side_a
            .sends
            .iter()
            .chain(&self.side_b.sends)
            .map(|p| &p.id)
            .collect()
    }

    /// Total order used for every "best bundle" decision: higher score first,
    /// then lower imbalance, then team ids, then player ids.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.fairness_pct.total_cmp(&other.fairness_pct))
            .then_with(|| self.side_a.team_id.cmp(&other.side_a.team_id))
            .then_with(|| self.side_b.team_id.cmp(&other.side_b.team_id))
            .then_with(|| self.player_ids().cmp(&other.player_ids()))
    }
}
