use crate::club::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Starting lineup shape: fixed slots per position plus flexible slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupConfig {
    pub starters: BTreeMap<Position, usize>,
    pub flex_positions: Vec<Position>,
    pub flex_slots: usize,
}

impl Default for LineupConfig {
    fn default() -> Self {
        LineupConfig {
            starters: BTreeMap::from([
                (Position::Quarterback, 1),
                (Position::RunningBack, 2),
                (Position::WideReceiver, 2),
                (Position::TightEnd, 1),
            ]),
            flex_positions: vec![
                Position::RunningBack,
                Position::WideReceiver,
                Position::TightEnd,
            ],
            flex_slots: 1,
        }
    }
}

impl LineupConfig {
    pub fn required(&self, position: Position) -> usize {
        self.starters.get(&position).copied().unwrap_or(0)
    }

    pub fn is_flex_eligible(&self, position: Position) -> bool {
        self.flex_slots > 0 && self.flex_positions.contains(&position)
    }

    /// Valued positions with at least one fixed slot, in position order.
    pub fn mandatory_positions(&self) -> impl Iterator<Item = (Position, usize)> + '_ {
        self.starters
            .iter()
            .filter(|(position, count)| position.is_valued() && **count > 0)
            .map(|(position, count)| (*position, *count))
    }

    pub fn total_slots(&self) -> usize {
        self.mandatory_positions().map(|(_, count)| count).sum::<usize>() + self.flex_slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_redraft_lineup() {
        let lineup = LineupConfig::default();

        assert_eq!(lineup.required(Position::Quarterback), 1);
        assert_eq!(lineup.required(Position::RunningBack), 2);
        assert_eq!(lineup.required(Position::Kicker), 0);
        assert!(lineup.is_flex_eligible(Position::TightEnd));
        assert!(!lineup.is_flex_eligible(Position::Quarterback));
        assert_eq!(lineup.total_slots(), 7);
    }

    #[test]
    fn no_flex_slots_means_nothing_is_flex_eligible() {
        let lineup = LineupConfig {
            flex_slots: 0,
            ..LineupConfig::default()
        };

        assert!(!lineup.is_flex_eligible(Position::RunningBack));
        assert_eq!(lineup.total_slots(), 6);
    }
}
