use crate::club::{Player, PlayerId, Position};
use crate::squad::LineupConfig;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Fixed,
    Flex,
}

#[derive(Debug, Clone, Copy)]
pub struct Starter<'p> {
    pub player: &'p Player,
    pub slot: SlotKind,
}

/// The value-maximizing starting lineup for one roster.
#[derive(Debug, Clone)]
pub struct LineupAssignment<'p> {
    starters: Vec<Starter<'p>>,
    open_slots: Vec<Position>,
}

pub struct StarterSelector;

impl StarterSelector {
    /// Fills each fixed slot with the highest-valued eligible player of that
    /// position, then the flex slots with the best remaining flex-eligible players.
    ///
    /// Sorting is stable, so equal values keep roster order.
    pub fn select<'p>(players: &[&'p Player], lineup: &LineupConfig) -> LineupAssignment<'p> {
        let mut starters: Vec<Starter<'p>> = Vec::with_capacity(lineup.total_slots());
        let mut open_slots = Vec::new();

        for (position, count) in lineup.mandatory_positions() {
            let eligible = Self::ranked(players.iter().copied().filter(|p| p.position == position));

            starters.extend(eligible.iter().take(count).map(|&player| Starter {
                player,
                slot: SlotKind::Fixed,
            }));

            if eligible.len() < count {
                open_slots.extend(std::iter::repeat_n(position, count - eligible.len()));
            }
        }

        let flex_pool = Self::ranked(players.iter().copied().filter(|p| {
            p.is_valued()
                && lineup.is_flex_eligible(p.position)
                && !starters.iter().any(|s| s.player.id == p.id)
        }));

        starters.extend(flex_pool.into_iter().take(lineup.flex_slots).map(|player| Starter {
            player,
            slot: SlotKind::Flex,
        }));

        LineupAssignment {
            starters,
            open_slots,
        }
    }

    fn ranked<'p>(players: impl Iterator<Item = &'p Player>) -> Vec<&'p Player> {
        let mut ranked: Vec<&Player> = players.collect();
        ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
        ranked
    }
}

impl<'p> LineupAssignment<'p> {
    pub fn starters(&self) -> &[Starter<'p>] {
        &self.starters
    }

    /// Fixed slots left empty for lack of eligible players.
    pub fn open_slots(&self) -> &[Position] {
        &self.open_slots
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.starters.iter().any(|s| &s.player.id == id)
    }

    pub fn starter_ids(&self) -> BTreeSet<&'p PlayerId> {
        self.starters.iter().map(|s| &s.player.id).collect()
    }

    /// Starter value in the position bucket, flex starters included under their own position.
    pub fn position_value(&self, position: Position) -> f64 {
        self.starters
            .iter()
            .filter(|s| s.player.position == position)
            .map(|s| s.player.value)
            .sum()
    }

    pub fn flex_value(&self) -> f64 {
        self.starters
            .iter()
            .filter(|s| s.slot == SlotKind::Flex)
            .map(|s| s.player.value)
            .sum()
    }

    pub fn total_value(&self) -> f64 {
        self.starters.iter().map(|s| s.player.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{player, team};

    #[test]
    fn fills_fixed_slots_then_flex_from_remaining() {
        let team = team(
            "t01",
            vec![
                player("qb1", "QB", 40.0),
                player("qb2", "QB", 35.0),
                player("rb1", "RB", 30.0),
                player("rb2", "RB", 25.0),
                player("rb3", "RB", 22.0),
                player("wr1", "WR", 28.0),
                player("wr2", "WR", 20.0),
                player("wr3", "WR", 21.0),
                player("te1", "TE", 15.0),
                player("k1", "K", 99.0),
            ],
        );

        let lineup = StarterSelector::select(&team.players(), &LineupConfig::default());

        let ids: Vec<&str> = lineup.starters().iter().map(|s| s.player.id.as_str()).collect();
        assert_eq!(ids, vec!["qb1", "rb1", "rb2", "wr1", "wr3", "te1", "rb3"]);
        assert_eq!(lineup.position_value(Position::RunningBack), 77.0);
        assert_eq!(lineup.flex_value(), 22.0);
        assert_eq!(lineup.total_value(), 40.0 + 55.0 + 49.0 + 15.0 + 22.0);
        assert!(!lineup.contains(&"qb2".into()));
        assert!(lineup.open_slots().is_empty());
    }

    #[test]
    fn starter_sum_matches_top_n_for_any_configuration() {
        let team = team(
            "t01",
            vec![
                player("qb1", "QB", 12.0),
                player("rb1", "RB", 9.0),
                player("rb2", "RB", 8.0),
                player("rb3", "RB", 7.0),
                player("rb4", "RB", 6.0),
                player("wr1", "WR", 5.0),
                player("te1", "TE", 4.0),
                player("te2", "TE", 3.0),
            ],
        );

        for (rb_slots, flex_slots) in [(1, 0), (2, 1), (3, 2), (4, 1)] {
            let mut lineup = LineupConfig::default();
            lineup.starters.insert(Position::RunningBack, rb_slots);
            lineup.flex_slots = flex_slots;

            let assignment = StarterSelector::select(&team.players(), &lineup);

            for (position, count) in lineup.mandatory_positions() {
                let mut values: Vec<f64> = team
                    .players
                    .iter()
                    .filter(|p| p.position == position)
                    .map(|p| p.value)
                    .collect();
                values.sort_by(|a, b| b.total_cmp(a));
                let expected: f64 = values.iter().take(count).sum();
                let fixed: f64 = assignment
                    .starters()
                    .iter()
                    .filter(|s| s.slot == SlotKind::Fixed && s.player.position == position)
                    .map(|s| s.player.value)
                    .sum();

                assert_eq!(fixed, expected, "{position} with {rb_slots} RB slots");
            }

            let flex_count = assignment
                .starters()
                .iter()
                .filter(|s| s.slot == SlotKind::Flex)
                .count();
            assert!(flex_count <= flex_slots);
        }
    }

    #[test]
    fn missing_players_leave_open_slots_worth_zero() {
        let team = team(
            "t01",
            vec![player("qb1", "QB", 10.0), player("rb1", "RB", 8.0)],
        );

        let lineup = StarterSelector::select(&team.players(), &LineupConfig::default());

        assert_eq!(lineup.position_value(Position::WideReceiver), 0.0);
        assert_eq!(
            lineup.open_slots(),
            &[
                Position::RunningBack,
                Position::WideReceiver,
                Position::WideReceiver,
                Position::TightEnd
            ]
        );
    }

    #[test]
    fn equal_values_keep_roster_order() {
        let team = team(
            "t01",
            vec![
                player("wr_b", "WR", 10.0),
                player("wr_a", "WR", 10.0),
                player("wr_c", "WR", 10.0),
            ],
        );
        let mut lineup = LineupConfig::default();
        lineup.flex_slots = 0;

        let first = StarterSelector::select(&team.players(), &lineup);
        let second = StarterSelector::select(&team.players(), &lineup);

        let ids: Vec<&str> = first.starters().iter().map(|s| s.player.id.as_str()).collect();
        assert_eq!(ids, vec!["wr_b", "wr_a"]);
        assert_eq!(first.starter_ids(), second.starter_ids());
    }
}
