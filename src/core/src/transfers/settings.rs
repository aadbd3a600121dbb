use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// How many players each side sends. Side A is always the team with the lower id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BundleShape {
    #[serde(rename = "1-for-1", alias = "one-for-one")]
    OneForOne,
    #[serde(rename = "2-for-2", alias = "two-for-two")]
    TwoForTwo,
    #[serde(rename = "2-for-1", alias = "two-for-one")]
    TwoForOne,
    #[serde(rename = "1-for-2", alias = "one-for-two")]
    OneForTwo,
}

impl BundleShape {
    /// (players sent by A, players sent by B)
    pub fn sizes(&self) -> (usize, usize) {
        match self {
            BundleShape::OneForOne => (1, 1),
            BundleShape::TwoForTwo => (2, 2),
            BundleShape::TwoForOne => (2, 1),
            BundleShape::OneForTwo => (1, 2),
        }
    }

    pub fn is_uneven(&self) -> bool {
        let (a, b) = self.sizes();
        a != b
    }
}

impl Display for BundleShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (a, b) = self.sizes();
        write!(f, "{}-for-{}", a, b)
    }
}

/// Acceptance and scoring parameters for one generation pass.
///
/// Immutable per attempt: the relaxation ladder derives new values instead of mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeSettings {
    /// Maximum value imbalance in percent, inclusive.
    pub fairness_threshold_pct: f64,
    /// Minimum starter-value gain each side must see, inclusive.
    pub min_starter_gain: f64,
    /// Bench players drawn per side (K).
    pub bench_pool_size: usize,
    /// Bundle shapes in priority order. Later shapes are only tried when
    /// earlier ones accept nothing.
    pub bundle_shapes: Vec<BundleShape>,
    /// Score penalty per percentage point of imbalance.
    pub fairness_weight: f64,
    /// Score penalty per risk flag.
    pub depth_risk_penalty: f64,
    /// Reject bundles that leave a team short of its fixed lineup slots.
    pub require_roster_viability: bool,
    /// Accepted runner-up bundles kept per pair for alternates.
    pub alternates_per_pair: usize,
}

impl Default for TradeSettings {
    fn default() -> Self {
        TradeSettings {
            fairness_threshold_pct: 12.0,
            min_starter_gain: 3.0,
            bench_pool_size: 3,
            bundle_shapes: vec![BundleShape::TwoForTwo, BundleShape::OneForOne],
            fairness_weight: 0.1,
            depth_risk_penalty: 10.0,
            require_roster_viability: true,
            alternates_per_pair: 3,
        }
    }
}

impl TradeSettings {
    pub fn with_fairness_threshold(mut self, pct: f64) -> Self {
        self.fairness_threshold_pct = pct;
        self
    }

    pub fn with_min_starter_gain(mut self, gain: f64) -> Self {
        self.min_starter_gain = gain;
        self
    }

    /// Appends shapes not already present, keeping existing priority.
    pub fn with_extra_shapes(mut self, shapes: &[BundleShape]) -> Self {
        for shape in shapes {
            if !self.bundle_shapes.contains(shape) {
                self.bundle_shapes.push(*shape);
            }
        }
        self
    }
}

/// Step sizes and limits of the relaxation ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaxationConfig {
    pub fairness_step_pct: f64,
    pub fairness_ceiling_pct: f64,
    pub uneven_shapes: Vec<BundleShape>,
    pub gain_step: f64,
    pub gain_floor: f64,
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        RelaxationConfig {
            fairness_step_pct: 3.0,
            fairness_ceiling_pct: 20.0,
            uneven_shapes: vec![BundleShape::TwoForOne, BundleShape::OneForTwo],
            gain_step: 1.0,
            gain_floor: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_shapes_are_appended_once() {
        let settings = TradeSettings::default()
            .with_extra_shapes(&[BundleShape::TwoForOne, BundleShape::OneForOne]);

        assert_eq!(
            settings.bundle_shapes,
            vec![
                BundleShape::TwoForTwo,
                BundleShape::OneForOne,
                BundleShape::TwoForOne
            ]
        );
    }

    #[test]
    fn shape_labels() {
        assert_eq!(BundleShape::TwoForOne.to_string(), "2-for-1");
        assert!(BundleShape::OneForTwo.is_uneven());
        assert!(!BundleShape::TwoForTwo.is_uneven());
    }
}
