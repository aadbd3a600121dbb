use crate::transfers::{RelaxationConfig, TradeSettings};
use itertools::Itertools;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxationStage {
    Strict,
    WidenFairness,
    UnevenBundles,
    LowerStarterGain,
}

impl RelaxationStage {
    pub fn label(&self) -> &'static str {
        match self {
            RelaxationStage::Strict => "strict",
            RelaxationStage::WidenFairness => "widened fairness",
            RelaxationStage::UnevenBundles => "uneven bundles",
            RelaxationStage::LowerStarterGain => "lowered starter gain",
        }
    }
}

/// One rung of the ladder: the complete settings used for a single attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxationTier {
    pub level: usize,
    pub stage: RelaxationStage,
    pub settings: TradeSettings,
}

impl RelaxationTier {
    pub fn strict(settings: &TradeSettings) -> Self {
        RelaxationTier {
            level: 0,
            stage: RelaxationStage::Strict,
            settings: settings.clone(),
        }
    }
}

impl Display for RelaxationTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "tier {} ({}): fairness <= {:.1}%, min gain {:.1}, shapes {}",
            self.level,
            self.stage.label(),
            self.settings.fairness_threshold_pct,
            self.settings.min_starter_gain,
            self.settings.bundle_shapes.iter().join("/")
        )
    }
}

pub struct RelaxationLadder;

impl RelaxationLadder {
    /// Strict settings first, then each relaxation in fixed order. Steps are
    /// cumulative: every tier keeps the relaxations of the tiers before it.
    pub fn tiers(base: &TradeSettings, relaxation: &RelaxationConfig) -> Vec<RelaxationTier> {
        let mut tiers = vec![RelaxationTier::strict(base)];
        let mut current = base.clone();

        if relaxation.fairness_step_pct > 0.0 {
            while current.fairness_threshold_pct < relaxation.fairness_ceiling_pct {
                let widened = (current.fairness_threshold_pct + relaxation.fairness_step_pct)
                    .min(relaxation.fairness_ceiling_pct);
                current = current.with_fairness_threshold(widened);
                Self::push(&mut tiers, RelaxationStage::WidenFairness, &current);
            }
        }

        let widened = current.clone().with_extra_shapes(&relaxation.uneven_shapes);
        if widened.bundle_shapes != current.bundle_shapes {
            current = widened;
            Self::push(&mut tiers, RelaxationStage::UnevenBundles, &current);
        }

        if relaxation.gain_step > 0.0 {
            while current.min_starter_gain > relaxation.gain_floor {
                let lowered =
                    (current.min_starter_gain - relaxation.gain_step).max(relaxation.gain_floor);
                current = current.with_min_starter_gain(lowered);
                Self::push(&mut tiers, RelaxationStage::LowerStarterGain, &current);
            }
        }

        tiers
    }

    fn push(tiers: &mut Vec<RelaxationTier>, stage: RelaxationStage, settings: &TradeSettings) {
        tiers.push(RelaxationTier {
            level: tiers.len(),
            stage,
            settings: settings.clone(),
        });
    }
}
