use crate::club::{Player, PlayerId, Position, Team};
use crate::league::League;
use crate::profile::LeagueProfile;
use crate::squad::{LineupConfig, StarterSelector};
use crate::transfers::{
    BundleShape, CandidateTrade, Rejection, RiskFlag, TradeEdge, TradeGraph, TradeSettings,
    TradeSide,
};
use crate::utils::FloatUtils;
use itertools::Itertools;
use log::debug;
use std::collections::BTreeSet;

/// Pre-trade state of one team, computed once and shared by every attempt.
struct TeamContext<'l> {
    team: &'l Team,
    baseline: f64,
    starters: BTreeSet<&'l PlayerId>,
}

struct SideOutcome {
    gain: f64,
    changed: bool,
    short_at: Option<Position>,
    emptied: Vec<Position>,
}

#[derive(Default)]
struct PairResult {
    accepted: Vec<CandidateTrade>,
    best_rejected: Option<CandidateTrade>,
    evaluated: usize,
}

/// Builds the trade graph for one set of acceptance settings.
pub struct TradeGenerator<'l> {
    profile: &'l LeagueProfile,
    lineup: &'l LineupConfig,
    contexts: Vec<TeamContext<'l>>,
}

impl<'l> TradeGenerator<'l> {
    pub fn new(league: &'l League, profile: &'l LeagueProfile, lineup: &'l LineupConfig) -> Self {
        let contexts = league
            .teams()
            .iter()
            .map(|team| {
                let assignment = StarterSelector::select(&team.players(), lineup);
                TeamContext {
                    team,
                    baseline: assignment.total_value(),
                    starters: assignment.starter_ids(),
                }
            })
            .collect();

        TradeGenerator {
            profile,
            lineup,
            contexts,
        }
    }

    pub fn generate(&self, settings: &TradeSettings) -> TradeGraph {
        let mut edges = Vec::new();
        let mut near_misses = Vec::new();
        let mut evaluated = 0;

        for (i, a) in self.contexts.iter().enumerate() {
            for (j, b) in self.contexts.iter().enumerate().skip(i + 1) {
                let mut pair = self.evaluate_pair(a, b, settings);
                evaluated += pair.evaluated;

                if pair.accepted.is_empty() {
                    near_misses.extend(pair.best_rejected);
                    continue;
                }

                pair.accepted.sort_by(|x, y| x.rank_cmp(y));
                let mut ranked = pair.accepted.into_iter();

                if let Some(trade) = ranked.next() {
                    edges.push(TradeEdge {
                        a: i,
                        b: j,
                        trade,
                        alternatives: ranked.take(settings.alternates_per_pair).collect(),
                    });
                }
            }
        }

        debug!(
            "evaluated {} bundles: {} pairs with an accepted trade, {} near misses",
            evaluated,
            edges.len(),
            near_misses.len()
        );

        TradeGraph::new(
            self.contexts.iter().map(|c| c.team.id.clone()).collect(),
            edges,
            near_misses,
        )
    }

    /// Shapes are tried in priority order; the first shape with any accepted bundle wins.
    fn evaluate_pair(
        &self,
        a: &TeamContext<'l>,
        b: &TeamContext<'l>,
        settings: &TradeSettings,
    ) -> PairResult {
        let mut result = PairResult::default();

        let pool_a = self.pool(a, b, settings.bench_pool_size);
        let pool_b = self.pool(b, a, settings.bench_pool_size);

        if pool_a.is_empty() || pool_b.is_empty() {
            return result;
        }

        for &shape in &settings.bundle_shapes {
            let (size_a, size_b) = shape.sizes();
            if pool_a.len() < size_a || pool_b.len() < size_b {
                continue;
            }

            for sends_a in pool_a.iter().copied().combinations(size_a) {
                for sends_b in pool_b.iter().copied().combinations(size_b) {
                    let trade = self.evaluate(shape, a, b, &sends_a, &sends_b, settings);
                    result.evaluated += 1;

                    if trade.is_accepted() {
                        result.accepted.push(trade);
                    } else if result
                        .best_rejected
                        .as_ref()
                        .is_none_or(|best| trade.rank_cmp(best).is_lt())
                    {
                        result.best_rejected = Some(trade);
                    }
                }
            }

            if !result.accepted.is_empty() {
                break;
            }
        }

        result
    }

    /// Bench players of `sender` at positions where the sender has surplus and
    /// the receiver has need, best first, at most `k`.
    fn pool(
        &self,
        sender: &TeamContext<'l>,
        receiver: &TeamContext<'l>,
        k: usize,
    ) -> Vec<&'l Player> {
        let (Some(sender_profile), Some(receiver_profile)) = (
            self.profile.team(&sender.team.id),
            self.profile.team(&receiver.team.id),
        ) else {
            return Vec::new();
        };

        let needs = receiver_profile.need_positions(k);
        let positions: Vec<Position> = sender_profile
            .surplus_positions(k)
            .into_iter()
            .filter(|position| needs.contains(position))
            .collect();

        if positions.is_empty() {
            return Vec::new();
        }

        let mut pool: Vec<&'l Player> = sender
            .team
            .players
            .iter()
            .filter(|p| {
                p.is_valued()
                    && p.value > 0.0
                    && positions.contains(&p.position)
                    && !sender.starters.contains(&p.id)
            })
            .collect();

        pool.sort_by(|x, y| y.value.total_cmp(&x.value));
        pool.truncate(k);
        pool
    }

    fn evaluate(
        &self,
        shape: BundleShape,
        a: &TeamContext<'l>,
        b: &TeamContext<'l>,
        sends_a: &[&'l Player],
        sends_b: &[&'l Player],
        settings: &TradeSettings,
    ) -> CandidateTrade {
        let value_a: f64 = sends_a.iter().map(|p| p.value).sum();
        let value_b: f64 = sends_b.iter().map(|p| p.value).sum();
        let fairness_pct = FloatUtils::imbalance_pct(value_a, value_b);

        let outcome_a = self.side_outcome(a, sends_a, sends_b);
        let outcome_b = self.side_outcome(b, sends_b, sends_a);

        let mut rejections = Vec::new();

        if fairness_pct > settings.fairness_threshold_pct {
            rejections.push(Rejection::FairnessExceeded {
                fairness_pct,
                threshold_pct: settings.fairness_threshold_pct,
            });
        }

        let mut risk_flags = Vec::new();

        for (ctx, outcome) in [(a, &outcome_a), (b, &outcome_b)] {
            if outcome.gain < settings.min_starter_gain {
                rejections.push(Rejection::InsufficientGain {
                    team_id: ctx.team.id.clone(),
                    gain: outcome.gain,
                    minimum: settings.min_starter_gain,
                });
            }

            if !outcome.changed {
                rejections.push(Rejection::LineupUnchanged {
                    team_id: ctx.team.id.clone(),
                });
            }

            if let (true, Some(position)) = (settings.require_roster_viability, outcome.short_at) {
                rejections.push(Rejection::RosterNotViable {
                    team_id: ctx.team.id.clone(),
                    position,
                });
            }

            risk_flags.extend(outcome.emptied.iter().map(|&position| RiskFlag::ZeroDepth {
                team_id: ctx.team.id.clone(),
                position,
            }));
        }

        let score = outcome_a.gain + outcome_b.gain
            - fairness_pct * settings.fairness_weight
            - risk_flags.len() as f64 * settings.depth_risk_penalty;

        CandidateTrade {
            shape,
            side_a: Self::side(a, sends_a, value_a, &outcome_a),
            side_b: Self::side(b, sends_b, value_b, &outcome_b),
            fairness_pct,
            risk_flags,
            score,
            rejections,
        }
    }

    /// Recomputes the side's lineup as if the trade executed.
    fn side_outcome(
        &self,
        ctx: &TeamContext<'l>,
        sends: &[&'l Player],
        receives: &[&'l Player],
    ) -> SideOutcome {
        let roster = ctx.team.roster_after(sends, receives);
        let assignment = StarterSelector::select(&roster, self.lineup);

        let count_after =
            |position: Position| roster.iter().filter(|p| p.position == position).count();

        let short_at = self
            .lineup
            .mandatory_positions()
            .find(|&(position, required)| {
                let after = count_after(position);
                after < required && after < ctx.team.count_at(position)
            })
            .map(|(position, _)| position);

        let emptied = sends
            .iter()
            .map(|p| p.position)
            .unique()
            .filter(|&position| count_after(position) == 0)
            .collect();

        SideOutcome {
            gain: assignment.total_value() - ctx.baseline,
            changed: assignment.starter_ids() != ctx.starters,
            short_at,
            emptied,
        }
    }

    fn side(
        ctx: &TeamContext<'l>,
        sends: &[&'l Player],
        value: f64,
        outcome: &SideOutcome,
    ) -> TradeSide {
        TradeSide {
            team_id: ctx.team.id.clone(),
            sends: sends.iter().map(|&p| p.clone()).collect(),
            value_sent: value,
            starter_gain: outcome.gain,
            lineup_changed: outcome.changed,
        }
    }
}
