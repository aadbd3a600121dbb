use crate::club::TeamId;
use crate::league::League;
use crate::profile::LeagueProfile;
use crate::squad::LineupConfig;
use crate::transfers::{
    CandidateTrade, Matching, RelaxationConfig, RelaxationLadder, RelaxationTier, TradeGenerator,
    TradeGraph, TradeSettings,
};
use log::{debug, info, warn};
use std::collections::BTreeSet;

/// Result of one weekly run.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeOutcome {
    /// The tier whose graph produced `trades`.
    pub tier: RelaxationTier,
    /// Selected trades, ordered by the lower team id.
    pub trades: Vec<CandidateTrade>,
    pub total_weight: f64,
    /// No tier admitted a perfect matching; `trades` is the largest matching found.
    pub degraded: bool,
    pub unmatched: Vec<TeamId>,
    /// Near-miss bundles touching unmatched teams, best first.
    pub alternates: Vec<CandidateTrade>,
    /// Tiers tried, including the one that produced the result.
    pub attempts: usize,
}

/// Runs generation and matching up the relaxation ladder for one league snapshot.
pub struct TradeMarket<'l> {
    league: &'l League,
    profile: &'l LeagueProfile,
    lineup: &'l LineupConfig,
}

impl<'l> TradeMarket<'l> {
    pub fn new(league: &'l League, profile: &'l LeagueProfile, lineup: &'l LineupConfig) -> Self {
        TradeMarket {
            league,
            profile,
            lineup,
        }
    }

    /// Stops at the first tier whose graph has a perfect matching. When every
    /// tier fails, falls back to the largest matching on the most relaxed graph.
    pub fn run(
        &self,
        settings: &TradeSettings,
        relaxation: &RelaxationConfig,
        max_alternates: usize,
    ) -> TradeOutcome {
        let generator = TradeGenerator::new(self.league, self.profile, self.lineup);
        let mut attempts = 0;
        let mut last: Option<(RelaxationTier, TradeGraph)> = None;

        for tier in RelaxationLadder::tiers(settings, relaxation) {
            attempts += 1;
            let graph = generator.generate(&tier.settings);

            match graph.perfect_matching() {
                Some(matching) => {
                    info!(
                        "{}: perfect matching of {} trades, weight {:.2}",
                        tier,
                        matching.len(),
                        matching.total_weight
                    );
                    return self.outcome(tier, &graph, matching, false, attempts, max_alternates);
                }
                None => {
                    debug!(
                        "{}: {} edges, {} isolated teams, no perfect matching",
                        tier,
                        graph.edges().len(),
                        graph.isolated().len()
                    );
                    last = Some((tier, graph));
                }
            }
        }

        let (tier, graph) = last.unwrap_or_else(|| {
            let tier = RelaxationTier::strict(settings);
            let graph = generator.generate(&tier.settings);
            (tier, graph)
        });

        let matching = graph.maximum_matching();

        warn!(
            "relaxation ladder exhausted after {} tiers, {} of {} teams matched",
            attempts,
            matching.len() * 2,
            graph.teams().len()
        );

        self.outcome(tier, &graph, matching, true, attempts, max_alternates)
    }

    fn outcome(
        &self,
        tier: RelaxationTier,
        graph: &TradeGraph,
        matching: Matching,
        degraded: bool,
        attempts: usize,
        max_alternates: usize,
    ) -> TradeOutcome {
        let valid = matching.is_valid(graph.teams().len());
        debug_assert!(valid, "matching reuses a team: {:?}", matching.pairs);
        if !valid {
            warn!("selected matching reuses a team: {:?}", matching.pairs);
        }

        let trades: Vec<CandidateTrade> = matching
            .pairs
            .iter()
            .filter_map(|&(a, b)| graph.edge(a, b))
            .map(|edge| edge.trade.clone())
            .collect();

        let unmatched: Vec<TeamId> = graph
            .teams()
            .iter()
            .enumerate()
            .filter(|(node, _)| !matching.covers(*node))
            .map(|(_, id)| id.clone())
            .collect();

        let alternates = if unmatched.is_empty() {
            Vec::new()
        } else {
            Self::alternates(graph, &matching, &unmatched, max_alternates)
        };

        TradeOutcome {
            tier,
            trades,
            total_weight: matching.total_weight,
            degraded,
            unmatched,
            alternates,
            attempts,
        }
    }

    /// Unselected edges plus rejected bundles that involve an unmatched team.
    fn alternates(
        graph: &TradeGraph,
        matching: &Matching,
        unmatched: &[TeamId],
        limit: usize,
    ) -> Vec<CandidateTrade> {
        let selected: BTreeSet<(usize, usize)> = matching.pairs.iter().copied().collect();
        let touches_unmatched =
            |trade: &CandidateTrade| unmatched.iter().any(|id| trade.involves(id));

        let mut alternates: Vec<CandidateTrade> = graph
            .edges()
            .iter()
            .filter(|edge| !selected.contains(&(edge.a, edge.b)))
            .flat_map(|edge| std::iter::once(&edge.trade).chain(&edge.alternatives))
            .chain(graph.near_misses())
            .filter(|trade| touches_unmatched(trade))
            .cloned()
            .collect();

        alternates.sort_by(|a, b| a.rank_cmp(b));
        alternates.truncate(limit);
        alternates
    }
}
