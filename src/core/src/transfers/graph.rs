use crate::club::TeamId;
use crate::transfers::{CandidateTrade, Matching, MatchingSolver};

/// The best accepted bundle for one team pair. `a < b` as node indices.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeEdge {
    pub a: usize,
    pub b: usize,
    pub trade: CandidateTrade,
    /// Runner-up accepted bundles for the same pair, best first.
    pub alternatives: Vec<CandidateTrade>,
}

/// Teams as nodes (league order), best accepted bundle per pair as edges.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeGraph {
    teams: Vec<TeamId>,
    edges: Vec<TradeEdge>,
    near_misses: Vec<CandidateTrade>,
}

impl TradeGraph {
    pub fn new(
        teams: Vec<TeamId>,
        edges: Vec<TradeEdge>,
        near_misses: Vec<CandidateTrade>,
    ) -> Self {
        TradeGraph {
            teams,
            edges,
            near_misses,
        }
    }

    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    pub fn edges(&self) -> &[TradeEdge] {
        &self.edges
    }

    /// Best rejected bundle of every pair that has no edge.
    pub fn near_misses(&self) -> &[CandidateTrade] {
        &self.near_misses
    }

    pub fn edge(&self, a: usize, b: usize) -> Option<&TradeEdge> {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        self.edges.iter().find(|e| e.a == a && e.b == b)
    }

    pub fn degree(&self, node: usize) -> usize {
        self.edges
            .iter()
            .filter(|e| e.a == node || e.b == node)
            .count()
    }

    pub fn isolated(&self) -> Vec<&TeamId> {
        (0..self.teams.len())
            .filter(|&node| self.degree(node) == 0)
            .map(|node| &self.teams[node])
            .collect()
    }

    pub fn weights(&self) -> Vec<Vec<Option<f64>>> {
        let n = self.teams.len();
        let mut weights = vec![vec![None; n]; n];

        for edge in &self.edges {
            weights[edge.a][edge.b] = Some(edge.trade.score);
            weights[edge.b][edge.a] = Some(edge.trade.score);
        }

        weights
    }

    pub fn perfect_matching(&self) -> Option<Matching> {
        MatchingSolver::new(&self.weights()).max_weight_perfect()
    }

    pub fn maximum_matching(&self) -> Matching {
        MatchingSolver::new(&self.weights()).max_weight_maximum()
    }
}
