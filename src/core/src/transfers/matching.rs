use log::warn;
use std::collections::HashMap;

/// Upper bound on graph size for the bitmask search.
pub const MAX_MATCHING_NODES: usize = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct Matching {
    /// Node index pairs, `i < j`, ordered by `i`.
    pub pairs: Vec<(usize, usize)>,
    pub total_weight: f64,
}

impl Matching {
    pub fn empty() -> Self {
        Matching {
            pairs: Vec::new(),
            total_weight: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn covers(&self, node: usize) -> bool {
        self.pairs.iter().any(|&(i, j)| i == node || j == node)
    }

    /// No node appears twice and no pair is a self loop.
    pub fn is_valid(&self, nodes: usize) -> bool {
        let mut seen = vec![false; nodes];
        for &(i, j) in &self.pairs {
            if i == j || i >= nodes || j >= nodes || seen[i] || seen[j] {
                return false;
            }
            seen[i] = true;
            seen[j] = true;
        }
        true
    }
}

/// Exact weighted matching over a small undirected graph given as a symmetric
/// adjacency matrix (`None` = no edge).
///
/// Both searches always resolve the lowest unmatched node first and try its
/// partners in index order, so equal-weight alternatives resolve to the
/// lexicographically smallest pairing.
pub struct MatchingSolver<'w> {
    weights: &'w [Vec<Option<f64>>],
}

#[derive(Clone, Copy)]
struct Best {
    count: usize,
    weight: f64,
    partner: Option<usize>,
}

impl<'w> MatchingSolver<'w> {
    pub fn new(weights: &'w [Vec<Option<f64>>]) -> Self {
        MatchingSolver { weights }
    }

    fn nodes(&self) -> usize {
        self.weights.len()
    }

    fn weight(&self, i: usize, j: usize) -> Option<f64> {
        self.weights.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    fn full_mask(&self) -> u32 {
        ((1u64 << self.nodes()) - 1) as u32
    }

    fn too_large(&self) -> bool {
        if self.nodes() > MAX_MATCHING_NODES {
            warn!(
                "matching over {} nodes exceeds the {} node limit",
                self.nodes(),
                MAX_MATCHING_NODES
            );
            return true;
        }
        false
    }

    /// Maximum-weight matching covering every node, or `None` when none exists.
    pub fn max_weight_perfect(&self) -> Option<Matching> {
        if self.too_large() || self.nodes() % 2 == 1 {
            return None;
        }

        let mut memo = HashMap::new();
        let total_weight = self.perfect_from(0, &mut memo)?;

        let full = self.full_mask();
        let mut pairs = Vec::with_capacity(self.nodes() / 2);
        let mut mask = 0u32;

        while mask != full {
            let i = (!mask).trailing_zeros() as usize;
            let (_, j) = memo.get(&mask).copied().flatten()?;
            pairs.push((i, j));
            mask |= (1 << i) | (1 << j);
        }

        Some(Matching {
            pairs,
            total_weight,
        })
    }

    fn perfect_from(
        &self,
        mask: u32,
        memo: &mut HashMap<u32, Option<(f64, usize)>>,
    ) -> Option<f64> {
        if mask == self.full_mask() {
            return Some(0.0);
        }

        if let Some(known) = memo.get(&mask) {
            return known.map(|(weight, _)| weight);
        }

        let i = (!mask).trailing_zeros() as usize;
        let mut best: Option<(f64, usize)> = None;

        for j in (i + 1)..self.nodes() {
            if mask & (1 << j) != 0 {
                continue;
            }

            let Some(edge) = self.weight(i, j) else {
                continue;
            };

            if let Some(rest) = self.perfect_from(mask | (1 << i) | (1 << j), memo) {
                let total = edge + rest;
                if best.is_none_or(|(current, _)| total > current) {
                    best = Some((total, j));
                }
            }
        }

        memo.insert(mask, best);
        best.map(|(weight, _)| weight)
    }

    /// Matching with the most pairs, and among those the highest total weight.
    pub fn max_weight_maximum(&self) -> Matching {
        if self.too_large() {
            return Matching::empty();
        }

        let mut memo = HashMap::new();
        let best = self.maximum_from(0, &mut memo);

        let full = self.full_mask();
        let mut pairs = Vec::with_capacity(best.count);
        let mut mask = 0u32;

        while mask != full {
            let i = (!mask).trailing_zeros() as usize;
            match memo.get(&mask).and_then(|b| b.partner) {
                Some(j) => {
                    pairs.push((i, j));
                    mask |= (1 << i) | (1 << j);
                }
                None => mask |= 1 << i,
            }
        }

        Matching {
            pairs,
            total_weight: best.weight,
        }
    }

    fn maximum_from(&self, mask: u32, memo: &mut HashMap<u32, Best>) -> Best {
        if mask == self.full_mask() {
            return Best {
                count: 0,
                weight: 0.0,
                partner: None,
            };
        }

        if let Some(known) = memo.get(&mask) {
            return *known;
        }

        let i = (!mask).trailing_zeros() as usize;
        let mut best: Option<Best> = None;

        for j in (i + 1)..self.nodes() {
            if mask & (1 << j) != 0 {
                continue;
            }

            let Some(edge) = self.weight(i, j) else {
                continue;
            };

            let rest = self.maximum_from(mask | (1 << i) | (1 << j), memo);
            let candidate = Best {
                count: rest.count + 1,
                weight: rest.weight + edge,
                partner: Some(j),
            };

            if best.is_none_or(|current| Self::beats(&candidate, &current)) {
                best = Some(candidate);
            }
        }

        // leaving i unmatched only wins when strictly better
        let rest = self.maximum_from(mask | (1 << i), memo);
        let skip = Best {
            count: rest.count,
            weight: rest.weight,
            partner: None,
        };

        let best = match best {
            Some(paired) if !Self::beats(&skip, &paired) => paired,
            _ => skip,
        };

        memo.insert(mask, best);
        best
    }

    fn beats(a: &Best, b: &Best) -> bool {
        a.count > b.count || (a.count == b.count && a.weight > b.weight)
    }
}
