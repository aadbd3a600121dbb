use engine::{Position, ValuationRecord};
use log::debug;

/// Drops valuation rows that can never join: blank name or position, non-positive
/// value, or a position outside QB/RB/WR/TE. Non-finite values pass through so the
/// join reports them as integrity errors.
pub struct ValuationFilter;

impl ValuationFilter {
    pub fn apply(records: Vec<ValuationRecord>) -> Vec<ValuationRecord> {
        let total = records.len();

        let kept: Vec<ValuationRecord> = records.into_iter().filter(Self::usable).collect();

        if kept.len() < total {
            debug!("dropped {} of {} valuation rows", total - kept.len(), total);
        }

        kept
    }

    fn usable(record: &ValuationRecord) -> bool {
        if record.name.trim().is_empty() || record.position.trim().is_empty() {
            return false;
        }

        if record.value <= 0.0 {
            return false;
        }

        record
            .position
            .parse::<Position>()
            .map(|p| p.is_valued())
            .unwrap_or(false)
    }
}
