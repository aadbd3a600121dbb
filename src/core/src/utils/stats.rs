pub struct FloatUtils;

impl FloatUtils {
    /// Median of the given values; the mean of the two middle values for an even count.
    pub fn median(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        }
    }

    /// Relative imbalance against the larger side, in percent.
    pub fn imbalance_pct(a: f64, b: f64) -> f64 {
        let larger = a.max(b);
        if larger <= 0.0 {
            return 100.0;
        }

        (a - b).abs() * 100.0 / larger
    }
}
