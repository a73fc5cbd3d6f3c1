//! Annualized growth of a vault's price-per-share

use crate::data::Snapshot;
use crate::projection::{Projection, Shortfall};
use tracing::debug;
use vault_math::safe_div;

/// Milliseconds in a 365-day year
pub const MS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0 * 1000.0;

const MIN_SNAPSHOTS: usize = 2;

/// Compound annual growth rate, in percent, between the earliest and latest
/// of `historical`.
///
/// Deposits and withdrawals are assumed not to move price-per-share, so the
/// ratio between two snapshots is pure yield. `current` is accepted so callers
/// can pass the live snapshot alongside history; only `historical` is used.
/// A zero starting price-per-share (an empty vault) counts as no growth.
///
/// ```
/// use vault_forecast::{portfolio_apy_projection, Snapshot};
///
/// let year_ms = 365 * 86_400_000;
/// let history = [Snapshot::new(1.0, 0), Snapshot::new(1.1, year_ms)];
/// let apy = portfolio_apy_projection(&history[1], &history).ready().unwrap();
/// assert!((apy - 10.0).abs() < 1e-9);
/// ```
pub fn portfolio_apy_projection(
    _current: &Snapshot,
    historical: &[Snapshot],
) -> Projection<f64> {
    if historical.len() < MIN_SNAPSHOTS {
        debug!(available = historical.len(), "too few snapshots for APY");
        return Projection::too_few(MIN_SNAPSHOTS, historical.len());
    }

    let mut ordered = historical.to_vec();
    ordered.sort_by_key(|s| s.updated_at);

    let (Some(first), Some(last)) = (ordered.first(), ordered.last()) else {
        return Projection::too_few(MIN_SNAPSHOTS, historical.len());
    };

    // Subtract as floats: the timestamps may sit at opposite ends of i64
    let years = (last.updated_at as f64 - first.updated_at as f64) / MS_PER_YEAR;
    if years <= 0.0 {
        debug!(updated_at = first.updated_at, "snapshots span no elapsed time");
        return Projection::InsufficientData(Shortfall::NoElapsedTime);
    }

    let price_change = safe_div(
        last.price_per_share - first.price_per_share,
        first.price_per_share,
    );
    let apy = ((1.0 + price_change).powf(1.0 / years) - 1.0) * 100.0;

    Projection::Ready(apy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DAY_MS: i64 = 86_400_000;

    #[test]
    fn test_needs_two_snapshots() {
        let only = Snapshot::new(1.0, 0);
        assert_eq!(
            portfolio_apy_projection(&only, &[only]).shortfall(),
            Some(Shortfall::TooFewPoints {
                required: 2,
                available: 1
            })
        );
        assert!(portfolio_apy_projection(&only, &[]).is_insufficient());
    }

    #[test]
    fn test_same_timestamp_is_insufficient() {
        let a = Snapshot::new(1.0, 1_000);
        let b = Snapshot::new(1.2, 1_000);
        assert_eq!(
            portfolio_apy_projection(&b, &[a, b]).shortfall(),
            Some(Shortfall::NoElapsedTime)
        );
    }

    #[test]
    fn test_ten_percent_over_a_year() {
        let history = [Snapshot::new(1.0, 0), Snapshot::new(1.1, 365 * DAY_MS)];
        let apy = portfolio_apy_projection(&history[1], &history).ready().unwrap();
        assert_relative_eq!(apy, 10.0, max_relative = 1e-9);
    }

    #[test]
    fn test_unordered_history_is_sorted() {
        let start = Snapshot::new(1.0, 10 * DAY_MS);
        let middle = Snapshot::new(3.0, 100 * DAY_MS);
        let end = Snapshot::new(1.05, 10 * DAY_MS + 365 * DAY_MS / 2);

        let apy = portfolio_apy_projection(&end, &[end, middle, start]).ready().unwrap();
        // Half a year at 5% compounds to 10.25% annually; the middle point is ignored
        assert_relative_eq!(apy, 10.25, max_relative = 1e-9);
    }

    #[test]
    fn test_current_snapshot_is_ignored() {
        let history = [Snapshot::new(1.0, 0), Snapshot::new(0.9, 365 * DAY_MS)];
        let a = portfolio_apy_projection(&Snapshot::new(5.0, 0), &history);
        let b = portfolio_apy_projection(&Snapshot::new(0.1, 9), &history);
        assert_eq!(a, b);
        assert_relative_eq!(a.ready().unwrap(), -10.0, max_relative = 1e-9);
    }

    #[test]
    fn test_empty_vault_start_projects_zero() {
        let empty = Snapshot::from_vault_state(0u128, 0u128, 6, 0).unwrap();
        assert_eq!(empty.price_per_share, 0.0);

        let later = Snapshot::new(1.05, 365 * DAY_MS);
        let apy = portfolio_apy_projection(&later, &[empty, later]).ready().unwrap();
        assert_eq!(apy, 0.0);

        let still_empty = Snapshot::new(0.0, 365 * DAY_MS);
        let apy = portfolio_apy_projection(&still_empty, &[empty, still_empty])
            .ready()
            .unwrap();
        assert_eq!(apy, 0.0);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let first = Snapshot::new(1.0, i64::MIN);
        let last = Snapshot::new(2.0, i64::MAX);
        let apy = portfolio_apy_projection(&last, &[first, last]).ready().unwrap();
        assert!(apy.is_finite());
        assert!(apy > 0.0);
    }
}
