//! Volatility-adjusted compound projection

use crate::data::{prices, PricePoint};
use crate::models::{
    insufficient, ConfidenceBand, ForecastMetrics, ForecastModel, ForecastResult, ModelKind,
};
use crate::params::ForecastParams;
use crate::projection::Projection;
use tracing::trace;
use vault_math::{calculate_returns, calculate_volatility, mean};

const MIN_POINTS: usize = 10;
const DAYS_PER_YEAR: f64 = 365.0;

/// Compounds the mean period return after a volatility haircut.
///
/// The drift is `mean_return * (1 - volatility)`: noisier histories are
/// trusted less. The band widens with `sqrt(horizon / 365)`.
///
/// `metrics.expected_return` is the linear `adjusted_return * horizon` while
/// `expected_value` compounds. The two disagree for long horizons; this is a
/// known inconsistency kept for parity with existing consumers.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolAdjustedModel;

impl ForecastModel for VolAdjustedModel {
    fn kind(&self) -> ModelKind {
        ModelKind::VolAdjusted
    }

    fn min_points(&self, _params: &ForecastParams) -> usize {
        MIN_POINTS
    }

    fn project(
        &self,
        series: &[PricePoint],
        params: &ForecastParams,
    ) -> Projection<ForecastResult> {
        if series.len() < MIN_POINTS {
            return insufficient(self.kind(), MIN_POINTS, series.len());
        }
        let Some(&last) = series.last() else {
            return insufficient(self.kind(), MIN_POINTS, series.len());
        };

        let returns = calculate_returns(&prices(series));
        let volatility = calculate_volatility(&returns);
        let adjusted_return = mean(&returns) * (1.0 - volatility);
        let growth = 1.0 + adjusted_return;

        let horizon = f64::from(params.horizon_days);
        let expected_value = last.price * growth.powf(horizon);
        let vol_multiplier = (horizon / DAYS_PER_YEAR).sqrt();

        trace!(adjusted_return, volatility, expected_value, "vol-adjusted projection");

        let forecast = (1..=params.horizon_days)
            .map(|day| {
                let price = last.price * growth.powf(f64::from(day));
                PricePoint::new(last.days_after(day), price)
            })
            .collect();

        Projection::Ready(ForecastResult {
            model: self.kind(),
            horizon_days: params.horizon_days,
            forecast,
            confidence_band: ConfidenceBand::around(expected_value, volatility * vol_multiplier),
            expected_value,
            metrics: ForecastMetrics::new(adjusted_return * horizon, volatility),
        })
    }
}

/// Volatility-adjusted projection of `series`, see [`VolAdjustedModel`]
pub fn vol_adjusted_projection(
    series: &[PricePoint],
    params: &ForecastParams,
) -> Projection<ForecastResult> {
    VolAdjustedModel.project(series, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MS_PER_DAY;
    use approx::assert_relative_eq;

    fn geometric(start: f64, rate: f64, len: usize) -> Vec<PricePoint> {
        (0..len)
            .map(|i| PricePoint::new(i as i64 * MS_PER_DAY, start * (1.0 + rate).powi(i as i32)))
            .collect()
    }

    #[test]
    fn test_requires_ten_points() {
        let params = ForecastParams::new(30);
        assert!(vol_adjusted_projection(&geometric(100.0, 0.01, 9), &params).is_insufficient());
        assert!(vol_adjusted_projection(&geometric(100.0, 0.01, 10), &params).is_ready());
    }

    #[test]
    fn test_steady_growth_has_no_haircut() {
        let series = geometric(100.0, 0.01, 20);
        let result = vol_adjusted_projection(&series, &ForecastParams::new(30))
            .ready()
            .unwrap();

        let last = series.last().unwrap().price;
        assert!(result.metrics().volatility < 1e-12);
        let expected = last * 1.01f64.powi(30);
        assert_relative_eq!(result.expected_value(), expected, max_relative = 1e-9);
        assert_relative_eq!(result.metrics().expected_return, 0.30, max_relative = 1e-9);
    }

    #[test]
    fn test_expected_return_stays_linear() {
        let series = geometric(100.0, 0.02, 15);
        let result = vol_adjusted_projection(&series, &ForecastParams::new(365))
            .ready()
            .unwrap();

        let compounded = result.expected_value() / series.last().unwrap().price - 1.0;
        assert!(compounded > result.metrics().expected_return);
    }

    #[test]
    fn test_band_scales_with_sqrt_time() {
        let mut series = geometric(100.0, 0.0, 12);
        series[5].price = 104.0;
        series[8].price = 97.0;

        let result = vol_adjusted_projection(&series, &ForecastParams::new(365))
            .ready()
            .unwrap();
        let band = result.confidence_band();
        let sigma = result.metrics().volatility;

        // A one-year horizon has a multiplier of exactly one
        let center = result.expected_value();
        assert_relative_eq!(band.lower_bound(), center * (1.0 - sigma), max_relative = 1e-12);
        assert_relative_eq!(band.upper_bound(), center * (1.0 + sigma), max_relative = 1e-12);
    }
}
