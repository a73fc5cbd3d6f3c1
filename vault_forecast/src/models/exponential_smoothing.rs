//! Exponential-moving-average drift model

use crate::data::{prices, PricePoint};
use crate::models::{
    insufficient, linear_drift_forecast, ForecastModel, ForecastResult, ModelKind,
};
use crate::params::ForecastParams;
use crate::projection::Projection;
use vault_math::{ema, safe_div};

const MIN_POINTS: usize = 2;

/// Same drift projection as the moving-average model, with the trend measured
/// against an EMA seeded at the first price. Higher `alpha` follows recent
/// prices more closely.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmaModel;

impl ForecastModel for EmaModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Ema
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

        let closes = prices(series);
        let (Some(&last), Some(smoothed)) = (series.last(), ema(&closes, params.alpha())) else {
            return insufficient(self.kind(), MIN_POINTS, series.len());
        };

        let trend = safe_div(last.price - smoothed, smoothed);

        Projection::Ready(linear_drift_forecast(
            self.kind(),
            &closes,
            last,
            trend,
            params.horizon_days,
        ))
    }
}

/// EMA projection of `series`, see [`EmaModel`]
pub fn ema_forecast(series: &[PricePoint], params: &ForecastParams) -> Projection<ForecastResult> {
    EmaModel.project(series, params)
}
