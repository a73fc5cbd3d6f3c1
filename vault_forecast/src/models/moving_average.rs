//! Moving-average drift model

use crate::data::{prices, PricePoint};
use crate::models::{
    insufficient, linear_drift_forecast, ForecastModel, ForecastResult, ModelKind,
};
use crate::params::ForecastParams;
use crate::projection::Projection;
use vault_math::{safe_div, simple_moving_average};

/// Projects the gap between the last price and its trailing simple moving
/// average as a linear monthly drift.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovingAverageModel;

impl ForecastModel for MovingAverageModel {
    fn kind(&self) -> ModelKind {
        ModelKind::MovingAverage
    }

    fn min_points(&self, params: &ForecastParams) -> usize {
        // A degenerate window still needs a last price to project from
        params.window().max(1)
    }

    fn project(
        &self,
        series: &[PricePoint],
        params: &ForecastParams,
    ) -> Projection<ForecastResult> {
        let required = self.min_points(params);
        if series.len() < required {
            return insufficient(self.kind(), required, series.len());
        }

        let closes = prices(series);
        let (Some(&last), Some(moving_avg)) = (
            series.last(),
            simple_moving_average(&closes, params.window()),
        ) else {
            return insufficient(self.kind(), required, series.len());
        };

        let trend = safe_div(last.price - moving_avg, moving_avg);

        Projection::Ready(linear_drift_forecast(
            self.kind(),
            &closes,
            last,
            trend,
            params.horizon_days,
        ))
    }
}

/// Moving-average projection of `series`, see [`MovingAverageModel`]
pub fn moving_average_forecast(
    series: &[PricePoint],
    params: &ForecastParams,
) -> Projection<ForecastResult> {
    MovingAverageModel.project(series, params)
}
