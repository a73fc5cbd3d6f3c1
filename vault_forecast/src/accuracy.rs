//! Hold-out accuracy scoring for forecast models

use crate::data::{prices, PricePoint};
use crate::error::{ForecastError, Result};
use crate::models::ForecastModel;
use crate::params::ForecastParams;
use crate::projection::Projection;
use std::fmt;
use vault_math::{mean, safe_div};

/// Error scores of a projected path against what actually happened.
///
/// Percentage scores are in percent. `mape` averages only the days whose
/// actual price is non-zero and is `0.0` when there are none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastAccuracy {
    pub mae: f64,
    pub mse: f64,
    pub rmse: f64,
    pub mape: f64,
    pub smape: f64,
}

impl fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MAE {:.4} | RMSE {:.4} (MSE {:.4}) | MAPE {:.2}% | SMAPE {:.2}%",
            self.mae, self.rmse, self.mse, self.mape, self.smape
        )
    }
}

/// Score a projected path against the realized one, point by point.
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.is_empty() || forecast.len() != actual.len() {
        return Err(ForecastError::ValidationError(format!(
            "Cannot score {} forecast values against {} actual values",
            forecast.len(),
            actual.len()
        )));
    }

    let pairs = || forecast.iter().zip(actual).map(|(&f, &a)| (f, a));

    let abs_errors: Vec<f64> = pairs().map(|(f, a)| (a - f).abs()).collect();
    let squared: Vec<f64> = abs_errors.iter().map(|e| e * e).collect();
    let percent: Vec<f64> = pairs()
        .filter(|&(_, a)| a != 0.0)
        .map(|(f, a)| 100.0 * (a - f).abs() / a.abs())
        .collect();
    let symmetric: Vec<f64> = pairs()
        .map(|(f, a)| 200.0 * safe_div((a - f).abs(), a.abs() + f.abs()))
        .collect();

    let mse = mean(&squared);

    Ok(ForecastAccuracy {
        mae: mean(&abs_errors),
        mse,
        rmse: mse.sqrt(),
        mape: mean(&percent),
        smape: mean(&symmetric),
    })
}

/// Score `model` by holding out the last `horizon_days` points of a daily
/// series, projecting from the rest and comparing day by day.
///
/// Returns `InsufficientData` when nothing would remain to project from, or
/// the model rejects the shortened history.
pub fn holdout_evaluation(
    model: &dyn ForecastModel,
    series: &[PricePoint],
    params: &ForecastParams,
) -> Result<Projection<ForecastAccuracy>> {
    let horizon = params.horizon_days as usize;
    if horizon == 0 {
        return Err(ForecastError::ValidationError(
            "Hold-out evaluation needs a horizon of at least one day".to_string(),
        ));
    }

    if series.len() <= horizon {
        return Ok(Projection::too_few(horizon + 1, series.len()));
    }

    let (history, held_out) = series.split_at(series.len() - horizon);
    let result = match model.project(history, params) {
        Projection::Ready(result) => result,
        Projection::InsufficientData(shortfall) => {
            return Ok(Projection::InsufficientData(shortfall));
        }
    };

    let projected = prices(result.forecast());
    let accuracy = forecast_accuracy(&projected, &prices(held_out))?;

    Ok(Projection::Ready(accuracy))
}
