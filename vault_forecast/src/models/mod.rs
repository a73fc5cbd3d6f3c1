//! Forecasting models for price series
//!
//! Three closed-form heuristics share one [`ForecastModel`] interface. Each
//! projects a daily price curve from the last observation, a confidence band
//! around the final projected value, and summary metrics.

use crate::data::PricePoint;
use crate::error::ForecastError;
use crate::params::ForecastParams;
use crate::projection::Projection;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;
use tracing::{debug, trace};
use vault_math::{calculate_returns, calculate_volatility, sharpe_ratio};

pub mod exponential_smoothing;
pub mod moving_average;
pub mod vol_adjusted;

pub use exponential_smoothing::{ema_forecast, EmaModel};
pub use moving_average::{moving_average_forecast, MovingAverageModel};
pub use vol_adjusted::{vol_adjusted_projection, VolAdjustedModel};

/// Day count of the month the linear-drift models scale their trend by
const DAYS_PER_MONTH: f64 = 30.0;

/// Identifies which model produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelKind {
    MovingAverage,
    Ema,
    VolAdjusted,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::MovingAverage,
        ModelKind::Ema,
        ModelKind::VolAdjusted,
    ];

    /// Identifier used in serialized results
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::MovingAverage => "movingAverage",
            ModelKind::Ema => "ema",
            ModelKind::VolAdjusted => "volAdjusted",
        }
    }

    /// The model implementation for this kind
    pub fn model(self) -> Box<dyn ForecastModel> {
        match self {
            ModelKind::MovingAverage => Box::new(MovingAverageModel),
            ModelKind::Ema => Box::new(EmaModel),
            ModelKind::VolAdjusted => Box::new(VolAdjustedModel),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| ForecastError::InvalidParameter(format!("Unknown model: {}", s)))
    }
}

/// Symmetric interval around the final projected value.
///
/// Both vectors hold a single element; the band is not tracked per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl ConfidenceBand {
    /// `center * (1 - spread)` to `center * (1 + spread)`
    pub fn around(center: f64, spread: f64) -> Self {
        Self {
            lower: vec![center * (1.0 - spread)],
            upper: vec![center * (1.0 + spread)],
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower.first().copied().unwrap_or(f64::NAN)
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper.first().copied().unwrap_or(f64::NAN)
    }
}

/// Summary statistics of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMetrics {
    /// Projected fractional return over the horizon
    pub expected_return: f64,
    /// Sample standard deviation of historical period returns
    pub volatility: f64,
    /// `expected_return / volatility`, zero for a flat history
    pub sharpe_ratio: f64,
}

impl ForecastMetrics {
    pub fn new(expected_return: f64, volatility: f64) -> Self {
        Self {
            expected_return,
            volatility,
            sharpe_ratio: sharpe_ratio(expected_return, volatility),
        }
    }
}

/// A completed projection. Produced by a model and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    model: ModelKind,
    horizon_days: u32,
    forecast: Vec<PricePoint>,
    confidence_band: ConfidenceBand,
    expected_value: f64,
    metrics: ForecastMetrics,
}

impl ForecastResult {
    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Daily projected points, one per horizon day
    pub fn forecast(&self) -> &[PricePoint] {
        &self.forecast
    }

    pub fn confidence_band(&self) -> &ConfidenceBand {
        &self.confidence_band
    }

    /// Projected value at the horizon, the centre of the confidence band
    pub fn expected_value(&self) -> f64 {
        self.expected_value
    }

    pub fn metrics(&self) -> &ForecastMetrics {
        &self.metrics
    }

    /// Price of the final projected point
    pub fn final_price(&self) -> Option<f64> {
        self.forecast.last().map(|p| p.price)
    }
}

impl fmt::Display for ForecastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} forecast ({} days):", self.model, self.horizon_days)?;
        writeln!(f, "  Expected value:  {:.4}", self.expected_value)?;
        writeln!(
            f,
            "  Band:            {:.4} .. {:.4}",
            self.confidence_band.lower_bound(),
            self.confidence_band.upper_bound()
        )?;
        writeln!(f, "  Expected return: {:.2}%", self.metrics.expected_return * 100.0)?;
        writeln!(f, "  Volatility:      {:.4}", self.metrics.volatility)?;
        writeln!(f, "  Sharpe ratio:    {:.2}", self.metrics.sharpe_ratio)?;
        Ok(())
    }
}

/// Common interface for the projection models
pub trait ForecastModel: Debug + Send + Sync {
    /// Which model this is
    fn kind(&self) -> ModelKind;

    /// Minimum series length the model needs under `params`
    fn min_points(&self, params: &ForecastParams) -> usize;

    /// Project `series` forward by `params.horizon_days` days
    fn project(&self, series: &[PricePoint], params: &ForecastParams)
        -> Projection<ForecastResult>;

    /// Get the name of the model
    fn name(&self) -> &str {
        self.kind().label()
    }
}

/// Run every model over the same series
pub fn project_all(
    series: &[PricePoint],
    params: &ForecastParams,
) -> Vec<(ModelKind, Projection<ForecastResult>)> {
    ModelKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.model().project(series, params)))
        .collect()
}

pub(crate) fn insufficient(
    model: ModelKind,
    required: usize,
    available: usize,
) -> Projection<ForecastResult> {
    debug!(%model, required, available, "insufficient history for projection");
    Projection::too_few(required, available)
}

/// Linear drift shared by the moving-average and EMA models: the trend is
/// applied as a fraction per 30-day month, and the band is ±1σ of historical
/// returns around the horizon value.
pub(crate) fn linear_drift_forecast(
    model: ModelKind,
    closes: &[f64],
    last: PricePoint,
    trend: f64,
    horizon_days: u32,
) -> ForecastResult {
    let volatility = calculate_volatility(&calculate_returns(closes));
    let horizon_months = f64::from(horizon_days) / DAYS_PER_MONTH;
    let expected_value = last.price * (1.0 + trend * horizon_months);
    let expected_return = trend * horizon_months;

    trace!(%model, trend, volatility, expected_value, "linear drift projection");

    let forecast = (1..=horizon_days)
        .map(|day| {
            let drift = trend * (f64::from(day) / DAYS_PER_MONTH);
            PricePoint::new(last.days_after(day), last.price * (1.0 + drift))
        })
        .collect();

    ForecastResult {
        model,
        horizon_days,
        forecast,
        confidence_band: ConfidenceBand::around(expected_value, volatility),
        expected_value,
        metrics: ForecastMetrics::new(expected_return, volatility),
    }
}
