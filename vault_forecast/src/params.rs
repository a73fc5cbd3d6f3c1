//! Forecast parameters
//!
//! Projections accept any parameters and compute permissively. Call
//! [`ForecastParams::validate`] when the values come from an untrusted source.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Trailing window used by the moving-average model when none is given
pub const DEFAULT_WINDOW: usize = 7;
/// EMA smoothing factor used when none is given
pub const DEFAULT_ALPHA: f64 = 0.1;
/// Horizon used by `ForecastParams::default()`
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Horizon and model tuning for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastParams {
    /// Number of daily points to project
    pub horizon_days: u32,
    /// Trailing window, moving-average model only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<usize>,
    /// Smoothing factor, EMA model only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_DAYS)
    }
}

impl ForecastParams {
    pub fn new(horizon_days: u32) -> Self {
        Self {
            horizon_days,
            window: None,
            alpha: None,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Parse the camelCase JSON form, e.g. `{"horizonDays":30,"window":7}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Effective moving-average window
    pub fn window(&self) -> usize {
        self.window.unwrap_or(DEFAULT_WINDOW)
    }

    /// Effective EMA smoothing factor
    pub fn alpha(&self) -> f64 {
        self.alpha.unwrap_or(DEFAULT_ALPHA)
    }

    /// Strict range checks for externally supplied parameters
    pub fn validate(&self) -> Result<()> {
        if self.horizon_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be at least one day".to_string(),
            ));
        }

        if let Some(window) = self.window {
            if window < 2 {
                return Err(ForecastError::InvalidParameter(format!(
                    "Window must be at least 2, got {}",
                    window
                )));
            }
        }

        if let Some(alpha) = self.alpha {
            if !(alpha > 0.0 && alpha <= 1.0) {
                return Err(ForecastError::InvalidParameter(format!(
                    "Alpha must be in (0, 1], got {}",
                    alpha
                )));
            }
        }

        Ok(())
    }
}
