//! # Vault Forecast
//!
//! Price and yield projections for vault shares and the assets behind them.
//!
//! ## Features
//!
//! - Three interchangeable projection models behind [`ForecastModel`]:
//!   moving-average drift, EMA drift and a volatility-adjusted compound model
//! - Compound annual growth rate of a vault from price-per-share snapshots
//! - Parameter parsing and validation for untrusted configuration
//! - CSV loading of exported price and snapshot histories
//! - Hold-out accuracy scoring of the models
//!
//! Every projection is a pure function of its arguments. A series that is too
//! short for a model yields [`Projection::InsufficientData`] rather than an
//! error, so callers can show "not enough history yet" instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use vault_forecast::{moving_average_forecast, ForecastParams, PricePoint, Projection};
//!
//! let series: Vec<PricePoint> = (0..10)
//!     .map(|i| PricePoint::new(i * 86_400_000, 45_000.0 + 1_000.0 * i as f64))
//!     .collect();
//! let params = ForecastParams::new(30).with_window(7);
//!
//! match moving_average_forecast(&series, &params) {
//!     Projection::Ready(result) => {
//!         assert_eq!(result.forecast().len(), 30);
//!         println!("{}", result);
//!     }
//!     Projection::InsufficientData(shortfall) => println!("{}", shortfall),
//! }
//! ```

pub mod accuracy;
pub mod apy;
pub mod data;
pub mod error;
pub mod models;
pub mod params;
pub mod projection;

// Re-export commonly used types
pub use crate::accuracy::{forecast_accuracy, holdout_evaluation, ForecastAccuracy};
pub use crate::apy::portfolio_apy_projection;
pub use crate::data::{DataLoader, PricePoint, Snapshot};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{
    ema_forecast, moving_average_forecast, project_all, vol_adjusted_projection, ConfidenceBand,
    EmaModel, ForecastMetrics, ForecastModel, ForecastResult, ModelKind, MovingAverageModel,
    VolAdjustedModel,
};
pub use crate::params::ForecastParams;
pub use crate::projection::{Projection, Shortfall};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
