//! # Vault Forecast Workspace
//!
//! Facade over the workspace crates: [`vault_math`] for the numeric
//! primitives and [`vault_forecast`] for the projection models and the APY
//! projector.
//!
//! ## Example
//!
//! ```
//! use vault_forecast_workspace::prelude::*;
//!
//! let history = [Snapshot::new(1.0, 0), Snapshot::new(1.1, 365 * 86_400_000)];
//! let apy = portfolio_apy_projection(&history[1], &history);
//! assert!(apy.is_ready());
//! ```

pub use vault_forecast;
pub use vault_math;

/// Everything a consumer of the forecasting engine normally needs
pub mod prelude {
    pub use vault_forecast::{
        ema_forecast, moving_average_forecast, portfolio_apy_projection, project_all,
        vol_adjusted_projection, ConfidenceBand, DataLoader, ForecastError, ForecastMetrics,
        ForecastModel, ForecastParams, ForecastResult, ModelKind, PricePoint, Projection,
        Shortfall, Snapshot,
    };
    pub use vault_math::{
        annualize, calculate_returns, calculate_volatility, safe_div, scale_by_decimals, stdev,
    };
}
