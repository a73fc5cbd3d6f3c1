//! # Vault Math
//!
//! Numeric primitives shared by the vault forecasting models.
//!
//! Every function here is pure and infallible on the hot path: division by
//! zero and degenerate samples collapse to `0.0` instead of raising. The only
//! fallible helpers live in [`scaling`] and guard conversions at the data
//! provider boundary.
//!
//! ```
//! use vault_math::{annualize, calculate_returns, calculate_volatility};
//!
//! let returns = calculate_returns(&[100.0, 110.0, 121.0]);
//! assert_eq!(returns.len(), 2);
//! assert!(calculate_volatility(&returns) < 1e-12);
//! assert!((annualize(0.01, 12.0) - 0.1268).abs() < 1e-4);
//! ```

use thiserror::Error;

pub mod moving_averages;
pub mod returns;
pub mod scaling;
pub mod statistics;

pub use moving_averages::{ema, simple_moving_average, ExponentialMovingAverage};
pub use returns::{annualize, calculate_returns, calculate_volatility, sharpe_ratio};
pub use scaling::{decimal_factor, safe_div, scale_by_decimals, scale_by_decimals_checked};
pub use statistics::{mean, stdev};

/// Errors raised by the checked conversion helpers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Decimal exponent {0} overflows f64")]
    DecimalsOutOfRange(u32),
}

/// Result type for the checked math helpers
pub type Result<T> = std::result::Result<T, MathError>;
