//! Period returns, volatility and compounding

use crate::scaling::safe_div;
use crate::statistics::stdev;

/// Simple period returns `(p[i] - p[i-1]) / p[i-1]`.
///
/// The result has one element fewer than `prices`, and is empty for fewer
/// than two prices.
pub fn calculate_returns(prices: &[f64]) -> Vec<f64> {
    if prices.len() < 2 {
        return Vec::new();
    }

    prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// Volatility of a return series, measured as its sample standard deviation.
pub fn calculate_volatility(returns: &[f64]) -> f64 {
    stdev(returns)
}

/// Compound a per-period rate over a year: `(1 + rate)^periods - 1`.
pub fn annualize(rate: f64, periods_per_year: f64) -> f64 {
    (1.0 + rate).powf(periods_per_year) - 1.0
}

/// Return per unit of volatility, `0.0` when volatility is zero.
pub fn sharpe_ratio(expected_return: f64, volatility: f64) -> f64 {
    safe_div(expected_return, volatility)
}
