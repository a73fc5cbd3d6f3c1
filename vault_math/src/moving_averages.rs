//! Moving average calculations
//!
//! - Simple moving average over a trailing window
//! - Exponential moving average seeded at the first observation

/// Exponential Moving Average seeded with the first value it sees
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    alpha: f64,
    current_ema: Option<f64>,
}

impl ExponentialMovingAverage {
    /// Create a new EMA with smoothing factor `alpha`.
    ///
    /// Higher `alpha` weights recent values more heavily. The value is not
    /// range-checked here; callers validate configuration up front.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            current_ema: None,
        }
    }

    /// Fold a new value into the average and return the updated EMA
    pub fn update(&mut self, value: f64) -> f64 {
        let next = match self.current_ema {
            None => value,
            Some(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
        };
        self.current_ema = Some(next);
        next
    }

    /// Current EMA, `None` until the first update
    pub fn value(&self) -> Option<f64> {
        self.current_ema
    }

    /// Smoothing factor
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Reset the EMA, clearing the seed
    pub fn reset(&mut self) {
        self.current_ema = None;
    }
}

/// EMA of a whole series, `None` for an empty slice.
pub fn ema(values: &[f64], alpha: f64) -> Option<f64> {
    let mut average = ExponentialMovingAverage::new(alpha);
    for &value in values {
        average.update(value);
    }
    average.value()
}

/// Mean of the last `window` values, `None` when fewer are available.
pub fn simple_moving_average(values: &[f64], window: usize) -> Option<f64> {
    if values.len() < window {
        return None;
    }

    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}
