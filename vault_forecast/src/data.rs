//! Price series and vault snapshots, plus loaders for exported files
//!
//! The forecasting core only ever sees plain in-memory slices. `DataLoader`
//! turns CSV exports produced by the feed and vault readers into those
//! slices; it performs no network access.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;
use vault_math::{safe_div, scale_by_decimals_checked};

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 86_400_000;

/// A timestamped price sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// Epoch milliseconds
    pub timestamp: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: i64, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Build a point from a fixed-point feed value with `decimals` places
    pub fn from_raw<T: ToPrimitive>(timestamp: i64, raw: T, decimals: u32) -> Result<Self> {
        Ok(Self::new(timestamp, scale_by_decimals_checked(raw, decimals)?))
    }

    /// Timestamp as a UTC datetime, `None` if out of chrono's range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Timestamp `days` whole days after this point
    pub fn days_after(&self, days: u32) -> i64 {
        self.timestamp
            .saturating_add(i64::from(days).saturating_mul(MS_PER_DAY))
    }
}

/// Price-per-share of a vault at a moment in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub price_per_share: f64,
    /// Epoch milliseconds
    pub updated_at: i64,
}

impl Snapshot {
    pub fn new(price_per_share: f64, updated_at: i64) -> Self {
        Self {
            price_per_share,
            updated_at,
        }
    }

    /// Derive price-per-share from raw vault totals.
    ///
    /// A vault with no outstanding shares reports a price of `0.0`.
    pub fn from_vault_state<T: ToPrimitive>(
        total_assets: T,
        total_shares: T,
        decimals: u32,
        updated_at: i64,
    ) -> Result<Self> {
        let assets = scale_by_decimals_checked(total_assets, decimals)?;
        let shares = scale_by_decimals_checked(total_shares, decimals)?;

        Ok(Self::new(safe_div(assets, shares), updated_at))
    }
}

/// Prices of a series, in order
pub fn prices(series: &[PricePoint]) -> Vec<f64> {
    series.iter().map(|p| p.price).collect()
}

/// Loader for exported price and snapshot files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a `timestamp,price` CSV file
    pub fn price_points_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PricePoint>> {
        let file = File::open(path)?;
        Self::price_points_from_reader(file)
    }

    /// Read `timestamp,price` CSV records
    pub fn price_points_from_reader<R: Read>(reader: R) -> Result<Vec<PricePoint>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut points = Vec::new();

        for (index, record) in csv_reader.deserialize::<PricePoint>().enumerate() {
            let point = record?;
            check_price(index + 1, "price", point.price)?;
            points.push(point);
        }

        Ok(points)
    }

    /// Load an `updatedAt,pricePerShare` CSV file
    pub fn snapshots_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Snapshot>> {
        let file = File::open(path)?;
        Self::snapshots_from_reader(file)
    }

    /// Read `updatedAt,pricePerShare` CSV records
    pub fn snapshots_from_reader<R: Read>(reader: R) -> Result<Vec<Snapshot>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut snapshots = Vec::new();

        for (index, record) in csv_reader.deserialize::<Snapshot>().enumerate() {
            let snapshot = record?;
            check_price(index + 1, "pricePerShare", snapshot.price_per_share)?;
            snapshots.push(snapshot);
        }

        Ok(snapshots)
    }
}

fn check_price(record: usize, column: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }

    warn!(record, column, value, "rejecting record with invalid price");
    Err(ForecastError::DataError(format!(
        "Record {}: {} must be a finite non-negative number, got {}",
        record, column, value
    )))
}
