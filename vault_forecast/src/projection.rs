//! Outcome of a projection: a value, or a record of why there was not enough
//! history to produce one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a projection could not be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum Shortfall {
    /// The input held fewer samples than the model needs
    TooFewPoints { required: usize, available: usize },
    /// The snapshots span no time, so no rate can be derived
    NoElapsedTime,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::TooFewPoints {
                required,
                available,
            } => write!(
                f,
                "Not enough history yet: need {} data points, have {}",
                required, available
            ),
            Shortfall::NoElapsedTime => {
                write!(f, "Not enough history yet: snapshots span no elapsed time")
            }
        }
    }
}

/// Result of a projection.
///
/// `InsufficientData` is an expected outcome for young vaults and short feeds,
/// not an error, and is kept distinct from a legitimate zero.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Projection<T> {
    Ready(T),
    InsufficientData(Shortfall),
}

impl<T> Projection<T> {
    pub(crate) fn too_few(required: usize, available: usize) -> Self {
        Projection::InsufficientData(Shortfall::TooFewPoints {
            required,
            available,
        })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Projection::Ready(_))
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Projection::InsufficientData(_))
    }

    /// Consume the projection, keeping the value if there is one
    pub fn ready(self) -> Option<T> {
        match self {
            Projection::Ready(value) => Some(value),
            Projection::InsufficientData(_) => None,
        }
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Projection::Ready(value) => Some(value),
            Projection::InsufficientData(_) => None,
        }
    }

    pub fn shortfall(&self) -> Option<Shortfall> {
        match self {
            Projection::Ready(_) => None,
            Projection::InsufficientData(shortfall) => Some(*shortfall),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Projection<U> {
        match self {
            Projection::Ready(value) => Projection::Ready(f(value)),
            Projection::InsufficientData(shortfall) => Projection::InsufficientData(shortfall),
        }
    }
}
