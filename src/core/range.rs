use serde::{Deserialize, Serialize};

use crate::core::clip;
use crate::error::{MarkerError, MarkerResult};

/// Closed interval of data values currently visible on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAxisRange")]
pub struct AxisRange {
    lower: f64,
    upper: f64,
}

impl AxisRange {
    pub fn new(lower: f64, upper: f64) -> MarkerResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(MarkerError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        clip::contains(value, self)
    }

    #[must_use]
    pub fn intersects(self, start: f64, end: f64) -> bool {
        clip::intersects(start, end, self)
    }
}

#[derive(Deserialize)]
struct RawAxisRange {
    lower: f64,
    upper: f64,
}

impl TryFrom<RawAxisRange> for AxisRange {
    type Error = MarkerError;

    fn try_from(raw: RawAxisRange) -> MarkerResult<Self> {
        Self::new(raw.lower, raw.upper)
    }
}
