//! Quota usage summaries

use std::fmt;

/// Usage of one quota-limited resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaUsage {
    pub usage: u64,
    pub limit: u64,
}

impl QuotaUsage {
    #[must_use]
    pub fn new(usage: u64, limit: u64) -> Self {
        Self { usage, limit }
    }

    /// Fraction of the limit in use, `None` when there is no limit
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> Option<f64> {
        (self.limit > 0).then(|| self.usage as f64 / self.limit as f64)
    }

    /// Whole percentage of the limit in use, rounded down
    #[must_use]
    pub fn percent(&self) -> Option<u64> {
        if self.limit == 0 {
            return None;
        }
        let percent = u128::from(self.usage) * 100 / u128::from(self.limit);
        Some(u64::try_from(percent).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for QuotaUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(percent) => write!(f, "{}/{} ({percent}%)", self.usage, self.limit),
            None => write!(f, "{} used", self.usage),
        }
    }
}
