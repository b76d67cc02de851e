//! Period Series Value Objects

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::aggregation::value_objects::PerformanceStats;
use crate::domain::shared::TraderName;

/// Bucket size of a progress series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodGrouping {
    /// One bucket per trade date.
    #[default]
    Daily,
    /// One bucket per ISO week, keyed by its Monday.
    Weekly,
    /// One bucket per calendar month, keyed by its first day.
    Monthly,
}

impl PeriodGrouping {
    /// First day of the bucket containing `date`.
    #[must_use]
    pub fn period_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Weekly => date
                .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
                .unwrap_or(date),
            Self::Monthly => date.with_day(1).unwrap_or(date),
        }
    }
}

/// Statistics of one trader over one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Trader name.
    pub trader: TraderName,
    /// First day of the period.
    pub period_start: NaiveDate,
    /// Statistics of the trades dated inside the period.
    #[serde(flatten)]
    pub stats: PerformanceStats,
}
