//! Holiday calendar model.
//!
//! Holidays are stored company-wide and surfaced on the dashboard calendar.
//! They are not subtracted from leave-duration math; only weekends are
//! excluded from business-day counts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named company holiday on a specific calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Republic Day").
    pub name: String,
}
