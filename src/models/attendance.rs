//! Attendance record model.
//!
//! An attendance record is created on check-in and mutated on check-out by
//! the storage collaborator; the engine only reads these rows.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The stored status of an attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee checked in on this date.
    Present,
    /// The employee was marked absent on this date.
    Absent,
}

/// A single attendance row for one employee on one calendar date.
///
/// Upstream guarantees at most one record per employee per date; the engine
/// does not defend against duplicates (see the reconciler docs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// Check-in timestamp, set when the record is created.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Check-out timestamp, set when the employee checks out.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Whether the employee was present or absent.
    pub status: AttendanceStatus,
}
