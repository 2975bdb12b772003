//! Attendance/leave reconciliation.
//!
//! Combines raw attendance rows and approved leave requests into one view
//! per employee for a report date range, and classifies individual days as
//! present, absent, or on-leave. Days with neither a record nor overlapping
//! approved leave produce no classification at all.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, Employee, EmployeeAttendanceView, LeaveRequest,
};

/// An inclusive report date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub from: NaiveDate,
    /// Last day of the range (inclusive).
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `from > to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::computation::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let from = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
    /// let to = NaiveDate::from_ymd_opt(2025, 2, 7).unwrap();
    /// assert!(DateRange::new(from, to).is_ok());
    /// assert!(DateRange::new(to, from).is_err());
    /// ```
    pub fn new(from: NaiveDate, to: NaiveDate) -> EngineResult<Self> {
        if from > to {
            return Err(EngineError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Returns true if the date falls within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Iterates the days of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }
}

/// The presence classification of one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClassification {
    /// An attendance record with present status exists for the day.
    Present {
        /// Whether the check-in was after the lateness threshold.
        late: bool,
    },
    /// An attendance record with absent status exists for the day.
    Absent,
    /// No attendance record, but an approved leave interval overlaps the
    /// day. Reported separately from present/absent counts.
    OnLeave,
}

/// Returns true if a check-in timestamp is late.
///
/// A check-in is late when its clock time is strictly after the threshold:
/// at a 09:00:00 threshold, 09:00:00 itself is on-time and 09:00:01 is late.
///
/// # Examples
///
/// ```
/// use hr_engine::computation::is_late;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let threshold = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let day = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
///
/// assert!(!is_late(day.and_hms_opt(8, 59, 59).unwrap(), threshold));
/// assert!(!is_late(day.and_hms_opt(9, 0, 0).unwrap(), threshold));
/// assert!(is_late(day.and_hms_opt(9, 0, 1).unwrap(), threshold));
/// ```
pub fn is_late(check_in: NaiveDateTime, threshold: NaiveTime) -> bool {
    check_in.time() > threshold
}

/// Classifies a single day for one employee.
///
/// `records` and `leaves` must already be scoped to the employee. A present
/// record wins over an absent record for the same date; approved leave is
/// consulted only when no record exists. Returns `None` when the day has no
/// entry at all.
pub fn classify_day(
    records: &[AttendanceRecord],
    leaves: &[LeaveRequest],
    date: NaiveDate,
    late_after: NaiveTime,
) -> Option<DayClassification> {
    let day_records: Vec<&AttendanceRecord> =
        records.iter().filter(|r| r.date == date).collect();

    if let Some(present) = day_records
        .iter()
        .find(|r| r.status == AttendanceStatus::Present)
    {
        let late = present
            .check_in
            .is_some_and(|check_in| is_late(check_in, late_after));
        return Some(DayClassification::Present { late });
    }

    if day_records
        .iter()
        .any(|r| r.status == AttendanceStatus::Absent)
    {
        return Some(DayClassification::Absent);
    }

    if leaves.iter().any(|l| l.is_approved() && l.covers(date)) {
        return Some(DayClassification::OnLeave);
    }

    None
}

/// Produces one reconciled view per employee in scope.
///
/// Employees are optionally pre-filtered by department. Each view carries
/// the attendance records whose date falls within the range and the approved
/// leave requests whose interval overlaps the range. Employees with no
/// matching data still yield a view with empty lists, so report tables show
/// the full roster.
///
/// Duplicate attendance records for one date are all included; the at-most-
/// one-per-day invariant is owned by the storage layer and a violation
/// double-counts that day in downstream tallies.
pub fn reconcile(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRequest],
    range: DateRange,
    department_id: Option<&str>,
) -> Vec<EmployeeAttendanceView> {
    employees
        .iter()
        .filter(|e| match department_id {
            Some(dept) => e.department_id.as_deref() == Some(dept),
            None => true,
        })
        .map(|employee| {
            let records: Vec<AttendanceRecord> = attendance
                .iter()
                .filter(|r| r.employee_id == employee.id && range.contains(r.date))
                .cloned()
                .collect();

            let leave_requests: Vec<LeaveRequest> = leaves
                .iter()
                .filter(|l| {
                    l.employee_id == employee.id
                        && l.is_approved()
                        && l.start_date <= range.to
                        && l.end_date >= range.from
                })
                .cloned()
                .collect();

            EmployeeAttendanceView {
                employee: employee.clone(),
                records,
                leave_requests,
            }
        })
        .collect()
}
