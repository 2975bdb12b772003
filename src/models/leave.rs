//! Leave request model and related enums.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of a leave request.
///
/// `Halfday` requests span a single date and consume half-day units rather
/// than business days; all other types consume business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Annual (vacation) leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Personal leave.
    Personal,
    /// A half-day absence; start and end date are the same day.
    Halfday,
    /// Unpaid leave, no quota applies.
    Unpaid,
    /// Any other leave category.
    Other,
}

/// The approval status of a leave request.
///
/// Only approved requests count toward balances and attendance
/// reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; consumes balance and reconciles against attendance.
    Approved,
    /// Rejected; ignored by all computations.
    Rejected,
}

/// A leave request for one employee over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee this request belongs to.
    pub employee_id: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive). Equals `start_date` for halfday leave.
    pub end_date: NaiveDate,
    /// The approval status of the request.
    pub status: LeaveStatus,
    /// The employee who approved or rejected the request, if decided.
    #[serde(default)]
    pub approver_id: Option<String>,
}

impl LeaveRequest {
    /// Returns true if this request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns true if the request's `[start_date, end_date]` interval
    /// contains the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::{LeaveRequest, LeaveStatus, LeaveType};
    /// use chrono::NaiveDate;
    ///
    /// let request = LeaveRequest {
    ///     employee_id: "emp_001".to_string(),
    ///     leave_type: LeaveType::Annual,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
    ///     status: LeaveStatus::Approved,
    ///     approver_id: None,
    /// };
    /// assert!(request.covers(NaiveDate::from_ymd_opt(2025, 2, 4).unwrap()));
    /// assert!(!request.covers(NaiveDate::from_ymd_opt(2025, 2, 6).unwrap()));
    /// ```
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
