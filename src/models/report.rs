//! Derived view and report-row models.
//!
//! This module contains the transient record types produced by the
//! computation layer: reconciled per-employee views, report rows, and the
//! grouped rollups consumed by table and chart rendering. None of these are
//! ever persisted.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, Employee, LeaveRequest};

/// The full payroll breakdown derived from a base salary.
///
/// All figures are fractional; display layers round for presentation, the
/// engine itself does not.
///
/// # Example
///
/// ```
/// use hr_engine::computation::calculate_payroll;
/// use hr_engine::config::PayrollRates;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_payroll(Decimal::from(100000), &PayrollRates::default());
/// assert_eq!(breakdown.gross_salary, Decimal::from(140000));
/// assert_eq!(breakdown.net_salary, Decimal::from(114000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The base salary the breakdown was derived from.
    pub base_salary: Decimal,
    /// Base salary plus the flat allowance.
    pub gross_salary: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Provident fund deduction.
    pub provident_fund: Decimal,
    /// Tax deducted at source, applied to the gross salary.
    pub tds: Decimal,
    /// Gross salary minus provident fund and TDS.
    pub net_salary: Decimal,
}

/// Consumption against one leave-type quota.
///
/// `remaining` may go negative when a type is over-consumed; the engine does
/// not clamp it, so over-draft stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The annual quota for this leave type.
    pub total: i64,
    /// Units consumed by approved requests.
    pub used: i64,
    /// `total - used`; negative when over-consumed.
    pub remaining: i64,
}

/// Per-type leave balances for one employee.
///
/// Quotas apply to annual, sick, personal, and halfday leave; unpaid and
/// other leave have no quota bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalanceSummary {
    /// Annual leave balance (business days).
    pub annual: LeaveBalance,
    /// Sick leave balance (business days).
    pub sick: LeaveBalance,
    /// Personal leave balance (business days).
    pub personal: LeaveBalance,
    /// Halfday balance (half-day units, one per approved request).
    pub halfday: LeaveBalance,
}

/// A reconciled per-employee view over a report date range.
///
/// One view is produced for every employee in scope, including employees
/// with no attendance data, so report tables always show the full roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAttendanceView {
    /// The employee this view describes.
    pub employee: Employee,
    /// Attendance records whose date falls within the report range.
    pub records: Vec<AttendanceRecord>,
    /// Approved leave requests overlapping the report range.
    pub leave_requests: Vec<LeaveRequest>,
}

/// A per-employee attendance report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReportRow {
    /// The employee's unique identifier.
    pub employee_id: String,
    /// The employee's full name.
    pub employee_name: String,
    /// Number of days with a present record.
    pub present_days: u32,
    /// Number of days with an absent record.
    pub absent_days: u32,
    /// Number of present days with a late check-in.
    pub late_days: u32,
    /// Days with no attendance record but an overlapping approved leave.
    pub on_leave_days: u32,
    /// Mean check-in clock time across present records; `None` when the
    /// employee has no check-ins in range (rendered as "N/A").
    pub average_check_in: Option<NaiveTime>,
}

/// A per-employee leave report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveReportRow {
    /// The employee's unique identifier.
    pub employee_id: String,
    /// The employee's full name.
    pub employee_name: String,
    /// Count of approved annual requests.
    pub annual_requests: u32,
    /// Count of approved sick requests.
    pub sick_requests: u32,
    /// Count of approved unpaid requests.
    pub unpaid_requests: u32,
    /// Total approved leave days across all types (business days; halfday
    /// requests count as one each).
    pub total_leave_days: i64,
}

/// A per-employee payroll report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReportRow {
    /// The employee's unique identifier.
    pub employee_id: String,
    /// The employee's full name.
    pub employee_name: String,
    /// The full payroll breakdown for the employee's base salary.
    pub breakdown: PayrollBreakdown,
}

/// Net salary summed per department, for the payroll chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPayroll {
    /// The department name, or `"Unassigned"` when unresolved.
    pub department: String,
    /// Sum of net salaries for employees in this department.
    pub net_total: Decimal,
}

/// Approved-request counts per fixed leave-type bucket, for the leave pie
/// chart.
///
/// Halfday requests have no bucket here and are dropped from the breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeCounts {
    /// Approved annual requests.
    pub annual: u32,
    /// Approved sick requests.
    pub sick: u32,
    /// Approved personal requests.
    pub personal: u32,
    /// Approved unpaid requests.
    pub unpaid: u32,
    /// Approved requests of any other type.
    pub other: u32,
}

impl LeaveTypeCounts {
    /// Sum of all five buckets.
    pub fn total(&self) -> u32 {
        self.annual + self.sick + self.personal + self.unpaid + self.other
    }
}

/// One day in the attendance time-series chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendancePoint {
    /// The calendar date of this point.
    pub date: NaiveDate,
    /// Present records across all employees on this date.
    pub present: u32,
    /// Absent records across all employees on this date.
    pub absent: u32,
    /// Late check-ins across all employees on this date.
    pub late: u32,
}
