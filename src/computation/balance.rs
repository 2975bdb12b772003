//! Leave balance calculator.
//!
//! Computes used and remaining leave per type for one employee against the
//! configured annual quotas. Only approved requests consume balance. Halfday
//! requests consume exactly one half-day unit each; every other type
//! consumes the business-day count of its inclusive date span (weekends
//! excluded, holidays charged).

use crate::config::LeaveQuotas;
use crate::models::{LeaveBalance, LeaveBalanceSummary, LeaveRequest, LeaveType};

use super::business_days::business_days_between;

/// Returns the units one request consumes: 1 for halfday, otherwise the
/// business-day count of `[start_date, end_date]`.
pub fn leave_duration(request: &LeaveRequest) -> i64 {
    match request.leave_type {
        LeaveType::Halfday => 1,
        _ => business_days_between(request.start_date, request.end_date),
    }
}

/// Sums consumption of the given type across approved requests.
///
/// # Examples
///
/// ```
/// use hr_engine::computation::leave_used;
/// use hr_engine::models::{LeaveRequest, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let request = LeaveRequest {
///     employee_id: "emp_001".to_string(),
///     leave_type: LeaveType::Annual,
///     // Wednesday through Friday: three business days
///     start_date: NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 2, 7).unwrap(),
///     status: LeaveStatus::Approved,
///     approver_id: None,
/// };
/// assert_eq!(leave_used(&[request], LeaveType::Annual), 3);
/// ```
pub fn leave_used(requests: &[LeaveRequest], leave_type: LeaveType) -> i64 {
    requests
        .iter()
        .filter(|r| r.is_approved() && r.leave_type == leave_type)
        .map(leave_duration)
        .sum()
}

/// Computes the per-type balance summary for one employee's requests.
///
/// `remaining = total - used` and is not clamped; over-consumption shows up
/// as a negative remainder.
pub fn calculate_balances(requests: &[LeaveRequest], quotas: &LeaveQuotas) -> LeaveBalanceSummary {
    let balance = |leave_type: LeaveType, total: i64| {
        let used = leave_used(requests, leave_type);
        LeaveBalance {
            total,
            used,
            remaining: total - used,
        }
    };

    LeaveBalanceSummary {
        annual: balance(LeaveType::Annual, quotas.annual),
        sick: balance(LeaveType::Sick, quotas.sick),
        personal: balance(LeaveType::Personal, quotas.personal),
        halfday: balance(LeaveType::Halfday, quotas.halfday),
    }
}
