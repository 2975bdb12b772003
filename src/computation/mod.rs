//! Computation logic for the HR Reporting Engine.
//!
//! This module contains the four pure sub-components of the derived-record
//! layer: the payroll formula engine, the leave balance calculator, the
//! attendance/leave reconciler, and the report aggregator, plus the shared
//! business-day and safe date-parsing utilities. Every function here is a
//! pure function of its snapshot inputs; no state is held across calls.

mod balance;
mod business_days;
mod payroll;
mod reconcile;
mod report;

pub use balance::{calculate_balances, leave_duration, leave_used};
pub use business_days::{business_days_between, is_business_day, parse_date, parse_datetime};
pub use payroll::calculate_payroll;
pub use reconcile::{classify_day, is_late, reconcile, DateRange, DayClassification};
pub use report::{
    attendance_rows, attendance_time_series, department_payroll_rollup, leave_rows,
    leave_type_rollup, matches_search, missing_month_records, payroll_rows, upcoming_holidays,
};
