//! Domain models for the HR Reporting Engine.
//!
//! These types describe the snapshots the engine consumes (employees,
//! attendance records, leave requests, holidays, payment records) and the
//! derived view records it produces. The engine never mutates snapshot data.

mod attendance;
mod employee;
mod holiday;
mod leave;
mod payment;
mod report;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Department, Employee, Role};
pub use holiday::Holiday;
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use payment::{month_key, PaymentRecord, PaymentStatus};
pub use report::{
    AttendanceReportRow, DailyAttendancePoint, DepartmentPayroll, EmployeeAttendanceView,
    LeaveBalance, LeaveBalanceSummary, LeaveReportRow, LeaveTypeCounts, PayrollBreakdown,
    PayrollReportRow,
};
