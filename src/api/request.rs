//! Request types for the HR Reporting Engine API.
//!
//! Snapshot records arrive with string-encoded dates exactly as the storage
//! collaborator serialized them. Conversion to domain types goes through the
//! safe-parse utilities: a record with an unparseable date is skipped with a
//! warning rather than failing the request, and an unparseable timestamp
//! degrades to `None`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::computation::{parse_date, parse_datetime};
use crate::models::{
    AttendanceRecord, AttendanceStatus, Department, Employee, Holiday, LeaveRequest, LeaveStatus,
    LeaveType, PaymentRecord, PaymentStatus, Role,
};

/// Employee snapshot record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's login username.
    pub username: String,
    /// The employee's email address.
    pub email: String,
    /// The employee's job position.
    pub position: String,
    /// Reference to the employee's department, if assigned.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Monthly base salary in whole currency units.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// The access role for this employee.
    pub role: Role,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            username: req.username,
            email: req.email,
            position: req.position,
            department_id: req.department_id,
            salary: req.salary,
            role: req.role,
        }
    }
}

/// Attendance snapshot record with string-encoded dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Check-in timestamp (`YYYY-MM-DDTHH:MM:SS`), if any.
    #[serde(default)]
    pub check_in: Option<String>,
    /// Check-out timestamp, if any.
    #[serde(default)]
    pub check_out: Option<String>,
    /// Whether the employee was present or absent.
    pub status: AttendanceStatus,
}

/// Leave request snapshot record with string-encoded dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestRequest {
    /// The employee this request belongs to.
    pub employee_id: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last day of leave (`YYYY-MM-DD`).
    pub end_date: String,
    /// The approval status of the request.
    pub status: LeaveStatus,
    /// The employee who decided the request, if any.
    #[serde(default)]
    pub approver_id: Option<String>,
}

/// Holiday snapshot record with a string-encoded date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday (`YYYY-MM-DD`).
    pub date: String,
    /// The name of the holiday.
    pub name: String,
}

/// Payment snapshot record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecordRequest {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The month key, e.g. `"Jan 2025"`.
    pub month: String,
    /// The computed net salary amount.
    pub net_amount: Decimal,
    /// Whether the payment has been made.
    pub status: PaymentStatus,
    /// The date the payment was made (`YYYY-MM-DD`), if paid.
    #[serde(default)]
    pub payment_date: Option<String>,
    /// The payment mode, if paid.
    #[serde(default)]
    pub payment_mode: Option<String>,
    /// An external reference number, if any.
    #[serde(default)]
    pub reference_number: Option<String>,
}

/// Request body for `POST /reports/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReportRequest {
    /// The employee roster snapshot.
    pub employees: Vec<EmployeeRequest>,
    /// The attendance snapshot.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecordRequest>,
    /// The leave request snapshot.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequestRequest>,
    /// First day of the report range (inclusive).
    pub from: NaiveDate,
    /// Last day of the report range (inclusive).
    pub to: NaiveDate,
    /// Restrict the report to one department.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Free-text employee filter.
    #[serde(default)]
    pub search: Option<String>,
    /// Anchor for the chart window; defaults to the current date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for `POST /reports/leave`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveReportRequest {
    /// The employee roster snapshot.
    pub employees: Vec<EmployeeRequest>,
    /// The leave request snapshot.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequestRequest>,
    /// First day of the report range (inclusive).
    pub from: NaiveDate,
    /// Last day of the report range (inclusive).
    pub to: NaiveDate,
    /// Restrict the report to one department.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Free-text employee filter.
    #[serde(default)]
    pub search: Option<String>,
}

/// Request body for `POST /reports/payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollReportRequest {
    /// The employee roster snapshot.
    pub employees: Vec<EmployeeRequest>,
    /// The department snapshot.
    #[serde(default)]
    pub departments: Vec<Department>,
    /// The payment record snapshot.
    #[serde(default)]
    pub payments: Vec<PaymentRecordRequest>,
    /// The month key being viewed, e.g. `"Jan 2025"`; defaults to the month
    /// of `today`.
    #[serde(default)]
    pub month: Option<String>,
    /// Anchor for the default month key; defaults to the current date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Free-text employee filter.
    #[serde(default)]
    pub search: Option<String>,
}

/// Request body for `POST /dashboard/holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayCalendarRequest {
    /// The holiday snapshot.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
    /// Anchor date; defaults to the current date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Maximum number of holidays to return.
    #[serde(default = "default_holiday_limit")]
    pub limit: usize,
}

fn default_holiday_limit() -> usize {
    5
}

/// Converts attendance snapshot records, skipping those with unparseable
/// dates.
pub fn convert_attendance(records: Vec<AttendanceRecordRequest>) -> Vec<AttendanceRecord> {
    records
        .into_iter()
        .filter_map(|req| {
            let Some(date) = parse_date(&req.date) else {
                warn!(employee_id = %req.employee_id, date = %req.date,
                    "Skipping attendance record with unparseable date");
                return None;
            };
            Some(AttendanceRecord {
                employee_id: req.employee_id,
                date,
                check_in: req.check_in.as_deref().and_then(parse_datetime),
                check_out: req.check_out.as_deref().and_then(parse_datetime),
                status: req.status,
            })
        })
        .collect()
}

/// Converts leave snapshot records, skipping those with unparseable dates.
pub fn convert_leaves(records: Vec<LeaveRequestRequest>) -> Vec<LeaveRequest> {
    records
        .into_iter()
        .filter_map(|req| {
            let (Some(start_date), Some(end_date)) =
                (parse_date(&req.start_date), parse_date(&req.end_date))
            else {
                warn!(employee_id = %req.employee_id,
                    start_date = %req.start_date, end_date = %req.end_date,
                    "Skipping leave request with unparseable dates");
                return None;
            };
            Some(LeaveRequest {
                employee_id: req.employee_id,
                leave_type: req.leave_type,
                start_date,
                end_date,
                status: req.status,
                approver_id: req.approver_id,
            })
        })
        .collect()
}

/// Converts holiday snapshot records, skipping those with unparseable dates.
pub fn convert_holidays(records: Vec<HolidayRequest>) -> Vec<Holiday> {
    records
        .into_iter()
        .filter_map(|req| {
            let Some(date) = parse_date(&req.date) else {
                warn!(name = %req.name, date = %req.date,
                    "Skipping holiday with unparseable date");
                return None;
            };
            Some(Holiday {
                date,
                name: req.name,
            })
        })
        .collect()
}

/// Converts payment snapshot records. An unparseable payment date degrades
/// to `None`; the record itself is kept.
pub fn convert_payments(records: Vec<PaymentRecordRequest>) -> Vec<PaymentRecord> {
    records
        .into_iter()
        .map(|req| PaymentRecord {
            employee_id: req.employee_id,
            month: req.month,
            net_amount: req.net_amount,
            status: req.status,
            payment_date: req.payment_date.as_deref().and_then(parse_date),
            payment_mode: req.payment_mode,
            reference_number: req.reference_number,
        })
        .collect()
}
