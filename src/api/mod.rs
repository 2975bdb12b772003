//! HTTP API module for the HR Reporting Engine.
//!
//! This module provides the REST endpoints that accept data snapshots and
//! return computed report views.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceReportRequest, HolidayCalendarRequest, LeaveReportRequest, PayrollReportRequest,
};
pub use response::{
    ApiError, AttendanceReportResponse, EmployeeBalances, HolidayCalendarResponse,
    LeaveReportResponse, PayrollReportResponse,
};
pub use state::AppState;
