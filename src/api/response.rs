//! Response types for the HR Reporting Engine API.
//!
//! This module defines the report response payloads along with the error
//! response structures and error handling for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    AttendanceReportRow, DailyAttendancePoint, DepartmentPayroll, Holiday, LeaveBalanceSummary,
    LeaveReportRow, LeaveTypeCounts, PaymentRecord, PayrollReportRow,
};

/// Response body for `POST /reports/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReportResponse {
    /// One row per employee in scope.
    pub rows: Vec<AttendanceReportRow>,
    /// The chart window time series (oldest day first).
    pub time_series: Vec<DailyAttendancePoint>,
}

/// Per-employee leave balances in a leave report response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeBalances {
    /// The employee's unique identifier.
    pub employee_id: String,
    /// The per-type balance summary.
    pub summary: LeaveBalanceSummary,
}

/// Response body for `POST /reports/leave`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveReportResponse {
    /// One row per employee in scope.
    pub rows: Vec<LeaveReportRow>,
    /// Approved-request counts for the pie chart (halfday dropped).
    pub type_counts: LeaveTypeCounts,
    /// Per-employee quota balances, computed from the full request list.
    pub balances: Vec<EmployeeBalances>,
}

/// Response body for `POST /reports/payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollReportResponse {
    /// One row per employee in scope.
    pub rows: Vec<PayrollReportRow>,
    /// Net salary summed per department for the chart.
    pub department_rollup: Vec<DepartmentPayroll>,
    /// Payment records the storage layer should lazily create for the
    /// requested month.
    pub to_create: Vec<PaymentRecord>,
}

/// Response body for `POST /dashboard/holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayCalendarResponse {
    /// Upcoming holidays, soonest first.
    pub holidays: Vec<Holiday>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidDateRange { from, to } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    format!("Invalid date range: {} is after {}", from, to),
                    "The report range start must not be after its end",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_date_range_maps_to_bad_request() {
        let engine_error = EngineError::InvalidDateRange {
            from: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE_RANGE");
    }

    #[test]
    fn test_config_error_maps_to_internal_server_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
