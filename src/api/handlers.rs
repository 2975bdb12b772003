//! HTTP request handlers for the HR Reporting Engine API.
//!
//! Each endpoint accepts a data snapshot, runs the pure computation layer
//! over it, and returns the derived report views. Handlers log with a
//! per-request correlation id; record-level anomalies are skipped at the
//! conversion boundary and never fail the request.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::computation::{
    attendance_rows, attendance_time_series, calculate_balances, department_payroll_rollup,
    leave_rows, leave_type_rollup, matches_search, missing_month_records, payroll_rows,
    reconcile, upcoming_holidays, DateRange,
};
use crate::models::{month_key, Employee};

use super::request::{
    convert_attendance, convert_holidays, convert_leaves, convert_payments,
    AttendanceReportRequest, HolidayCalendarRequest, LeaveReportRequest, PayrollReportRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, AttendanceReportResponse, EmployeeBalances,
    HolidayCalendarResponse, LeaveReportResponse, PayrollReportResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/attendance", post(attendance_report_handler))
        .route("/reports/leave", post(leave_report_handler))
        .route("/reports/payroll", post(payroll_report_handler))
        .route("/dashboard/holidays", post(holiday_calendar_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Applies the free-text search filter to a converted roster.
fn filter_roster(employees: Vec<Employee>, search: Option<&str>) -> Vec<Employee> {
    match search {
        Some(query) => employees
            .into_iter()
            .filter(|e| matches_search(e, query))
            .collect(),
        None => employees,
    }
}

/// Handler for `POST /reports/attendance`.
async fn attendance_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let range = match DateRange::new(request.from, request.to) {
        Ok(range) => range,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected report range");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let policy = state.policy().policy();
    let employees = filter_roster(
        request.employees.into_iter().map(Into::into).collect(),
        request.search.as_deref(),
    );
    let attendance = convert_attendance(request.attendance);
    let leaves = convert_leaves(request.leave_requests);

    let views = reconcile(
        &employees,
        &attendance,
        &leaves,
        range,
        request.department_id.as_deref(),
    );
    let rows = attendance_rows(&views, range, policy);

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let time_series = attendance_time_series(&attendance, today, policy);

    info!(
        correlation_id = %correlation_id,
        employees = rows.len(),
        records = attendance.len(),
        "Attendance report computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(AttendanceReportResponse { rows, time_series }),
    )
        .into_response()
}

/// Handler for `POST /reports/leave`.
async fn leave_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let range = match DateRange::new(request.from, request.to) {
        Ok(range) => range,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected report range");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let policy = state.policy().policy();
    let employees = filter_roster(
        request.employees.into_iter().map(Into::into).collect(),
        request.search.as_deref(),
    );
    let leaves = convert_leaves(request.leave_requests);

    let views = reconcile(
        &employees,
        &[],
        &leaves,
        range,
        request.department_id.as_deref(),
    );
    let rows = leave_rows(&views);
    let type_counts = leave_type_rollup(&leaves);

    // Balances always run over the employee's full request history, not the
    // range-filtered view.
    let balances = views
        .iter()
        .map(|view| {
            let own_requests: Vec<_> = leaves
                .iter()
                .filter(|l| l.employee_id == view.employee.id)
                .cloned()
                .collect();
            EmployeeBalances {
                employee_id: view.employee.id.clone(),
                summary: calculate_balances(&own_requests, &policy.leave_quotas),
            }
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        employees = rows.len(),
        requests = leaves.len(),
        "Leave report computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(LeaveReportResponse {
            rows,
            type_counts,
            balances,
        }),
    )
        .into_response()
}

/// Handler for `POST /reports/payroll`.
async fn payroll_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let policy = state.policy().policy();
    let employees = filter_roster(
        request.employees.into_iter().map(Into::into).collect(),
        request.search.as_deref(),
    );
    let payments = convert_payments(request.payments);

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let month = request.month.unwrap_or_else(|| month_key(today));

    let rows = payroll_rows(&employees, &policy.payroll_rates);
    let department_rollup = department_payroll_rollup(&rows, &employees, &request.departments);
    let to_create = missing_month_records(&employees, &payments, &month, &policy.payroll_rates);

    info!(
        correlation_id = %correlation_id,
        employees = rows.len(),
        month = %month,
        to_create = to_create.len(),
        "Payroll report computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(PayrollReportResponse {
            rows,
            department_rollup,
            to_create,
        }),
    )
        .into_response()
}

/// Handler for `POST /dashboard/holidays`.
async fn holiday_calendar_handler(
    State(_state): State<AppState>,
    payload: Result<Json<HolidayCalendarRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing holiday calendar request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let holidays = convert_holidays(request.holidays);
    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let holidays = upcoming_holidays(&holidays, today, request.limit);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(HolidayCalendarResponse { holidays }),
    )
        .into_response()
}
