//! Report aggregation.
//!
//! Rolls reconciled per-employee views up into report-ready rows and chart
//! series: attendance/leave/payroll tables, the department payroll rollup,
//! the leave-type pie breakdown, the last-7-day attendance time series, the
//! dashboard holiday calendar, and the lazily-created monthly payment
//! records. All functions are pure over their snapshot inputs.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::config::{PayrollRates, PolicyConfig};
use crate::models::{
    AttendanceRecord, AttendanceStatus, AttendanceReportRow, DailyAttendancePoint, Department,
    DepartmentPayroll, Employee, EmployeeAttendanceView, Holiday, LeaveReportRow, LeaveRequest,
    LeaveType, LeaveTypeCounts, PaymentRecord, PaymentStatus, PayrollReportRow,
};

use super::balance::leave_duration;
use super::payroll::calculate_payroll;
use super::reconcile::{classify_day, is_late, DateRange, DayClassification};

/// Label used when an employee's department reference cannot be resolved.
pub const UNASSIGNED_DEPARTMENT: &str = "Unassigned";

/// Builds one attendance report row per reconciled view.
///
/// Present/absent/late counts tally the view's records independently (a
/// duplicate record for one date double-counts, matching the reconciler's
/// pass-through of upstream duplicates). On-leave days are the days in range
/// with no record but an overlapping approved leave. The average check-in is
/// the mean of the full check-in timestamps rendered as a clock time, `None`
/// when there are none.
pub fn attendance_rows(
    views: &[EmployeeAttendanceView],
    range: DateRange,
    policy: &PolicyConfig,
) -> Vec<AttendanceReportRow> {
    views
        .iter()
        .map(|view| {
            let mut present_days = 0u32;
            let mut absent_days = 0u32;
            let mut late_days = 0u32;

            for record in &view.records {
                match record.status {
                    AttendanceStatus::Present => {
                        present_days += 1;
                        if record
                            .check_in
                            .is_some_and(|check_in| is_late(check_in, policy.late_after))
                        {
                            late_days += 1;
                        }
                    }
                    AttendanceStatus::Absent => absent_days += 1,
                }
            }

            let on_leave_days = range
                .days()
                .filter(|day| {
                    classify_day(
                        &view.records,
                        &view.leave_requests,
                        *day,
                        policy.late_after,
                    ) == Some(DayClassification::OnLeave)
                })
                .count() as u32;

            AttendanceReportRow {
                employee_id: view.employee.id.clone(),
                employee_name: view.employee.full_name(),
                present_days,
                absent_days,
                late_days,
                on_leave_days,
                average_check_in: average_check_in(&view.records),
            }
        })
        .collect()
}

/// Mean of the full check-in timestamps, rendered as a clock time.
///
/// The mean runs over epoch seconds, so check-ins spread across dates shift
/// the resulting clock time (two 09:00 check-ins a day apart average to
/// 21:00). Guarded against the empty case: no check-ins yields `None` rather
/// than a division by zero (rendered as "N/A" downstream).
fn average_check_in(records: &[AttendanceRecord]) -> Option<NaiveTime> {
    let timestamps: Vec<i64> = records
        .iter()
        .filter_map(|r| r.check_in)
        .map(|t| t.and_utc().timestamp())
        .collect();

    if timestamps.is_empty() {
        return None;
    }

    let mean = timestamps.iter().sum::<i64>() / timestamps.len() as i64;
    NaiveTime::from_num_seconds_from_midnight_opt(mean.rem_euclid(86_400) as u32, 0)
}

/// Builds one leave report row per reconciled view.
///
/// Counts approved annual, sick, and unpaid requests in the view and sums
/// total leave days across all types (business days; halfday requests count
/// one unit each).
pub fn leave_rows(views: &[EmployeeAttendanceView]) -> Vec<LeaveReportRow> {
    views
        .iter()
        .map(|view| {
            let count_of = |leave_type: LeaveType| {
                view.leave_requests
                    .iter()
                    .filter(|l| l.leave_type == leave_type)
                    .count() as u32
            };

            LeaveReportRow {
                employee_id: view.employee.id.clone(),
                employee_name: view.employee.full_name(),
                annual_requests: count_of(LeaveType::Annual),
                sick_requests: count_of(LeaveType::Sick),
                unpaid_requests: count_of(LeaveType::Unpaid),
                total_leave_days: view.leave_requests.iter().map(leave_duration).sum(),
            }
        })
        .collect()
}

/// Builds one payroll report row per employee, substituting zero for an
/// absent salary.
pub fn payroll_rows(employees: &[Employee], rates: &PayrollRates) -> Vec<PayrollReportRow> {
    employees
        .iter()
        .map(|employee| PayrollReportRow {
            employee_id: employee.id.clone(),
            employee_name: employee.full_name(),
            breakdown: calculate_payroll(employee.base_salary(), rates),
        })
        .collect()
}

/// Sums net salary per department name for the payroll chart.
///
/// An employee whose department reference is absent or does not resolve to a
/// known department lands in the `"Unassigned"` bucket. Buckets are returned
/// sorted by department name.
pub fn department_payroll_rollup(
    rows: &[PayrollReportRow],
    employees: &[Employee],
    departments: &[Department],
) -> Vec<DepartmentPayroll> {
    let department_names: HashMap<&str, &str> = departments
        .iter()
        .map(|d| (d.id.as_str(), d.name.as_str()))
        .collect();

    let employee_departments: HashMap<&str, &str> = employees
        .iter()
        .map(|e| {
            let name = e
                .department_id
                .as_deref()
                .and_then(|id| department_names.get(id).copied())
                .unwrap_or(UNASSIGNED_DEPARTMENT);
            (e.id.as_str(), name)
        })
        .collect();

    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for row in rows {
        let department = employee_departments
            .get(row.employee_id.as_str())
            .copied()
            .unwrap_or(UNASSIGNED_DEPARTMENT);
        *totals.entry(department).or_insert(Decimal::ZERO) += row.breakdown.net_salary;
    }

    let mut rollup: Vec<DepartmentPayroll> = totals
        .into_iter()
        .map(|(department, net_total)| DepartmentPayroll {
            department: department.to_string(),
            net_total,
        })
        .collect();
    rollup.sort_by(|a, b| a.department.cmp(&b.department));
    rollup
}

/// Counts approved requests per fixed leave-type bucket for the pie chart.
///
/// Halfday has no bucket here; approved halfday requests are dropped from
/// the breakdown entirely.
pub fn leave_type_rollup(leaves: &[LeaveRequest]) -> LeaveTypeCounts {
    let mut counts = LeaveTypeCounts::default();
    for leave in leaves.iter().filter(|l| l.is_approved()) {
        match leave.leave_type {
            LeaveType::Annual => counts.annual += 1,
            LeaveType::Sick => counts.sick += 1,
            LeaveType::Personal => counts.personal += 1,
            LeaveType::Unpaid => counts.unpaid += 1,
            LeaveType::Other => counts.other += 1,
            LeaveType::Halfday => {}
        }
    }
    counts
}

/// Builds the attendance time series for the chart window ending at `today`.
///
/// The window is `today` and the preceding `chart_window_days - 1` days,
/// oldest first, independent of any selected report range. Each point counts
/// present, absent, and late records across all employees for that date.
pub fn attendance_time_series(
    attendance: &[AttendanceRecord],
    today: NaiveDate,
    policy: &PolicyConfig,
) -> Vec<DailyAttendancePoint> {
    (0..policy.chart_window_days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(i64::from(offset));
            let mut point = DailyAttendancePoint {
                date,
                present: 0,
                absent: 0,
                late: 0,
            };
            for record in attendance.iter().filter(|r| r.date == date) {
                match record.status {
                    AttendanceStatus::Present => {
                        point.present += 1;
                        if record
                            .check_in
                            .is_some_and(|check_in| is_late(check_in, policy.late_after))
                        {
                            point.late += 1;
                        }
                    }
                    AttendanceStatus::Absent => point.absent += 1,
                }
            }
            point
        })
        .collect()
}

/// Case-insensitive free-text match against an employee's identity fields.
///
/// Matches a substring of the first name, last name, email, position,
/// username, or the concatenated full name. An empty query matches every
/// employee.
pub fn matches_search(employee: &Employee, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [
        employee.first_name.as_str(),
        employee.last_name.as_str(),
        employee.email.as_str(),
        employee.position.as_str(),
        employee.username.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
        || employee.full_name().to_lowercase().contains(&needle)
}

/// Returns holidays on or after `today`, sorted ascending and truncated to
/// `limit`, for the dashboard calendar.
pub fn upcoming_holidays(holidays: &[Holiday], today: NaiveDate, limit: usize) -> Vec<Holiday> {
    let mut upcoming: Vec<Holiday> = holidays
        .iter()
        .filter(|h| h.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|h| h.date);
    upcoming.truncate(limit);
    upcoming
}

/// Computes the payment records a month view must lazily create.
///
/// For every employee without an existing record for the month key, produces
/// a pending record carrying the net salary from the payroll formula engine.
/// Persisting the records is delegated to the storage collaborator.
pub fn missing_month_records(
    employees: &[Employee],
    payments: &[PaymentRecord],
    month: &str,
    rates: &PayrollRates,
) -> Vec<PaymentRecord> {
    employees
        .iter()
        .filter(|e| {
            !payments
                .iter()
                .any(|p| p.employee_id == e.id && p.month == month)
        })
        .map(|employee| PaymentRecord {
            employee_id: employee.id.clone(),
            month: month.to_string(),
            net_amount: calculate_payroll(employee.base_salary(), rates).net_salary,
            status: PaymentStatus::Pending,
            payment_date: None,
            payment_mode: None,
            reference_number: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveStatus, Role};
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(id: &str, salary: Option<&str>, department_id: Option<&str>) -> Employee {
        Employee {
            id: id.to_string(),
            first_name: "Priya".to_string(),
            last_name: "Sharma".to_string(),
            username: format!("{}.user", id),
            email: format!("{}@example.com", id),
            position: "Software Engineer".to_string(),
            department_id: department_id.map(str::to_string),
            salary: salary.map(dec),
            role: Role::Employee,
        }
    }

    fn present_record(
        employee_id: &str,
        day: NaiveDate,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            date: day,
            check_in: Some(day.and_hms_opt(hour, min, sec).unwrap()),
            check_out: None,
            status: AttendanceStatus::Present,
        }
    }

    fn absent_record(employee_id: &str, day: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            date: day,
            check_in: None,
            check_out: None,
            status: AttendanceStatus::Absent,
        }
    }

    fn approved_leave(
        employee_id: &str,
        leave_type: LeaveType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> LeaveRequest {
        LeaveRequest {
            employee_id: employee_id.to_string(),
            leave_type,
            start_date: start,
            end_date: end,
            status: LeaveStatus::Approved,
            approver_id: None,
        }
    }

    fn view(
        employee: Employee,
        records: Vec<AttendanceRecord>,
        leave_requests: Vec<LeaveRequest>,
    ) -> EmployeeAttendanceView {
        EmployeeAttendanceView {
            employee,
            records,
            leave_requests,
        }
    }

    #[test]
    fn test_attendance_row_counts_present_absent_late() {
        let range = DateRange::new(date(2025, 2, 3), date(2025, 2, 7)).unwrap();
        let views = vec![view(
            employee("emp_001", None, None),
            vec![
                present_record("emp_001", date(2025, 2, 3), 8, 55, 0),
                present_record("emp_001", date(2025, 2, 4), 9, 20, 0),
                absent_record("emp_001", date(2025, 2, 5)),
            ],
            vec![],
        )];

        let rows = attendance_rows(&views, range, &PolicyConfig::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].present_days, 2);
        assert_eq!(rows[0].absent_days, 1);
        assert_eq!(rows[0].late_days, 1);
        assert_eq!(rows[0].on_leave_days, 0);
    }

    #[test]
    fn test_attendance_row_counts_on_leave_days_without_records() {
        let range = DateRange::new(date(2025, 2, 3), date(2025, 2, 7)).unwrap();
        let views = vec![view(
            employee("emp_001", None, None),
            vec![present_record("emp_001", date(2025, 2, 3), 9, 0, 0)],
            // Leave covers Tue-Wed; Mon has a record so only 2 leave days
            vec![approved_leave(
                "emp_001",
                LeaveType::Annual,
                date(2025, 2, 3),
                date(2025, 2, 5),
            )],
        )];

        let rows = attendance_rows(&views, range, &PolicyConfig::default());
        assert_eq!(rows[0].on_leave_days, 2);
        assert_eq!(rows[0].present_days, 1);
    }

    #[test]
    fn test_average_check_in_is_none_without_check_ins() {
        let range = DateRange::new(date(2025, 2, 3), date(2025, 2, 7)).unwrap();
        let views = vec![view(
            employee("emp_001", None, None),
            vec![absent_record("emp_001", date(2025, 2, 3))],
            vec![],
        )];

        let rows = attendance_rows(&views, range, &PolicyConfig::default());
        assert_eq!(rows[0].average_check_in, None);
    }

    #[test]
    fn test_average_check_in_same_day_is_clock_mean() {
        let range = DateRange::new(date(2025, 2, 3), date(2025, 2, 7)).unwrap();
        let views = vec![view(
            employee("emp_001", None, None),
            vec![
                present_record("emp_001", date(2025, 2, 3), 9, 0, 0),
                present_record("emp_001", date(2025, 2, 3), 10, 0, 0),
            ],
            vec![],
        )];

        let rows = attendance_rows(&views, range, &PolicyConfig::default());
        assert_eq!(
            rows[0].average_check_in,
            Some(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_average_check_in_across_dates_averages_full_timestamps() {
        let range = DateRange::new(date(2025, 2, 3), date(2025, 2, 7)).unwrap();
        let views = vec![view(
            employee("emp_001", None, None),
            vec![
                present_record("emp_001", date(2025, 2, 3), 9, 0, 0),
                present_record("emp_001", date(2025, 2, 4), 10, 0, 0),
            ],
            vec![],
        )];

        // Midpoint of Feb 3 09:00 and Feb 4 10:00 is Feb 3 21:30; the date
        // component participates in the mean, only the clock time is kept.
        let rows = attendance_rows(&views, range, &PolicyConfig::default());
        assert_eq!(
            rows[0].average_check_in,
            Some(NaiveTime::from_hms_opt(21, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_leave_rows_count_types_and_total_days() {
        let views = vec![view(
            employee("emp_001", None, None),
            vec![],
            vec![
                // Mon-Wed: 3 business days
                approved_leave("emp_001", LeaveType::Annual, date(2025, 2, 3), date(2025, 2, 5)),
                approved_leave("emp_001", LeaveType::Sick, date(2025, 2, 10), date(2025, 2, 10)),
                approved_leave("emp_001", LeaveType::Halfday, date(2025, 2, 12), date(2025, 2, 12)),
            ],
        )];

        let rows = leave_rows(&views);
        assert_eq!(rows[0].annual_requests, 1);
        assert_eq!(rows[0].sick_requests, 1);
        assert_eq!(rows[0].unpaid_requests, 0);
        assert_eq!(rows[0].total_leave_days, 5); // 3 + 1 + 1 halfday unit
    }

    #[test]
    fn test_payroll_rows_substitute_zero_for_absent_salary() {
        let employees = vec![
            employee("emp_001", Some("50000"), None),
            employee("emp_002", None, None),
        ];

        let rows = payroll_rows(&employees, &PayrollRates::default());
        assert_eq!(rows[0].breakdown.net_salary, dec("57000"));
        assert_eq!(rows[1].breakdown.net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_department_rollup_sums_net_and_buckets_unassigned() {
        let departments = vec![Department {
            id: "dept_eng".to_string(),
            name: "Engineering".to_string(),
        }];
        let employees = vec![
            employee("emp_001", Some("50000"), Some("dept_eng")),
            employee("emp_002", Some("100000"), Some("dept_eng")),
            employee("emp_003", Some("50000"), None),
            employee("emp_004", Some("50000"), Some("dept_ghost")),
        ];
        let rows = payroll_rows(&employees, &PayrollRates::default());

        let rollup = department_payroll_rollup(&rows, &employees, &departments);

        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].department, "Engineering");
        assert_eq!(rollup[0].net_total, dec("171000")); // 57000 + 114000
        assert_eq!(rollup[1].department, UNASSIGNED_DEPARTMENT);
        assert_eq!(rollup[1].net_total, dec("114000")); // two employees at 57000
    }

    #[test]
    fn test_leave_type_rollup_drops_halfday() {
        let leaves = vec![
            approved_leave("emp_001", LeaveType::Annual, date(2025, 2, 3), date(2025, 2, 4)),
            approved_leave("emp_001", LeaveType::Halfday, date(2025, 2, 5), date(2025, 2, 5)),
            approved_leave("emp_002", LeaveType::Other, date(2025, 2, 6), date(2025, 2, 6)),
        ];

        let counts = leave_type_rollup(&leaves);
        assert_eq!(counts.annual, 1);
        assert_eq!(counts.other, 1);
        // Regression: the pie total never exceeds approved non-halfday requests
        let approved_non_halfday = leaves
            .iter()
            .filter(|l| l.is_approved() && l.leave_type != LeaveType::Halfday)
            .count() as u32;
        assert!(counts.total() <= approved_non_halfday);
    }

    #[test]
    fn test_leave_type_rollup_ignores_unapproved_requests() {
        let mut pending =
            approved_leave("emp_001", LeaveType::Annual, date(2025, 2, 3), date(2025, 2, 4));
        pending.status = LeaveStatus::Pending;

        let counts = leave_type_rollup(&[pending]);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_time_series_covers_window_oldest_first() {
        let today = date(2025, 2, 10);
        let attendance = vec![
            present_record("emp_001", date(2025, 2, 10), 9, 30, 0),
            present_record("emp_002", date(2025, 2, 10), 8, 45, 0),
            absent_record("emp_003", date(2025, 2, 9)),
            // Outside the 7-day window
            present_record("emp_001", date(2025, 2, 1), 9, 0, 0),
        ];

        let series = attendance_time_series(&attendance, today, &PolicyConfig::default());

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, date(2025, 2, 4));
        assert_eq!(series[6].date, today);
        assert_eq!(series[6].present, 2);
        assert_eq!(series[6].late, 1);
        assert_eq!(series[5].absent, 1);
        assert_eq!(series[0].present, 0);
    }

    #[test]
    fn test_search_matches_fields_case_insensitively() {
        let target = employee("emp_001", None, None);
        assert!(matches_search(&target, "priya"));
        assert!(matches_search(&target, "SHARMA"));
        assert!(matches_search(&target, "priya sharma"));
        assert!(matches_search(&target, "emp_001@example"));
        assert!(matches_search(&target, "engineer"));
        assert!(matches_search(&target, "emp_001.user"));
        assert!(!matches_search(&target, "arun"));
    }

    #[test]
    fn test_empty_search_matches_everyone() {
        assert!(matches_search(&employee("emp_001", None, None), ""));
    }

    #[test]
    fn test_upcoming_holidays_sorted_and_limited() {
        let holidays = vec![
            Holiday {
                date: date(2025, 8, 15),
                name: "Independence Day".to_string(),
            },
            Holiday {
                date: date(2025, 1, 26),
                name: "Republic Day".to_string(),
            },
            Holiday {
                date: date(2025, 3, 14),
                name: "Holi".to_string(),
            },
        ];

        let upcoming = upcoming_holidays(&holidays, date(2025, 2, 1), 2);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].name, "Holi");
        assert_eq!(upcoming[1].name, "Independence Day");
    }

    #[test]
    fn test_missing_month_records_skips_existing_and_fills_rest() {
        let employees = vec![
            employee("emp_001", Some("50000"), None),
            employee("emp_002", Some("100000"), None),
        ];
        let payments = vec![PaymentRecord {
            employee_id: "emp_001".to_string(),
            month: "Jan 2025".to_string(),
            net_amount: dec("57000"),
            status: PaymentStatus::Paid,
            payment_date: Some(date(2025, 2, 1)),
            payment_mode: Some("bank_transfer".to_string()),
            reference_number: None,
        }];

        let missing =
            missing_month_records(&employees, &payments, "Jan 2025", &PayrollRates::default());

        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].employee_id, "emp_002");
        assert_eq!(missing[0].net_amount, dec("114000"));
        assert_eq!(missing[0].status, PaymentStatus::Pending);
        assert_eq!(missing[0].payment_date, None);
    }

    #[test]
    fn test_missing_month_records_other_month_does_not_shadow() {
        let employees = vec![employee("emp_001", Some("50000"), None)];
        let payments = vec![PaymentRecord {
            employee_id: "emp_001".to_string(),
            month: "Dec 2024".to_string(),
            net_amount: dec("57000"),
            status: PaymentStatus::Paid,
            payment_date: None,
            payment_mode: None,
            reference_number: None,
        }];

        let missing =
            missing_month_records(&employees, &payments, "Jan 2025", &PayrollRates::default());
        assert_eq!(missing.len(), 1);
    }
}
