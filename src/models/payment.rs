//! Payment record model and month-key helper.
//!
//! Payment records are keyed by employee and calendar month. The storage
//! collaborator creates them lazily the first time a month is viewed; the
//! engine computes which records are missing (see
//! [`missing_month_records`](crate::computation::missing_month_records)) but
//! never persists them itself.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The payment status of a monthly payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Salary not yet paid out for this month.
    Pending,
    /// Salary paid out.
    Paid,
}

/// A monthly salary payment record for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The month key, e.g. `"Jan 2025"`.
    pub month: String,
    /// The computed net salary amount for the month.
    pub net_amount: Decimal,
    /// Whether the payment has been made.
    pub status: PaymentStatus,
    /// The date the payment was made, if paid.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// The payment mode (e.g., "bank_transfer"), if paid.
    #[serde(default)]
    pub payment_mode: Option<String>,
    /// An external reference number for the payment, if any.
    #[serde(default)]
    pub reference_number: Option<String>,
}

/// Formats a date into the month key used by payment records, e.g.
/// `"Jan 2025"`.
///
/// # Examples
///
/// ```
/// use hr_engine::models::month_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(month_key(date), "Jan 2025");
/// ```
pub fn month_key(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}
