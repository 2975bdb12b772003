//! Policy configuration types.
//!
//! These structures are deserialized from `config/policy.yaml`. Their
//! `Default` implementations carry the fixed production values, so the
//! engine works without a configuration file and tests can run against the
//! documented constants.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Annual leave quotas per leave type.
///
/// Quotas for annual, sick, and personal leave are in business days; the
/// halfday quota is in half-day units (one unit per approved request).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LeaveQuotas {
    /// Annual leave quota in business days.
    pub annual: i64,
    /// Sick leave quota in business days.
    pub sick: i64,
    /// Personal leave quota in business days.
    pub personal: i64,
    /// Halfday quota in half-day units.
    pub halfday: i64,
}

impl Default for LeaveQuotas {
    fn default() -> Self {
        Self {
            annual: 20,
            sick: 10,
            personal: 5,
            halfday: 12,
        }
    }
}

/// Payroll percentage rates, expressed as fractions of the base salary
/// (TDS is a fraction of the gross salary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PayrollRates {
    /// Flat allowance added to the base salary to form the gross salary.
    pub allowance: Decimal,
    /// House rent allowance as a fraction of the base salary.
    pub hra: Decimal,
    /// Provident fund deduction as a fraction of the base salary.
    pub provident_fund: Decimal,
    /// Tax deducted at source as a fraction of the gross salary.
    pub tds: Decimal,
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            allowance: Decimal::new(40, 2),
            hra: Decimal::new(20, 2),
            provident_fund: Decimal::new(12, 2),
            tds: Decimal::new(10, 2),
        }
    }
}

/// The complete policy configuration for the engine.
///
/// # Example
///
/// ```
/// use hr_engine::config::PolicyConfig;
/// use chrono::NaiveTime;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.leave_quotas.annual, 20);
/// assert_eq!(policy.late_after, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
/// assert_eq!(policy.chart_window_days, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    /// Annual leave quotas per type.
    #[serde(default)]
    pub leave_quotas: LeaveQuotas,
    /// Payroll percentage rates.
    #[serde(default)]
    pub payroll_rates: PayrollRates,
    /// A check-in strictly after this time is late. Checking in at exactly
    /// this time is on-time.
    #[serde(default = "default_late_after")]
    pub late_after: NaiveTime,
    /// Number of days in the attendance time-series chart window (today and
    /// the preceding days).
    #[serde(default = "default_chart_window_days")]
    pub chart_window_days: u32,
}

fn default_late_after() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid threshold time")
}

fn default_chart_window_days() -> u32 {
    7
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            leave_quotas: LeaveQuotas::default(),
            payroll_rates: PayrollRates::default(),
            late_after: default_late_after(),
            chart_window_days: default_chart_window_days(),
        }
    }
}
