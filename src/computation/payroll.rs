//! Payroll formula engine.
//!
//! Converts a base salary into a full payroll breakdown using the configured
//! percentage rates. The function is total over all non-negative inputs and
//! performs no rounding; display layers round for presentation.

use rust_decimal::Decimal;

use crate::config::PayrollRates;
use crate::models::PayrollBreakdown;

/// Derives the full payroll breakdown for a base salary.
///
/// The formulas, with the default rates in parentheses:
///
/// - `gross_salary = base + base * allowance` (40%)
/// - `hra = base * hra` (20%)
/// - `provident_fund = base * provident_fund` (12%)
/// - `tds = gross_salary * tds` (10%)
/// - `net_salary = gross_salary - provident_fund - tds`
///
/// A negative base salary is not guarded against; upstream validation owns
/// that invariant.
///
/// # Examples
///
/// ```
/// use hr_engine::computation::calculate_payroll;
/// use hr_engine::config::PayrollRates;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_payroll(Decimal::from(100000), &PayrollRates::default());
/// assert_eq!(breakdown.gross_salary, Decimal::from(140000));
/// assert_eq!(breakdown.hra, Decimal::from(20000));
/// assert_eq!(breakdown.provident_fund, Decimal::from(12000));
/// assert_eq!(breakdown.tds, Decimal::from(14000));
/// assert_eq!(breakdown.net_salary, Decimal::from(114000));
/// ```
pub fn calculate_payroll(base_salary: Decimal, rates: &PayrollRates) -> PayrollBreakdown {
    let gross_salary = base_salary + base_salary * rates.allowance;
    let hra = base_salary * rates.hra;
    let provident_fund = base_salary * rates.provident_fund;
    let tds = gross_salary * rates.tds;
    let net_salary = gross_salary - provident_fund - tds;

    PayrollBreakdown {
        base_salary,
        gross_salary,
        hra,
        provident_fund,
        tds,
        net_salary,
    }
}
