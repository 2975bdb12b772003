//! Employee and department models.
//!
//! This module defines the Employee struct, the Role enum, and the
//! Department reference type used for payroll rollups.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The access role assigned to an employee account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Human resources staff.
    Hr,
    /// Department manager (can approve leave).
    Manager,
    /// Regular employee.
    Employee,
}

/// A department that employees belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// The human-readable department name.
    pub name: String,
}

/// Represents an employee in the snapshot consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
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
    /// The employee's job position (e.g., "Software Engineer").
    pub position: String,
    /// Reference to the employee's department, if assigned.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Monthly base salary in whole currency units. Treated as zero when
    /// absent for all payroll formulas.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// The access role for this employee.
    pub role: Role,
}

impl Employee {
    /// Returns the employee's full name ("first last").
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::{Employee, Role};
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     first_name: "Priya".to_string(),
    ///     last_name: "Sharma".to_string(),
    ///     username: "priya.s".to_string(),
    ///     email: "priya@example.com".to_string(),
    ///     position: "Engineer".to_string(),
    ///     department_id: None,
    ///     salary: None,
    ///     role: Role::Employee,
    /// };
    /// assert_eq!(employee.full_name(), "Priya Sharma");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the base salary, substituting zero when absent.
    pub fn base_salary(&self) -> Decimal {
        self.salary.unwrap_or(Decimal::ZERO)
    }
}
