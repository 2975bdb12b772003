//! Policy configuration for the HR Reporting Engine.
//!
//! The leave quotas, payroll percentages, lateness threshold, and chart
//! window that the original application embedded as scattered literals are
//! hoisted here into a single [`PolicyConfig`] structure, loadable from YAML
//! and carrying the production values as defaults.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{LeaveQuotas, PayrollRates, PolicyConfig};
