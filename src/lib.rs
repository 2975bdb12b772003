//! HR Reporting Engine
//!
//! This crate implements the derived-record computation layer of an HR
//! management system: payroll formula breakdowns, leave-balance accounting,
//! attendance/leave reconciliation, and report aggregation over in-memory
//! snapshots of employee data.

#![warn(missing_docs)]

pub mod api;
pub mod computation;
pub mod config;
pub mod error;
pub mod models;
