//! `payrun` - A single-user payroll recorder for the command line
//!
//! This library provides the core functionality for recording employee
//! records, computing monthly salary breakdowns from a basic salary figure,
//! and persisting both employees and payroll runs to append-only CSV files.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod employee;
pub mod error;
pub mod logging;
pub mod menu;
pub mod payroll;
pub mod storage;

pub use config::Config;
pub use employee::Employee;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use payroll::{PayrollResult, PayslipRecord, Rates};
pub use storage::{FileStore, StoreStats};
