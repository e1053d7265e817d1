//! The employee record type.
//!
//! An employee is the unit the payroll run iterates over: an id, a name,
//! and the flat basic salary the monthly breakdown is derived from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single employee on file.
///
/// Employees are immutable once constructed: they are appended to the
/// employee store and never updated or deleted in place. The id is the
/// employee's identity but is not enforced unique; appending the same id
/// twice results in two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee identifier.
    pub id: u32,
    /// Employee name.
    pub name: String,
    /// Flat monthly basic salary the breakdown is computed from.
    pub basic_salary: Decimal,
}

impl Employee {
    /// Create a new employee record.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, basic_salary: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            basic_salary,
        }
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.id, self.name, self.basic_salary)
    }
}
