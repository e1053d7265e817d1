//! Payroll calculation.
//!
//! This module holds the allowance/deduction percentages, the pure
//! calculator that turns a basic salary into a monthly breakdown, and the
//! payslip record that gets persisted for each employee per payroll run.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::employee::Employee;

/// Allowance and deduction percentages applied to the basic salary.
///
/// HRA (House Rent Allowance) and DA (Dearness Allowance) are added on
/// top of the basic salary to form the gross; PF (Provident Fund) is
/// deducted from the gross to form the net.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rates {
    /// House Rent Allowance, as a percentage of basic salary.
    pub hra_percent: Decimal,
    /// Dearness Allowance, as a percentage of basic salary.
    pub da_percent: Decimal,
    /// Provident Fund deduction, as a percentage of basic salary.
    pub pf_percent: Decimal,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            hra_percent: dec!(20),
            da_percent: dec!(10),
            pf_percent: dec!(8),
        }
    }
}

impl Rates {
    /// Compute the monthly breakdown for a basic salary.
    ///
    /// This is a pure function with no failure modes: every component is
    /// a fixed percentage of the basic salary, computed exactly in decimal
    /// arithmetic.
    #[must_use]
    pub fn calculate(&self, basic: Decimal) -> PayrollResult {
        let hundred = dec!(100);
        let hra = basic * self.hra_percent / hundred;
        let da = basic * self.da_percent / hundred;
        let pf = basic * self.pf_percent / hundred;
        let gross = basic + hra + da;
        let net = gross - pf;
        PayrollResult {
            basic,
            hra,
            da,
            pf,
            gross,
            net,
        }
    }
}

/// The computed breakdown for one employee's month.
///
/// Ephemeral: computed per payroll run and immediately serialized into a
/// [`PayslipRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayrollResult {
    /// The basic salary the breakdown was derived from.
    pub basic: Decimal,
    /// House Rent Allowance component.
    pub hra: Decimal,
    /// Dearness Allowance component.
    pub da: Decimal,
    /// Provident Fund deduction.
    pub pf: Decimal,
    /// basic + hra + da.
    pub gross: Decimal,
    /// gross - pf.
    pub net: Decimal,
}

/// One persisted payroll line: an employee's breakdown for a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipRecord {
    /// The month this payslip was generated for, as given by the user.
    pub month: String,
    /// Id of the employee this payslip belongs to.
    pub employee_id: u32,
    /// Name of the employee this payslip belongs to.
    pub employee_name: String,
    /// The basic salary the breakdown was derived from.
    pub basic: Decimal,
    /// House Rent Allowance component.
    pub hra: Decimal,
    /// Dearness Allowance component.
    pub da: Decimal,
    /// Provident Fund deduction.
    pub pf: Decimal,
    /// basic + hra + da.
    pub gross: Decimal,
    /// gross - pf.
    pub net: Decimal,
}

impl PayslipRecord {
    /// Bind a computed breakdown to an employee and a month.
    #[must_use]
    pub fn new(employee: &Employee, result: &PayrollResult, month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            basic: result.basic,
            hra: result.hra,
            da: result.da,
            pf: result.pf,
            gross: result.gross,
            net: result.net,
        }
    }
}

/// The current month in `YYYY-MM` form, used as the default for a run.
#[must_use]
pub fn default_month() -> String {
    chrono::Local::now().format("%Y-%m").to_string()
}
