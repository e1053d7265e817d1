//! Storage layer for payrun.
//!
//! This module provides append-only CSV file storage for employee records
//! and payroll runs. Files are headerless, one record per line, and are
//! opened and closed per operation; nothing is ever rewritten in place.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::employee::Employee;
use crate::error::{Error, Result};
use crate::payroll::{PayslipRecord, Rates};

/// File-backed store for employees and payslips.
///
/// Holds the two file paths; all I/O happens inside the individual
/// operations. Missing files read as empty stores and are created on the
/// first append.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Path to the employee CSV file (`id,name,basic_salary`).
    employee_path: PathBuf,
    /// Path to the payroll CSV file
    /// (`month,id,name,basic,hra,da,pf,gross,net`).
    payroll_path: PathBuf,
}

impl FileStore {
    /// Create a store over the given file paths. No I/O is performed.
    #[must_use]
    pub fn new(employee_path: impl Into<PathBuf>, payroll_path: impl Into<PathBuf>) -> Self {
        Self {
            employee_path: employee_path.into(),
            payroll_path: payroll_path.into(),
        }
    }

    /// Create a store over the paths resolved from the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.employee_path(), config.payroll_path())
    }

    /// Path to the employee file.
    #[must_use]
    pub fn employee_path(&self) -> &Path {
        &self.employee_path
    }

    /// Path to the payroll file.
    #[must_use]
    pub fn payroll_path(&self) -> &Path {
        &self.payroll_path
    }

    /// Append one employee record to the employee file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append_employee(&self, employee: &Employee) -> Result<()> {
        Self::append_record(&self.employee_path, employee)?;
        debug!("appended employee {} to store", employee.id);
        Ok(())
    }

    /// Load all employee records from the employee file.
    ///
    /// Malformed lines are skipped silently. A missing file reads as an
    /// empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_employees(&self) -> Result<Vec<Employee>> {
        Self::load_records(&self.employee_path)
    }

    /// Append one payslip record to the payroll file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append_payslip(&self, slip: &PayslipRecord) -> Result<()> {
        Self::append_record(&self.payroll_path, slip)
    }

    /// Load all payslip records from the payroll file.
    ///
    /// Same malformed-line policy as [`FileStore::load_employees`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_payslips(&self) -> Result<Vec<PayslipRecord>> {
        Self::load_records(&self.payroll_path)
    }

    /// Load payslips for display, optionally restricted to one month and
    /// capped at the `limit` most recent records (file order, most recent
    /// last).
    ///
    /// # Errors
    ///
    /// Returns an error if the payroll file exists but cannot be read.
    pub fn load_history(&self, month: Option<&str>, limit: usize) -> Result<Vec<PayslipRecord>> {
        let mut slips = self.load_payslips()?;
        if let Some(month) = month {
            slips.retain(|slip| slip.month == month);
        }
        if slips.len() > limit {
            let skip = slips.len() - limit;
            slips.drain(..skip);
        }
        Ok(slips)
    }

    /// Generate payroll for a month: apply the rates to every stored
    /// employee and append one payslip per employee.
    ///
    /// Returns the recorded payslips in employee-file order. An empty
    /// employee store records nothing and returns an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee file cannot be read or the payroll
    /// file cannot be written.
    pub fn record_payroll(&self, rates: &Rates, month: &str) -> Result<Vec<PayslipRecord>> {
        let employees = self.load_employees()?;
        let mut slips = Vec::with_capacity(employees.len());

        for employee in &employees {
            let result = rates.calculate(employee.basic_salary);
            let slip = PayslipRecord::new(employee, &result, month);
            self.append_payslip(&slip)?;
            slips.push(slip);
        }

        if !slips.is_empty() {
            info!("recorded {} payslips for {}", slips.len(), month);
        }
        Ok(slips)
    }

    /// Get store statistics: record counts and file sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if either file exists but cannot be read.
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            employees: self.load_employees()?.len(),
            payslips: self.load_payslips()?.len(),
            employee_file_bytes: file_size(&self.employee_path),
            payroll_file_bytes: file_size(&self.payroll_path),
        })
    }

    /// Append a single record as one headerless CSV line.
    fn append_record<T: Serialize>(path: &Path, record: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::StoreOpen {
                path: path.to_path_buf(),
                source,
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .serialize(record)
            .map_err(|source| Error::StoreAppend {
                path: path.to_path_buf(),
                source,
            })?;
        writer.flush()?;
        Ok(())
    }

    /// Read all records from a headerless CSV file, dropping lines that
    /// fail to parse.
    fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(path).map_err(|source| Error::StoreOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for record in reader.deserialize() {
            match record {
                Ok(record) => records.push(record),
                Err(err) => debug!("skipping malformed line in {}: {err}", path.display()),
            }
        }
        Ok(records)
    }
}

/// Size of a file in bytes, or 0 if it doesn't exist.
fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Statistics about the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of employee records on file.
    pub employees: usize,
    /// Number of payslip records on file.
    pub payslips: usize,
    /// Size of the employee file in bytes.
    pub employee_file_bytes: u64,
    /// Size of the payroll file in bytes.
    pub payroll_file_bytes: u64,
}
