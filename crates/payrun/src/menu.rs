//! Interactive menu session.
//!
//! Running `payrun` with no subcommand drops into a numbered menu that
//! drives the same operations as the one-shot subcommands. Invalid numeric
//! input on a prompt re-prompts; an I/O failure during an action is
//! printed and the session continues.

use anyhow::Result;
use dialoguer::{Input, Select};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::employee::Employee;
use crate::payroll::default_month;
use crate::storage::FileStore;

/// Run the interactive menu loop until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal interaction itself fails; errors from
/// individual menu actions are printed and swallowed.
pub fn run_session(config: &Config) -> Result<()> {
    let store = FileStore::from_config(config);
    println!("payrun - payroll calculator");

    loop {
        let items = [
            "[1] Add employee",
            "[2] List employees",
            "[3] Generate payroll for a month",
            "[4] Payroll history",
            "[5] Quit",
        ];
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => add_employee(&store),
            1 => list_employees(&store),
            2 => generate_payroll(&store, config),
            3 => show_history(&store),
            _ => break,
        };

        if let Err(err) = outcome {
            eprintln!("Error: {err:#}");
        }
        println!();
    }

    Ok(())
}

/// Build an employee record, prompting for any field not supplied.
///
/// Non-numeric id or salary input re-prompts; a negative salary is
/// rejected by the prompt validator.
///
/// # Errors
///
/// Returns an error if the terminal interaction fails.
pub fn prompt_employee(
    id: Option<u32>,
    name: Option<String>,
    salary: Option<Decimal>,
) -> Result<Employee> {
    let id: u32 = match id {
        Some(id) => id,
        None => Input::new().with_prompt("Employee id").interact_text()?,
    };
    let name: String = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Employee name").interact_text()?,
    };
    let salary: Decimal = match salary {
        Some(salary) => salary,
        None => Input::new()
            .with_prompt("Basic salary")
            .validate_with(|value: &Decimal| {
                if *value < Decimal::ZERO {
                    Err("salary cannot be negative")
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };
    Ok(Employee::new(id, name, salary))
}

fn add_employee(store: &FileStore) -> Result<()> {
    let employee = prompt_employee(None, None, None)?;
    store.append_employee(&employee)?;
    println!(
        "Employee {} saved to {}",
        employee.id,
        store.employee_path().display()
    );
    Ok(())
}

fn list_employees(store: &FileStore) -> Result<()> {
    let employees = store.load_employees()?;
    if employees.is_empty() {
        println!("No employees found.");
        return Ok(());
    }

    println!("{:<6} {:<20} {:>14}", "ID", "Name", "Basic Salary");
    for employee in &employees {
        println!(
            "{:<6} {:<20} {:>14}",
            employee.id,
            employee.name,
            employee.basic_salary.to_string()
        );
    }
    Ok(())
}

fn generate_payroll(store: &FileStore, config: &Config) -> Result<()> {
    let employees = store.load_employees()?;
    if employees.is_empty() {
        println!("No employees available to generate payroll.");
        return Ok(());
    }

    let month: String = Input::new()
        .with_prompt("Month (e.g. 2026-08)")
        .default(default_month())
        .interact_text()?;

    let slips = store.record_payroll(&config.rates, &month)?;
    println!(
        "Recorded {} payslips for {} in {}",
        slips.len(),
        month,
        store.payroll_path().display()
    );
    Ok(())
}

fn show_history(store: &FileStore) -> Result<()> {
    let slips = store.load_payslips()?;
    if slips.is_empty() {
        println!("No payroll recorded yet.");
        return Ok(());
    }

    println!(
        "{:<10} {:<6} {:<20} {:>12} {:>12}",
        "Month", "ID", "Name", "Gross", "Net"
    );
    for slip in &slips {
        println!(
            "{:<10} {:<6} {:<20} {:>12} {:>12}",
            slip.month,
            slip.employee_id,
            slip.employee_name,
            slip.gross.to_string(),
            slip.net.to_string()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_prompt_employee_with_all_fields_does_not_prompt() {
        // All fields supplied means no terminal interaction at all
        let employee =
            prompt_employee(Some(3), Some("Mina".to_string()), Some(dec!(30000))).unwrap();

        assert_eq!(employee, Employee::new(3, "Mina", dec!(30000)));
    }
}
