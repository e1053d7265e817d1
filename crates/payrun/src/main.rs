//! `payrun` - single-user payroll recorder
//!
//! This binary provides the command-line interface for recording employees
//! and generating monthly payroll runs.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use payrun::cli::{
    AddCommand, Cli, Command, ConfigCommand, HistoryCommand, ListCommand, OutputFormat,
    RunCommand,
};
use payrun::payroll::default_month;
use payrun::{init_logging, Config, FileStore, PayslipRecord};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;
    let store = FileStore::from_config(&config);

    // Execute the command; no subcommand means the interactive menu
    match cli.command {
        Some(Command::Add(cmd)) => handle_add(&store, cmd),
        Some(Command::List(cmd)) => handle_list(&store, &cmd),
        Some(Command::Run(cmd)) => handle_run(&store, &config, cmd),
        Some(Command::History(cmd)) => handle_history(&store, &cmd),
        Some(Command::Status(cmd)) => handle_status(&store, &config, cmd.json),
        Some(Command::Config(cmd)) => handle_config(&config, cmd),
        None => payrun::menu::run_session(&config),
    }
}

fn handle_add(store: &FileStore, cmd: AddCommand) -> Result<()> {
    let employee = payrun::menu::prompt_employee(cmd.id, cmd.name, cmd.salary)?;
    store.append_employee(&employee)?;
    println!(
        "Employee {} saved to {}",
        employee.id,
        store.employee_path().display()
    );
    Ok(())
}

fn handle_list(store: &FileStore, cmd: &ListCommand) -> Result<()> {
    let employees = store.load_employees()?;

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&employees)?),
        OutputFormat::Plain => {
            for employee in &employees {
                println!("{employee}");
            }
        }
        OutputFormat::Table => {
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
        }
    }
    Ok(())
}

fn handle_run(store: &FileStore, config: &Config, cmd: RunCommand) -> Result<()> {
    let month = cmd.month.unwrap_or_else(default_month);
    let slips = store.record_payroll(&config.rates, &month)?;

    if slips.is_empty() {
        println!("No employees on file; nothing recorded.");
    } else {
        println!(
            "Recorded {} payslips for {} in {}",
            slips.len(),
            month,
            store.payroll_path().display()
        );
    }
    Ok(())
}

fn handle_history(store: &FileStore, cmd: &HistoryCommand) -> Result<()> {
    let slips = store.load_history(cmd.month.as_deref(), cmd.limit)?;

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&slips)?),
        OutputFormat::Plain => {
            for slip in &slips {
                println!("{}", payslip_line(slip));
            }
        }
        OutputFormat::Table => {
            if slips.is_empty() {
                println!("No payroll recorded yet.");
                return Ok(());
            }
            println!(
                "{:<10} {:<6} {:<20} {:>12} {:>12} {:>12}",
                "Month", "ID", "Name", "Basic", "Gross", "Net"
            );
            for slip in &slips {
                println!(
                    "{:<10} {:<6} {:<20} {:>12} {:>12} {:>12}",
                    slip.month,
                    slip.employee_id,
                    slip.employee_name,
                    slip.basic.to_string(),
                    slip.gross.to_string(),
                    slip.net.to_string()
                );
            }
        }
    }
    Ok(())
}

fn payslip_line(slip: &PayslipRecord) -> String {
    format!(
        "{} {} {} basic={} hra={} da={} pf={} gross={} net={}",
        slip.month,
        slip.employee_id,
        slip.employee_name,
        slip.basic,
        slip.hra,
        slip.da,
        slip.pf,
        slip.gross,
        slip.net
    )
}

fn handle_status(store: &FileStore, config: &Config, json: bool) -> Result<()> {
    let stats = store.stats()?;

    if json {
        let status = serde_json::json!({
            "employee_file": store.employee_path(),
            "payroll_file": store.payroll_path(),
            "employees": stats.employees,
            "payslips": stats.payslips,
            "rates": config.rates,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("payrun status");
        println!("-------------");
        println!("Employee file: {}", store.employee_path().display());
        println!("Payroll file:  {}", store.payroll_path().display());
        println!("Employees:     {}", stats.employees);
        println!("Payslips:      {}", stats.payslips);
        println!(
            "Rates:         HRA {}%, DA {}%, PF {}%",
            config.rates.hra_percent, config.rates.da_percent, config.rates.pf_percent
        );
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[storage]");
                println!("  Employee file: {}", config.employee_path().display());
                println!("  Payroll file:  {}", config.payroll_path().display());
                println!();
                println!("[rates]");
                println!("  HRA percent:   {}", config.rates.hra_percent);
                println!("  DA percent:    {}", config.rates.da_percent);
                println!("  PF percent:    {}", config.rates.pf_percent);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
