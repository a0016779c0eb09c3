//! forex-management CLI - inspect desk reports and exercise form hooks
//!
//! ## Example Usage
//!
//! ```bash
//! # Sample rates from the configured band
//! forex-management rate --count 5
//!
//! # Load a new transaction through the form host
//! forex-management load-transaction --customer "Abebe Kebede" \
//!     --currency "US Dollar (USD)" --amount 100 --type Buy
//!
//! # Show and check report contracts
//! forex-management reports show "Top Currencies"
//! forex-management reports check "Top Currencies" transaction_type=Sell from_date=2025-01-01
//! ```

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use forex_management::config::ForexConfig;
use forex_management::doctype::transaction::TRANSACTION_DOCTYPE;
use forex_management::doctype::{Customer, TransactionRecord};
use forex_management::hooks::{FormEvent, FormHost, TransactionForm};
use forex_management::rate::{RateBand, RateSource, RngSource};
use forex_management::report::{FieldType, ReportRegistry};
use forex_management::types::TransactionType;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use std::process;

/// forex-management: forex desk hooks and report contracts
#[derive(Parser)]
#[command(name = "forex-management")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Forex desk hooks and report contracts", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample exchange rates from the configured band
    Rate {
        /// Number of rates to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Load a new transaction through the form host and print it
    LoadTransaction {
        #[arg(long)]
        customer: String,

        /// FX currency label, e.g. "US Dollar (USD)"
        #[arg(long)]
        currency: String,

        #[arg(long)]
        amount: Decimal,

        /// Buy or Sell
        #[arg(short = 't', long = "type", default_value = "Buy")]
        transaction_type: TransactionType,

        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Inspect report contracts
    Reports {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Print the normalized full name of a customer
    CustomerName {
        #[arg(value_name = "FIRST")]
        first_name: String,

        #[arg(value_name = "LAST")]
        last_name: Option<String>,
    },
}

#[derive(Subcommand)]
enum ReportAction {
    /// List registered reports
    List,

    /// Print a report's filters and columns as JSON
    Show {
        #[arg(value_name = "REPORT")]
        report: String,
    },

    /// Check filter values against a report's contract
    Check {
        #[arg(value_name = "REPORT")]
        report: String,

        /// Filter values as KEY=VALUE
        #[arg(value_name = "KEY=VALUE")]
        values: Vec<String>,
    },
}

#[derive(Serialize)]
struct ReportContract<'a> {
    report: &'a str,
    filters: Vec<forex_management::report::FilterSpec>,
    columns: Vec<forex_management::report::ColumnSpec>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match ForexConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    if cli.verbose {
        println!(
            "{} v{}",
            "forex-management".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!(
            "Rate band: {} {}",
            format!("[{}, {}]", config.rate_band.low, config.rate_band.high).dimmed(),
            config.quote_currency.dimmed()
        );
    }

    let result = match cli.command {
        Commands::Rate { count, seed } => sample_rates(&config, count, seed),
        Commands::LoadTransaction {
            customer,
            currency,
            amount,
            transaction_type,
            seed,
        } => load_transaction(&config, customer, currency, amount, transaction_type, seed),
        Commands::Reports { action } => handle_report_action(&config, action),
        Commands::CustomerName {
            first_name,
            last_name,
        } => customer_name(first_name, last_name),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn rate_source(seed: Option<u64>) -> Box<dyn RateSource> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    }
}

fn sample_rates(config: &ForexConfig, count: usize, seed: Option<u64>) -> Result<()> {
    let band: RateBand = config.rate_band()?;
    let mut source = rate_source(seed);

    for _ in 0..count {
        println!("{}", band.sample(source.as_mut()));
    }
    Ok(())
}

fn load_transaction(
    config: &ForexConfig,
    customer: String,
    currency: String,
    amount: Decimal,
    transaction_type: TransactionType,
    seed: Option<u64>,
) -> Result<()> {
    let mut host = FormHost::new();
    host.register(Box::new(TransactionForm::new(
        config.rate_band()?,
        rate_source(seed),
    )))?;

    let mut record = TransactionRecord::new(customer, currency, transaction_type, amount)
        .with_date_and_time(Utc::now());
    host.dispatch(TRANSACTION_DOCTYPE, FormEvent::BeforeLoad, Some(&mut record))?;
    record
        .autoname(&config.quote_currency)
        .context("Failed to name transaction")?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn handle_report_action(config: &ForexConfig, action: ReportAction) -> Result<()> {
    let registry = ReportRegistry::builtin()?;

    match action {
        ReportAction::List => {
            println!("{}", "Reports".green().bold());
            for report in registry.iter() {
                let filters: Vec<String> = report
                    .filters()
                    .iter()
                    .map(|f| match &f.field_type {
                        FieldType::Datetime => f.field_name.clone(),
                        other => format!("{} ({})", f.field_name, other),
                    })
                    .collect();
                println!("  {} {}", report.name().bold(), filters.join(", ").dimmed());
            }
        }
        ReportAction::Show { report } => {
            let definition = registry
                .get(&report)
                .with_context(|| format!("Unknown report '{}'", report))?;
            let translator = config.translator()?;

            let contract = ReportContract {
                report: definition.name(),
                filters: definition.localized_filters(translator.as_ref()),
                columns: definition.localized_columns(translator.as_ref()),
            };
            println!("{}", serde_json::to_string_pretty(&contract)?);
        }
        ReportAction::Check { report, values } => {
            let definition = registry
                .get(&report)
                .with_context(|| format!("Unknown report '{}'", report))?;

            let mut pairs = Vec::with_capacity(values.len());
            for value in &values {
                match value.split_once('=') {
                    Some((key, value)) => pairs.push((key.to_string(), value.to_string())),
                    None => bail!("Expected KEY=VALUE, got '{}'", value),
                }
            }

            let checked = definition.validate(pairs)?;
            println!("{} {}", "OK".green().bold(), serde_json::to_string(&checked)?);
        }
    }

    Ok(())
}

fn customer_name(first_name: String, last_name: Option<String>) -> Result<()> {
    let mut customer = Customer::new(first_name, last_name);
    println!("{}", customer.full_name()?);
    Ok(())
}
