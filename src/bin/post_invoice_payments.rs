//! Post invoice payments from a CSV file, matching invoices by number.
//!
//! The CSV has a header row and the columns `invoice_number,reference,amount`.
//! Invoices issued between the two dates are loaded first; each row is then
//! posted as a payment against the invoice with that number.
//!
//! ```sh
//! export HARVEST_USERNAME=me@example.com HARVEST_PASSWORD=... HARVEST_SUBDOMAIN=acme
//! cargo run --bin post-invoice-payments -- payments.csv 2015-01-01 2015-12-31
//! ```
//!
//! Throttling (HTTP 503) stops the run; nothing is retried.

use std::path::Path;
use std::process;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use harvest_api::rest::{HarvestCredentials, HarvestRestClient, InvoiceReconciler};

#[derive(Debug, Deserialize)]
struct PaymentRow {
    invoice_number: String,
    reference: String,
    amount: Decimal,
}

#[derive(Debug, Default)]
struct Summary {
    posted: usize,
    missing: Vec<String>,
    failed: Vec<(String, String)>,
    throttled: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <payments.csv> <from YYYY-MM-DD> <to YYYY-MM-DD>", args[0]);
        process::exit(1);
    }

    let from_date = parse_date(&args[2]);
    let to_date = parse_date(&args[3]);
    let rows = read_rows(Path::new(&args[1])).unwrap_or_else(|e| {
        eprintln!("Error: Failed to read {}: {e}", args[1]);
        process::exit(1);
    });

    let credentials = HarvestCredentials::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("Set HARVEST_USERNAME, HARVEST_PASSWORD and HARVEST_SUBDOMAIN.");
        process::exit(1);
    });
    let client = HarvestRestClient::new(credentials).unwrap_or_else(|e| {
        eprintln!("Error: Failed to create client: {e}");
        process::exit(1);
    });

    let mut reconciler = InvoiceReconciler::new(client);
    print!("Loading invoices {from_date} to {to_date}... ");
    match reconciler.populate(from_date, to_date).await {
        Ok(count) => println!("{count} invoices, {} numbers", reconciler.cache().len()),
        Err(e) => {
            println!("failed");
            eprintln!("Error: {e}");
            process::exit(if e.is_throttled() { 2 } else { 1 });
        }
    }

    let summary = post_rows(&reconciler, &rows).await;

    println!("\nPosted {} of {} payments", summary.posted, rows.len());
    for number in &summary.missing {
        println!("  not found: {number}");
    }
    for (number, error) in &summary.failed {
        println!("  failed:    {number}: {error}");
    }
    if summary.throttled {
        println!("Stopped early: throttle limit reached. Re-run the remaining rows later.");
        process::exit(2);
    }
    if !summary.missing.is_empty() || !summary.failed.is_empty() {
        process::exit(1);
    }
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_else(|e| {
        eprintln!("Error: Invalid date '{value}': {e}");
        process::exit(1);
    })
}

fn read_rows(path: &Path) -> Result<Vec<PaymentRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    reader.deserialize().collect()
}

async fn post_rows(reconciler: &InvoiceReconciler, rows: &[PaymentRow]) -> Summary {
    let mut summary = Summary::default();

    for row in rows {
        match reconciler
            .post_payment_by_number(&row.invoice_number, &row.reference, row.amount)
            .await
        {
            Ok(()) => {
                println!("  posted:    {} {} ({})", row.invoice_number, row.amount, row.reference);
                summary.posted += 1;
            }
            Err(e) if e.is_cache_miss() => summary.missing.push(row.invoice_number.clone()),
            Err(e) if e.is_throttled() => {
                summary.throttled = true;
                break;
            }
            Err(e) => summary
                .failed
                .push((row.invoice_number.clone(), e.to_string())),
        }
    }

    summary
}
