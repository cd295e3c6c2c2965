//! Fetch command implementation
//!
//! Reads the most recent records from a JSON-lines store and prints them.

use anyhow::{bail, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use workforce_core::types::EmployeeRecord;
use workforce_store::{EmployeeStore, JsonLinesStore};

/// Run the fetch command
pub async fn run(input: &Path, limit: usize, format: &str) -> Result<()> {
    if !input.exists() {
        bail!("File not found: {}", input.display());
    }
    let store = JsonLinesStore::new(input);
    let records = store.fetch_batch(limit).await?;
    info!("Fetched {} records from {}", records.len(), input.display());

    let stdout = std::io::stdout();
    render(&records, format, stdout.lock())
}

fn render<W: Write>(records: &[EmployeeRecord], format: &str, mut out: W) -> Result<()> {
    match format {
        "json" => {
            serde_json::to_writer_pretty(&mut out, records)?;
            writeln!(out)?;
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(out);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        "table" => {
            writeln!(
                out,
                "{:>6}  {:<28}  {:<6}  {:<10}  {:<10}  {:<10}  {}",
                "ID", "NAME", "SEX", "BORN", "HIRED", "LEFT", "EDUCATION"
            )?;
            for r in records {
                let name = format!("{} {} {}", r.first_name, r.middle_name, r.last_name);
                let left = r
                    .departure_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    out,
                    "{:>6}  {:<28}  {:<6}  {:<10}  {:<10}  {:<10}  {}",
                    r.id, name, r.sex, r.birth_date, r.hire_date, left, r.education_level
                )?;
            }
        }
        other => bail!("Unknown format: {}. Supported: table, json, csv", other),
    }
    Ok(())
}
