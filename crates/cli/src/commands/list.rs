use anyhow::{Context, Result};
use datakeep_core::DataCollector;
use std::path::PathBuf;

use crate::printing::print_record_line;

pub fn list_records(storage: &PathBuf) -> Result<()> {
    let collector = DataCollector::with_path(storage).context("Failed to open storage")?;

    if collector.is_empty() {
        println!("No records stored at {}.", storage.display());
        return Ok(());
    }

    println!("\n📇 Records in {}:", storage.display());
    println!("{}", "=".repeat(50));

    for (index, record) in collector.records().iter().enumerate() {
        print_record_line(index, record);
    }

    println!("\nTotal: {} records", collector.len());

    Ok(())
}
