use anyhow::{Context, Result};
use datakeep_core::DataCollector;
use std::path::PathBuf;

use crate::args::AddArgs;
use crate::printing::print_record;

pub fn add_record(storage: &PathBuf, args: &AddArgs) -> Result<()> {
    let mut collector = DataCollector::with_path(storage).context("Failed to open storage")?;

    let record = collector
        .add_record(
            args.name.clone(),
            args.age,
            args.email.clone(),
            args.phone.clone(),
            args.notes.clone(),
        )
        .context("Failed to save record")?;

    println!("\n✅ Record saved");
    println!("{}", "=".repeat(50));
    print_record(record);

    println!(
        "\nTotal: {} records in {}",
        collector.len(),
        collector.storage_path().display()
    );

    Ok(())
}
