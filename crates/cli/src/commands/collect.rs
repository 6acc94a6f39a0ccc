use anyhow::{Context, Result};
use datakeep_core::DataCollector;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::printing::print_record;

pub fn collect_records(storage: &PathBuf) -> Result<()> {
    let mut collector = DataCollector::with_path(storage).context("Failed to open storage")?;

    println!("\n📇 Datakeep - Contact Record Collector");
    println!("{}", "=".repeat(50));
    if collector.is_empty() {
        println!("Starting a new record store.\n");
    } else {
        println!("Loaded {} existing records.\n", collector.len());
    }

    loop {
        let name = prompt_required("Name")?;
        let age = prompt_age("Age")?;
        let email = prompt_required("Email")?;
        let phone = prompt_required("Phone")?;
        let notes = prompt_line("Notes (press Enter to skip)")?;

        let record = collector
            .add_record(name, age, email, phone, notes)
            .context("Failed to save record")?;

        println!("\n✅ Record saved:");
        print_record(record);

        let resolved = collector
            .storage_path()
            .canonicalize()
            .unwrap_or_else(|_| collector.storage_path().to_path_buf());
        println!("\nAll records are stored at {}", resolved.display());

        if !prompt_continue()? {
            println!("\nDone. {} records stored in total.", collector.len());
            break;
        }
        println!();
    }

    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        anyhow::bail!("Unexpected end of input");
    }
    Ok(input.trim().to_string())
}

fn prompt_required(prompt: &str) -> Result<String> {
    loop {
        let input = prompt_line(prompt)?;
        if input.is_empty() {
            println!("Input required, please try again.\n");
            continue;
        }
        return Ok(input);
    }
}

fn prompt_age(prompt: &str) -> Result<u32> {
    loop {
        let input = prompt_required(prompt)?;
        match input.parse::<u32>() {
            Ok(age) => return Ok(age),
            Err(_) => println!("Invalid number, please try again.\n"),
        }
    }
}

/// Anything other than an explicit yes stops the session.
fn prompt_continue() -> Result<bool> {
    let input = prompt_line("Add another record? (y/n)")?;
    Ok(matches!(input.to_lowercase().as_str(), "y" | "yes"))
}
