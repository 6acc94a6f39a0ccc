use datakeep_core::Record;

/// Print a single record, one field per line.
pub fn print_record(record: &Record) {
    println!("  • Name: {}", record.name);
    println!("  • Age: {}", record.age);
    println!("  • Email: {}", record.email);
    println!("  • Phone: {}", record.phone);
    if record.notes.is_empty() {
        println!("  • Notes: (none)");
    } else {
        println!("  • Notes: {}", record.notes);
    }
    println!("  • Recorded: {}", record.timestamp);
}

/// Print a record as a single numbered summary line, with notes on a
/// second line when present.
pub fn print_record_line(index: usize, record: &Record) {
    println!(
        "  [{index}] {} ({}), {}, {} at {}",
        record.name, record.age, record.email, record.phone, record.timestamp
    );
    if !record.notes.is_empty() {
        println!("      Notes: {}", record.notes);
    }
}
