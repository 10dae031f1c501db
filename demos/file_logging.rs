//! File logging example
//!
//! Demonstrates that the log file receives every record while the console
//! only shows records at or above the threshold.
//!
//! Run with: cargo run --example file_logging

use cutelog::prelude::*;
use cutelog::{debug, error, info, warning};

fn main() -> Result<()> {
    println!("=== cutelog - File Logging Example ===\n");

    cutelog::set_log_file("application.log")?;
    cutelog::set_min_level(LogLevel::Warning);

    println!("1. Logging to both console and file (console threshold WARNING):");
    info!("Application started")?;
    debug!("Loading configuration...")?;
    warning!("Using default settings for some options")?;
    error!("Failed to load optional plugin")?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        info!("Processing item {}/5", i)?;
        if i == 3 {
            warning!("Item 3 took longer than expected")?;
        }
    }

    info!("All operations completed")?;
    cutelog::flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
