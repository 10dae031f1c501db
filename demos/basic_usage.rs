//! Basic logger usage example
//!
//! Demonstrates the per-level macros and console threshold changes.
//!
//! Run with: cargo run --example basic_usage
//! Try:      CUTELOG_LEVEL=TRACE cargo run --example basic_usage

use cutelog::prelude::*;
use cutelog::{critical, debug, debug_var, error, fatal, info, trace, warning};

fn main() -> Result<()> {
    println!("=== cutelog - Basic Usage Example ===\n");

    println!("1. Logging at every level (threshold {}):", cutelog::min_level());
    trace!("This is a trace message")?;
    debug!("This is a debug message")?;
    info!("This is an info message: {}", 43)?;
    critical!("This is a critical message")?;
    warning!("This is a warning message")?;
    error!("This is an error message")?;
    fatal!("This is a fatal message")?;

    println!("\n2. Lowering the threshold to TRACE:");
    cutelog::set_min_level(LogLevel::Trace);
    let retries = 3;
    debug_var!(retries)?;

    println!("\n3. Raising the threshold to WARNING (CRITICAL sorts below it):");
    cutelog::set_min_level(LogLevel::Warning);
    critical!("Critical message (hidden)")?;
    warning!("Warning message (visible)")?;

    println!("\n4. A dedicated logger:");
    let logger = Logger::builder().min_level(LogLevel::Debug).build();
    debug!(logger => "Debug message on its own logger")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
