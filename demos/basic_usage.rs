//! Basic diagnostics usage example
//!
//! Demonstrates dual-sink dispatch with console output and different event levels.
//!
//! Run with: cargo run --example basic_usage

use token_diagnostics::prelude::*;

fn main() -> Result<()> {
    println!("=== Token Diagnostics - Basic Usage Example ===\n");

    // Build a diagnostics context with a console event sink
    let diag = Diagnostics::builder()
        .trace_sink(StderrTraceSink::new(EventLevel::Warning))
        .event_sink(ConsoleSink::new(EventLevel::Verbose))
        .build();

    // Log messages at different levels; the version banner precedes the first
    println!("1. Logging at different levels:");
    diag.write_verbose("Resolving signing keys", &[]);
    diag.write_information("Token validation started", &[]);
    diag.write_warning("Key rotation overdue", &[]);
    diag.write(EventLevel::Error, "Signature mismatch", &[]);
    diag.write(EventLevel::Critical, "Key store unreachable", &[]);

    println!("\n2. Level gating:");

    // A context whose sink only accepts WARN and above
    let gated = Diagnostics::builder()
        .event_sink(ConsoleSink::new(EventLevel::Warning))
        .build();
    println!("   Minimum level set to WARN - verbose and info won't show:");
    gated.write_verbose("Verbose message (hidden)", &[]);
    gated.write_information("Info message (hidden)", &[]);
    gated.write_warning("Warning message (visible)", &[]);
    gated.write(EventLevel::Error, "Error message (visible)", &[]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
