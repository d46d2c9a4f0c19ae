//! PII redaction example
//!
//! Demonstrates redacted message formatting and the typed error factory.
//!
//! Run with: cargo run --example pii_redaction

use std::io;

use token_diagnostics::prelude::*;

fn main() -> Result<()> {
    println!("=== Token Diagnostics - PII Redaction Example ===\n");

    // PII logging defaults to off
    let diag = Diagnostics::builder()
        .event_sink(ConsoleSink::new(EventLevel::Verbose))
        .build();

    println!("1. Redacted logging (default):");
    diag.write_information(
        "Token for '{0}' issued by '{1}' accepted",
        &[pii("alice@example.com"), non_pii("https://issuer.example")],
    );

    println!("\n2. Disclosed logging (opt-in):");
    diag.set_show_pii(true);
    diag.write_information(
        "Token for '{0}' issued by '{1}' accepted",
        &[pii("alice@example.com"), non_pii("https://issuer.example")],
    );
    diag.set_show_pii(false);

    println!("\n3. Typed errors log themselves before returning:");
    let err = diag.error(
        ErrorKind::TokenExpired,
        "Token expired at {0}",
        &[pii("2026-08-25T12:00:00Z")],
    );
    println!("   returned error kind: {:?}", err.kind());

    // External causes are redacted to their type name unless PII is on
    let io_err = io::Error::new(io::ErrorKind::NotFound, "/etc/keys/signing.pem");
    let err = diag.error_with_cause(
        ErrorKind::Configuration,
        Cause::external(io_err),
        "Key store could not be opened",
        &[],
    );
    println!("   returned error kind: {:?}", err.kind());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
