// Copyright (c) 2026 Lana Pet Care. MIT License.
// See LICENSE for details.

//! # BR Code CLI
//!
//! Entry point for the `brcode` binary. Parses CLI arguments, initializes
//! logging, and dispatches to the encoder or the validator.
//!
//! The binary supports three subcommands:
//!
//! - `generate` — build a BR Code payload from merchant configuration
//! - `check`    — validate a code and print its decoded field tree
//! - `version`  — print build version information
//!
//! The payload (or the decoded tree) goes to stdout; everything else —
//! logs, errors — goes to stderr, so the output can be piped directly
//! into a QR renderer.

mod cli;
mod logging;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use pix_brcode::config::tag_name;
use pix_brcode::payload::{decode, BrCodeBuilder};

use cli::{BrCodeCli, Commands};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = BrCodeCli::parse();
    logging::init_logging(
        "brcode=info,pix_brcode=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Check(args) => check(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds a payload from the CLI arguments and prints it.
fn generate(args: cli::GenerateArgs) -> Result<()> {
    // The key is a payment credential. It ends up inside the payload by
    // necessity, but it must never appear in logs.
    tracing::info!(
        merchant = %args.name,
        city = %args.city,
        amount = ?args.amount,
        "generating BR Code"
    );

    let mut builder = BrCodeBuilder::new(&args.key, &args.name, &args.city);
    if let Some(amount) = args.amount {
        builder = builder.amount(amount);
    }
    if let Some(reference) = args.reference {
        builder = builder.reference(reference);
    }
    if let Some(description) = args.description {
        builder = builder.description(description);
    }

    let payload = builder.build().context("could not encode BR Code")?;

    if args.json {
        let out = serde_json::json!({
            "payload": payload,
            "length": payload.len(),
            "crc": &payload[payload.len() - 4..],
        });
        println!("{out}");
    } else {
        println!("{payload}");
    }
    Ok(())
}

/// Validates a payload and prints its decoded field tree.
fn check(args: cli::CheckArgs) -> Result<()> {
    let code = match args.code {
        Some(code) => code,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("could not read code from stdin")?;
            buf
        }
    };
    let code = code.trim();

    let fields = decode(code).context("BR Code failed validation")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    println!("OK — {} bytes, checksum verified", code.len());
    for field in &fields {
        println!(
            "  {} {:<34} [{:02}] {}",
            field.tag,
            tag_name(&field.tag),
            field.value.len(),
            field.value
        );
        for child in &field.children {
            println!("       {} [{:02}] {}", child.tag, child.value.len(), child.value);
        }
    }
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("brcode {}", env!("CARGO_PKG_VERSION"));
    println!("rustc  {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
