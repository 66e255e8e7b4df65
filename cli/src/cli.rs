//! # CLI Interface
//!
//! Defines the command-line argument structure for `brcode` using
//! `clap` derive. Supports three subcommands: `generate`, `check`,
//! and `version`.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// PIX BR Code generator.
///
/// Builds "PIX Copia e Cola" payment payloads from merchant
/// configuration, and validates codes produced elsewhere.
#[derive(Parser, Debug)]
#[command(
    name = "brcode",
    about = "PIX BR Code generator and validator",
    version,
    propagate_version = true
)]
pub struct BrCodeCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log output format: pretty or json.
    #[arg(long, global = true, env = "BRCODE_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

/// Top-level subcommands for the `brcode` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a BR Code payload and print it to stdout.
    Generate(GenerateArgs),
    /// Validate a BR Code — checks structure and CRC, prints the
    /// decoded field tree.
    Check(CheckArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// PIX key of the receiving account (CPF, CNPJ, phone, email, or EVP).
    ///
    /// **Prefer the environment variable** — flags leak into shell history
    /// and process listings.
    #[arg(long, short = 'k', env = "PIX_KEY", hide_env_values = true)]
    pub key: String,

    /// Merchant name as it should appear in the payer's banking app.
    ///
    /// Accents are folded to plain ASCII; longer names are truncated
    /// to 25 characters.
    #[arg(long, short = 'n', env = "PIX_MERCHANT_NAME")]
    pub name: String,

    /// Merchant city.
    ///
    /// Same folding rules as the name; truncated to 15 characters.
    #[arg(long, short = 'c', env = "PIX_MERCHANT_CITY")]
    pub city: String,

    /// Payment amount in BRL, e.g. `55.00`. Omit for an open-amount code
    /// where the payer types the value.
    #[arg(long, short = 'a')]
    pub amount: Option<Decimal>,

    /// Transaction reference (booking id, order number).
    ///
    /// Non-alphanumeric characters are stripped; truncated to 25.
    #[arg(long, short = 'r')]
    pub reference: Option<String>,

    /// Free-text description shown alongside the payment.
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Emit a JSON object instead of the bare payload.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The BR Code to validate. Reads stdin when omitted, so codes can
    /// be piped in without touching shell quoting.
    pub code: Option<String>,

    /// Emit the decoded field tree as JSON.
    #[arg(long)]
    pub json: bool,
}
