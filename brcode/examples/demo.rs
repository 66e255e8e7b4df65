//! Terminal walkthrough of the BR Code lifecycle.
//!
//! Builds a payment code the way the booking flow does — merchant config,
//! an amount, a messy booking id as reference — then decodes its own
//! output and prints the field table, the way the `check` CLI command
//! would for a pasted code.
//!
//! Run with:
//!   cargo run --example demo

use pix_brcode::config::tag_name;
use pix_brcode::payload::{decode, BrCodeBuilder};
use rust_decimal::Decimal;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

fn main() {
    println!("{BOLD}pix-brcode — demo{RESET}");
    println!();

    let booking_id = "abc-123-def-456-ghi";
    let total = Decimal::new(5500, 2);

    println!("  merchant : Lana Pet Care, Florianópolis");
    println!("  booking  : {booking_id}");
    println!("  amount   : R$ {total}");
    println!();

    let code = BrCodeBuilder::new("05535232955", "Lana Pet Care", "Florianópolis")
        .amount(total)
        .reference(booking_id)
        .description(format!("Pedido {}", &booking_id[..8]))
        .build()
        .expect("demo inputs are valid");

    println!("{GREEN}{BOLD}PIX Copia e Cola:{RESET}");
    println!("  {code}");
    println!();

    println!("{BOLD}Decoded back:{RESET}");
    let fields = decode(&code).expect("our own output must decode");
    for field in &fields {
        println!(
            "  {CYAN}{}{RESET} {:<34} {DIM}[{:02}]{RESET} {}",
            field.tag,
            tag_name(&field.tag),
            field.value.len(),
            field.value
        );
        for child in &field.children {
            println!(
                "       {CYAN}{}{RESET} {DIM}[{:02}]{RESET} {}",
                child.tag,
                child.value.len(),
                child.value
            );
        }
    }
}
