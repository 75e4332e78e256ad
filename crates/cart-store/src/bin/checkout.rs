//! # Checkout
//!
//! Runs one cart session: builds the cart from item entries, prints the
//! report, and saves the records to the cart file.
//!
//! ## Usage
//! ```bash
//! # Demo cart (Phone, Shirt, Rice)
//! cargo run -p cart-store --bin checkout
//!
//! # Custom items
//! cargo run -p cart-store --bin checkout -- \
//!     electronics:Laptop:999.99:24 clothing:Jacket:80:L grocery:Apples:3.5:1.25
//!
//! # Different output file
//! cargo run -p cart-store --bin checkout -- --file ./out/cart.txt
//! ```

use std::env;
use std::process::ExitCode;

use cart_core::{Cart, Item, Money, Weight};
use cart_store::{entry, CartStore, StoreConfig, StoreError, StoreResult};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Checkout failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Checkout {
        config: StoreConfig,
        entries: Vec<String>,
    },
}

fn run() -> StoreResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (config, entries) = match parse_args(&args, StoreConfig::from_env()?)? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Checkout { config, entries } => (config, entries),
    };

    let mut cart = Cart::new();
    if entries.is_empty() {
        info!("No items given, using demo cart");
        cart.extend(demo_items());
    } else {
        for entry in &entries {
            cart.append(entry::parse_entry(entry)?);
        }
    }

    for line in cart.report() {
        println!("{line}");
    }

    let store = CartStore::new(config);
    let written = store.save(&cart)?;
    println!();
    println!("Saved {written} record(s) to {}", store.path().display());

    Ok(())
}

/// Splits arguments into options and item entries.
///
/// `--file` overrides the path from `config`. A `--file` with no value
/// after it is an error rather than a silent fallback.
fn parse_args(args: &[String], mut config: StoreConfig) -> StoreResult<Command> {
    let mut entries = Vec::new();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                let path = args.next().ok_or_else(|| StoreError::InvalidConfig {
                    key: arg.clone(),
                    value: String::new(),
                })?;
                config.cart_path = path.into();
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => entries.push(other.to_string()),
        }
    }

    Ok(Command::Checkout { config, entries })
}

fn demo_items() -> [Item; 3] {
    [
        Item::electronics("Phone", Money::from_major_minor(500, 0), 12),
        Item::clothing("Shirt", Money::from_major_minor(20, 0), "M"),
        Item::grocery("Rice", Money::from_major_minor(2, 0), Weight::from_kg(5)),
    ]
}

fn print_help() {
    println!("Cart Ledger Checkout");
    println!();
    println!("Usage: checkout [OPTIONS] [ITEM...]");
    println!();
    println!("Items:");
    println!("  electronics:<name>:<price>:<warranty months>");
    println!("  clothing:<name>:<price>:<size>");
    println!("  grocery:<name>:<price per kg>:<weight kg>");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>  Cart file to write (default: $CART_FILE or cart.txt)");
    println!("  -h, --help         Show this help message");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, with debug for the cart crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cart_store=debug,cart_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
