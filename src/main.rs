//! Shop Inventory - console product catalog
//!
//! Loads the catalog from the CSV store file (starting empty if it is
//! missing or unreadable) and runs the interactive menu.

use clap::Parser;
use shop_inventory::config::{DEFAULT_DATA_FILE, DEFAULT_LOW_STOCK_THRESHOLD};
use shop_inventory::{console, Catalog, Config};
use std::path::PathBuf;

/// Console shop management - product catalog with CSV persistence
#[derive(Parser, Debug)]
#[command(name = "shop_inventory")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV store file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Quantity below which a product counts as low stock
    #[arg(long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
    low_stock_threshold: u32,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config {
        data_file: args.data_file,
        low_stock_threshold: args.low_stock_threshold,
    };

    let mut catalog = Catalog::new(&config.data_file);
    match catalog.load() {
        Ok(report) => {
            println!(
                "Loaded {} products from {}",
                report.loaded,
                catalog.path().display()
            );
            if report.skipped > 0 {
                println!("Warning: skipped {} invalid rows", report.skipped);
            }
        }
        Err(e) => {
            log::error!("Failed to load catalog: {}", e);
            println!("Error: {}", e);
            println!("Starting with an empty catalog.");
        }
    }

    console::run(&mut catalog, &config);
}
