//! # Database Seed Utility
//!
//! Creates the restaurant database file and inserts the opening data.
//!
//! ## Usage
//! ```bash
//! # Create ./gilded_fork_enterprise.db with the standard seed
//! cargo run -p gilded-db --bin seed
//!
//! # Specify database path
//! cargo run -p gilded-db --bin seed -- --db ./data/gilded.db
//!
//! # Drop an existing file and reseed from scratch
//! cargo run -p gilded-db --bin seed -- --force
//! ```
//!
//! ## Seeded Data
//! - `admin` account (Manager role, password `admin`)
//! - 5 menu categories
//! - 20 floor tables (four-tops, two-tops and booths)
//! - 5 menu items with prices
//! - 4 ingredient stocks and the Ribeye Steak recipe link

use std::env;

use gilded_db::{schema, Database, DbConfig, DEFAULT_DB_FILE};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from(DEFAULT_DB_FILE);
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => {
                force = true;
            }
            "--help" | "-h" => {
                println!("Gilded Fork Database Seed Utility");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./{DEFAULT_DB_FILE})");
                println!("  -f, --force        Delete an existing database file first");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Gilded Fork Database Seed Utility");
    println!("====================================");
    println!("Database: {}", db_path);
    println!();

    if force && std::path::Path::new(&db_path).exists() {
        std::fs::remove_file(&db_path)?;
        println!("⚠ Removed existing database file");
    }

    // Connect without bootstrap so the seed outcome can be reported.
    let config = DbConfig::new(&db_path).bootstrap(false);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");

    schema::create_all(db.pool()).await?;
    println!("✓ Schema ready");

    let seeded = schema::seed(db.pool()).await?;
    if !seeded {
        println!("⚠ Database already seeded");
        println!("  Skipping to avoid duplicates.");
        println!("  Re-run with --force to start from scratch.");
        return Ok(());
    }

    let users = db.staff().count().await?;
    let tables = db.floor().list().await?.len();
    let categories = db.menu().categories().await?.len();
    let stocks = db.stock().list().await?.len();

    println!(
        "✓ Seeded {} user, {} categories, {} tables, {} stocks",
        users, categories, tables, stocks
    );
    println!();
    println!("✓ Seed complete! Sign in with admin / admin.");

    Ok(())
}
