//! # Seed Data Generator
//!
//! Populates a database with demo products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Custom amount, database path and editor name
//! cargo run -p stockroom-db --bin seed -- --count 200 --db ./data/inventory.db --person seed
//! ```
//!
//! Every product goes through `ProductRepository::add`, so each one gets
//! its initial stock log entry just like a product added from the form.

use std::env;

use stockroom_core::NewProduct;
use stockroom_db::{Database, DbConfig};

/// Product families for demo data.
const FAMILIES: &[(&str, &[&str])] = &[
    (
        "FST",
        &[
            "Hex Bolt M6",
            "Hex Bolt M8",
            "Wood Screw 4x40",
            "Wall Plug 6mm",
            "Washer M8",
            "Lock Nut M6",
        ],
    ),
    (
        "ELC",
        &[
            "Cable Tie 200mm",
            "Wago Connector 3-way",
            "Heat Shrink 6mm",
            "Fuse 5A",
            "LED Strip 1m",
        ],
    ),
    (
        "TLS",
        &[
            "Utility Knife",
            "Tape Measure 5m",
            "Spirit Level 60cm",
            "Hex Key Set",
            "Pliers 160mm",
        ],
    ),
    (
        "PKG",
        &[
            "Carton 30x20x20",
            "Bubble Wrap Roll",
            "Packing Tape",
            "Label Roll 100",
        ],
    ),
];

/// Variants multiplied onto every family member.
const VARIANTS: &[&str] = &["Single", "Pack of 10", "Pack of 100"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from("./inventory_dev.db");
    let mut person = String::from("seed");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = parse_count(&args[i + 1])?;
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--person" | "-p" => {
                if i + 1 < args.len() {
                    person = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>      Number of products to generate (default: 60)");
                println!("  -d, --db <PATH>      Database file path (default: ./inventory_dev.db)");
                println!("  -p, --person <NAME>  Name recorded as the adding person (default: seed)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let available = capacity();
    if count > available {
        println!(
            "⚠ Requested {} products but only {} distinct demo products exist; generating {}",
            count, available, available
        );
        count = available;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, schema ready");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    'outer: for (family, names) in FAMILIES {
        for (name_idx, name) in names.iter().enumerate() {
            for (variant_idx, variant) in VARIANTS.iter().enumerate() {
                if generated >= count {
                    break 'outer;
                }

                let product = generate_product(family, name, variant, name_idx * 10 + variant_idx, &person);

                if let Err(e) = db.products().add(&product).await {
                    eprintln!("Failed to add {}: {}", product.identifier, e);
                    continue;
                }

                generated += 1;
            }
        }
    }

    println!();
    println!("✓ Generated {} products in {:?}", generated, start.elapsed());

    // Spot-check the log invariant on the first product.
    if let Some((family, names)) = FAMILIES.first() {
        if let Some(name) = names.first() {
            let identifier = identifier_for(family, name, 0);
            let logged = db.stock_logs().total_delta(&identifier).await?;
            println!("  {}: {} units logged", identifier, logged);
        }
    }

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Parses `--count`; anything but a whole number is an error.
fn parse_count(raw: &str) -> Result<usize, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("--count expects a whole number, got '{}'", raw))
}

/// Number of distinct demo products the families and variants can produce.
fn capacity() -> usize {
    FAMILIES.iter().map(|(_, names)| names.len()).sum::<usize>() * VARIANTS.len()
}

fn identifier_for(family: &str, name: &str, seed: usize) -> String {
    let stem: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(4)
        .collect::<String>()
        .to_uppercase();
    format!("{}-{}-{:03}", family, stem, seed)
}

/// Generates one demo product with a stock level between 0 and 250.
fn generate_product(family: &str, name: &str, variant: &str, seed: usize, person: &str) -> NewProduct {
    NewProduct {
        identifier: identifier_for(family, name, seed),
        description: format!("{} ({})", name, variant),
        quantity: ((seed * 37) % 251) as i64,
        person: person.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("200").unwrap(), 200);
        assert_eq!(parse_count(" 5 ").unwrap(), 5);
        assert!(parse_count("lots").unwrap_err().contains("lots"));
        assert!(parse_count("-1").is_err());
    }

    #[test]
    fn test_capacity_matches_generated_identifiers() {
        let mut identifiers = std::collections::HashSet::new();
        for (family, names) in FAMILIES {
            for (name_idx, name) in names.iter().enumerate() {
                for (variant_idx, variant) in VARIANTS.iter().enumerate() {
                    let product =
                        generate_product(family, name, variant, name_idx * 10 + variant_idx, "seed");
                    identifiers.insert(product.identifier);
                }
            }
        }
        assert_eq!(identifiers.len(), capacity());
    }
}
