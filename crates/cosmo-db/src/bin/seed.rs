//! # Seed Data Generator
//!
//! Populates the database with sample cosmetics for development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 products (default)
//! cargo run -p cosmo-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p cosmo-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p cosmo-db --bin seed -- --db ./data/stock.db
//! ```
//!
//! ## Generated Products
//! Cycles through every category with a handful of names each. Expiration
//! dates are spread around today, so the list shows a mix of expired,
//! expiring-soon and normal rows.
//!
//! Each product has:
//! - Unique code: `{PREFIX}-{NAME}-{INDEX}`
//! - No image (the field is left empty)

use chrono::{Days, Local, NaiveDate};
use cosmo_core::catalog::visible_products;
use cosmo_core::{Category, CategoryFilter, NewProduct, StatusSummary};
use cosmo_db::{Database, DbConfig};
use std::env;

/// Sample names per category, with a code prefix.
const CATALOG: &[(Category, &str, &[&str])] = &[
    (
        Category::Skincare,
        "SKN",
        &[
            "Hydrating Serum",
            "Night Cream",
            "Vitamin C Toner",
            "Clay Mask",
            "Sunscreen SPF50",
        ],
    ),
    (
        Category::Makeup,
        "MKP",
        &[
            "Matte Lipstick",
            "Liquid Foundation",
            "Volume Mascara",
            "Blush Palette",
            "Brow Pencil",
        ],
    ),
    (
        Category::Haircare,
        "HAR",
        &[
            "Argan Shampoo",
            "Repair Conditioner",
            "Curl Cream",
            "Heat Protectant",
        ],
    ),
    (
        Category::Fragrance,
        "FRG",
        &["Rose Eau de Parfum", "Citrus Cologne", "Vanilla Mist"],
    ),
    (
        Category::Nails,
        "NAL",
        &["Gel Polish Red", "Top Coat", "Cuticle Oil"],
    ),
    (
        Category::Tools,
        "TLS",
        &["Blending Sponge", "Eyelash Curler", "Kabuki Brush"],
    ),
    (
        Category::BathAndBody,
        "BTH",
        &["Shea Body Butter", "Lavender Bath Salts", "Coconut Scrub"],
    ),
];

/// Day offsets from today, cycled across generated products.
const EXPIRY_OFFSETS: &[i64] = &[-45, -1, 0, 10, 30, 31, 90, 365, 730];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from("./cosmo_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Cosmo Stock Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./cosmo_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Cosmo Stock Seed Data Generator");
    println!("==================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Schema ready");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let today = Local::now().date_naive();
    let repo = db.products();
    let mut generated = 0;
    let mut seed = 0;

    // Round-robin over the catalog until `count` rows exist
    while generated < count {
        let mut progressed = false;
        for (category, prefix, names) in CATALOG {
            let name = names[seed % names.len()];
            let product = generate_product(*category, prefix, name, seed, today);
            seed += 1;

            if let Err(e) = repo.create(&product).await {
                eprintln!("Failed to insert {}: {}", product.code, e);
                continue;
            }
            progressed = true;
            generated += 1;
            if generated >= count {
                break;
            }
        }
        if !progressed {
            break;
        }
    }

    println!();
    println!("✓ Generated {} products", generated);

    let all = repo.get_all().await?;
    let summary = StatusSummary::tally(&visible_products(&all, CategoryFilter::All, "", today));
    println!(
        "  Expired: {}, expiring soon: {}, normal: {}",
        summary.expired, summary.expiring_soon, summary.normal
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds one sample product.
fn generate_product(
    category: Category,
    prefix: &str,
    name: &str,
    seed: usize,
    today: NaiveDate,
) -> NewProduct {
    let short: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    let code = format!("{}-{}-{:03}", prefix, short, seed);

    let offset = EXPIRY_OFFSETS[seed % EXPIRY_OFFSETS.len()];
    let expiration_date = if offset < 0 {
        today.checked_sub_days(Days::new(offset.unsigned_abs()))
    } else {
        today.checked_add_days(Days::new(offset as u64))
    }
    .unwrap_or(today);

    NewProduct {
        code,
        name: name.to_string(),
        description: format!("{} ({})", name, category),
        expiration_date,
        image_path: String::new(),
        category: category.as_str().to_string(),
    }
}
