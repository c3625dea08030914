//! Seeded sample dataset: a product catalog and a year of daily sales.

use anyhow::Context;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default RNG seed, so repeated runs produce the same dataset.
pub const DEFAULT_SEED: u64 = 42;

/// Days of history before the end date (the end date itself is included).
pub const HISTORY_DAYS: i64 = 365;

/// Products generated per category.
pub const PRODUCTS_PER_CATEGORY: usize = 20;

/// Category name and its base price range.
pub const CATEGORIES: [(&str, f64, f64); 5] = [
    ("Electronics", 100.0, 2000.0),
    ("Clothing", 20.0, 200.0),
    ("Books", 10.0, 50.0),
    ("Home & Kitchen", 30.0, 500.0),
    ("Sports", 25.0, 300.0),
];

pub const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

pub const PAYMENT_METHODS: [&str; 4] = ["Credit Card", "Debit Card", "PayPal", "Cash on Delivery"];

/// Number of distinct customer ids (`CUST_0001` ..= `CUST_1000`).
pub const CUSTOMER_COUNT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub base_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sale {
    pub date: NaiveDate,
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// 1..=5, present only when the customer left a review
    pub rating: Option<u8>,
    pub reviewed: bool,
    pub customer_id: String,
    pub region: String,
    pub payment_method: String,
    pub total_amount: f64,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `ELE_001`-style id: first three letters of the category, upper-cased.
fn product_id(category: &str, index: usize) -> String {
    let prefix: String = category.chars().take(3).collect::<String>().to_uppercase();
    format!("{}_{:03}", prefix, index)
}

fn generate_products(rng: &mut StdRng) -> Vec<Product> {
    let mut products = Vec::with_capacity(CATEGORIES.len() * PRODUCTS_PER_CATEGORY);
    for (category, min_price, max_price) in CATEGORIES {
        for i in 1..=PRODUCTS_PER_CATEGORY {
            products.push(Product {
                product_id: product_id(category, i),
                product_name: format!("{} Product {}", category, i),
                category: category.to_string(),
                base_price: round2(rng.gen_range(min_price..max_price)),
            });
        }
    }
    products
}

fn is_weekend(date: &NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn generate_sale(rng: &mut StdRng, date: NaiveDate, product: &Product) -> Sale {
    let unit_price = round2(product.base_price * rng.gen_range(0.9..1.1));
    let rating: u8 = rng.gen_range(1..6);
    let reviewed = rng.gen_bool(0.3);
    let quantity: u32 = rng.gen_range(1..5);

    Sale {
        date,
        product_id: product.product_id.clone(),
        product_name: product.product_name.clone(),
        category: product.category.clone(),
        quantity,
        unit_price,
        rating: reviewed.then_some(rating),
        reviewed,
        customer_id: format!("CUST_{:04}", rng.gen_range(1..=CUSTOMER_COUNT)),
        region: REGIONS[rng.gen_range(0..REGIONS.len())].to_string(),
        payment_method: PAYMENT_METHODS[rng.gen_range(0..PAYMENT_METHODS.len())].to_string(),
        total_amount: round2(quantity as f64 * unit_price),
    }
}

/// Generate products and daily sales for the year ending at `end`.
///
/// Weekends get 50..100 sales per day, weekdays 30..70.
pub fn generate(seed: u64, end: NaiveDate) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let products = generate_products(&mut rng);

    let start = end - Duration::days(HISTORY_DAYS);
    let mut sales = Vec::new();
    let mut date = start;
    while date <= end {
        let num_sales = if is_weekend(&date) {
            rng.gen_range(50..100)
        } else {
            rng.gen_range(30..70)
        };
        for _ in 0..num_sales {
            let product = &products[rng.gen_range(0..products.len())];
            sales.push(generate_sale(&mut rng, date, product));
        }
        date += Duration::days(1);
    }

    Dataset { products, sales }
}

/// Write rows as CSV with a header line.
pub fn write_csv<W: io::Write, T: Serialize>(writer: W, rows: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `products.csv` and `sales.csv` into `dir`, creating it if needed.
pub fn save_dataset(dataset: &Dataset, dir: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let products_path = dir.join("products.csv");
    let sales_path = dir.join("sales.csv");

    let products_file = fs::File::create(&products_path)
        .with_context(|| format!("Failed to create {}", products_path.display()))?;
    write_csv(products_file, &dataset.products)?;

    let sales_file = fs::File::create(&sales_path)
        .with_context(|| format!("Failed to create {}", sales_path.display()))?;
    write_csv(sales_file, &dataset.sales)?;

    log::info!(
        "Saved {} products and {} sales to {}",
        dataset.products.len(),
        dataset.sales.len(),
        dir.display()
    );
    Ok((products_path, sales_path))
}
