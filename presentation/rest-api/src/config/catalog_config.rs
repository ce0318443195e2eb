use std::env;
use std::path::PathBuf;

use business::domain::product::model::Product;
use persistence::catalog::load_catalog;

/// Load the product catalog from the JSON file on disk
///
/// Environment variables:
/// - PRODUCTS_FILE: Path to the catalog file (default: "data/products.json")
///
/// # Errors
/// Returns error if the file cannot be read or parsed
pub async fn init_catalog() -> anyhow::Result<Vec<Product>> {
    let path = env::var("PRODUCTS_FILE").unwrap_or_else(|_| "data/products.json".to_string());
    let products = load_catalog(&PathBuf::from(path)).await?;
    Ok(products)
}
