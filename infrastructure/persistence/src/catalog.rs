use std::path::Path;

use thiserror::Error;
use tokio::fs;

use business::domain::product::model::Product;

use crate::product::entity::ProductEntity;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog.read_error")]
    ReadError,
    #[error("catalog.parse_error")]
    ParseError,
}

/// Reads the catalog file and converts its records into domain products.
///
/// The file holds a JSON array of product records. It is read once at process
/// start; ratings submitted afterwards live in memory only.
pub async fn load_catalog(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|_| CatalogError::ReadError)?;

    let entities: Vec<ProductEntity> =
        serde_json::from_str(&raw).map_err(|_| CatalogError::ParseError)?;

    Ok(entities.into_iter().map(|e| e.into_domain()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_fail_with_read_error_when_file_missing() {
        let result = load_catalog(Path::new("no/such/catalog.json")).await;

        assert!(matches!(result, Err(CatalogError::ReadError)));
    }

    #[tokio::test]
    async fn should_load_products_in_file_order() {
        let dir = std::env::temp_dir().join("catalog_loader_test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("products.json");
        tokio::fs::write(
            &path,
            r#"[
                {"id": "1", "title": "Mug", "description": "Stoneware mug", "image": "https://example.com/mug.jpg", "url": "https://example.com/mug", "ratings": [4, 5]},
                {"id": "2", "title": "Basket", "description": "Seagrass basket", "image": "https://example.com/basket.jpg", "url": "https://example.com/basket", "ratings": null}
            ]"#,
        )
        .await
        .unwrap();

        let products = load_catalog(&path).await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[1].id, "2");
        let values: Vec<i32> = products[0].ratings.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![4, 5]);
        assert!(products[1].ratings.is_empty());
    }
}
