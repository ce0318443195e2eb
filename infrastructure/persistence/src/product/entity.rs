use serde::Deserialize;

use business::domain::product::model::Product;
use business::domain::product::value_objects::Rating;

/// One record of the catalog file. Ratings may be absent or `null` for
/// products that have never been rated.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    #[serde(default)]
    pub ratings: Option<Vec<i32>>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        let ratings = self
            .ratings
            .unwrap_or_default()
            .into_iter()
            .filter_map(|r| Rating::new(r).ok())
            .collect();

        Product::from_catalog(
            self.id,
            self.title,
            self.description,
            self.image,
            self.url,
            ratings,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_record_with_rating_history() {
        let entity: ProductEntity = serde_json::from_str(
            r#"{"id": "1", "title": "Mug", "description": "Stoneware mug", "image": "https://example.com/mug.jpg", "url": "https://example.com/mug", "ratings": [4, 5]}"#,
        )
        .unwrap();

        let product = entity.into_domain();

        assert_eq!(product.id, "1");
        let values: Vec<i32> = product.ratings.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![4, 5]);
    }

    #[test]
    fn should_map_null_ratings_to_empty_history() {
        let entity: ProductEntity = serde_json::from_str(
            r#"{"id": "2", "title": "Basket", "description": "Seagrass basket", "image": "https://example.com/basket.jpg", "url": "https://example.com/basket", "ratings": null}"#,
        )
        .unwrap();

        let product = entity.into_domain();

        assert!(product.ratings.is_empty());
    }

    #[test]
    fn should_drop_out_of_range_ratings_on_load() {
        let entity: ProductEntity = serde_json::from_str(
            r#"{"id": "3", "title": "Scarf", "description": "Wool scarf", "image": "https://example.com/scarf.jpg", "url": "https://example.com/scarf", "ratings": [0, 4, 9]}"#,
        )
        .unwrap();

        let product = entity.into_domain();

        let values: Vec<i32> = product.ratings.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![4]);
    }
}
