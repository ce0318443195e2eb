use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product title
    pub title: String,
    /// Product description
    pub description: String,
    /// Product image URL
    pub image: String,
    /// Product page URL
    pub url: String,
    /// Submitted ratings, oldest first
    pub ratings: Vec<i32>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            image: product.image,
            url: product.url,
            ratings: product.ratings.iter().map(|r| r.value()).collect(),
        }
    }
}

/// Rating submission for a product.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RateProductRequest {
    /// Identifier of the product being rated
    pub product_id: String,
    /// Candidate rating value, kept only when between 1 and 5
    pub rating: i32,
}
