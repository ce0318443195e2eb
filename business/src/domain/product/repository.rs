use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::Rating;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError>;
    async fn add_rating(&self, id: &str, rating: Rating) -> Result<(), RepositoryError>;
}
