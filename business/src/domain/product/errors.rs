#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.rating_out_of_range")]
    RatingOutOfRange,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
