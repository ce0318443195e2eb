use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::add_rating::{AddRatingParams, AddRatingUseCase};
use crate::domain::product::value_objects::Rating;

pub struct AddRatingUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddRatingUseCase for AddRatingUseCaseImpl {
    async fn execute(&self, params: AddRatingParams) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Rating {} submitted for product {}",
            params.rating, params.product_id
        ));

        let rating = match Rating::new(params.rating) {
            Ok(rating) => rating,
            Err(_) => {
                self.logger.warn(&format!(
                    "Discarding out-of-range rating {} for product {}",
                    params.rating, params.product_id
                ));
                return Ok(());
            }
        };

        match self.repository.add_rating(&params.product_id, rating).await {
            Ok(()) => {
                self.logger
                    .info(&format!("Rating recorded for product {}", params.product_id));
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.logger.warn(&format!(
                    "Discarding rating for unknown product {}",
                    params.product_id
                ));
                Ok(())
            }
            Err(other) => Err(ProductError::Repository(other)),
        }
    }
}
