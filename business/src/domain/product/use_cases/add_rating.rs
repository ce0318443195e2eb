use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct AddRatingParams {
    pub product_id: String,
    pub rating: i32,
}

/// Records a submitted rating. Out-of-range values and unknown product
/// identifiers are discarded without surfacing an error; the submission is
/// acknowledged either way.
#[async_trait]
pub trait AddRatingUseCase: Send + Sync {
    async fn execute(&self, params: AddRatingParams) -> Result<(), ProductError>;
}
