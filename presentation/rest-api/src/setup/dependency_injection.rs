use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;

use business::application::product::add_rating::AddRatingUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::domain::product::model::Product;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(products: Vec<Product>) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryInMemory::new(products));

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let add_rating_use_case = Arc::new(AddRatingUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api =
            crate::api::product::routes::ProductApi::new(get_all_use_case, add_rating_use_case);

        Self {
            health_api,
            product_api,
        }
    }
}
