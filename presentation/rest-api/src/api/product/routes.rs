use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::add_rating::{AddRatingParams, AddRatingUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductResponse, RateProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    add_rating_use_case: Arc<dyn AddRatingUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        add_rating_use_case: Arc<dyn AddRatingUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            add_rating_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for listing catalog products and submitting ratings.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product in catalog order, including its full rating
    /// history.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Submit a rating for a product
    ///
    /// Acknowledges every well-formed submission with 200. Ratings outside
    /// [1,5] and ratings for unknown product identifiers are discarded
    /// without an error.
    #[oai(path = "/products", method = "patch", tag = "ApiTags::Products")]
    async fn rate_product(&self, body: Json<RateProductRequest>) -> RateProductResponse {
        let params = AddRatingParams {
            product_id: body.0.product_id,
            rating: body.0.rating,
        };

        match self.add_rating_use_case.execute(params).await {
            Ok(()) => RateProductResponse::Ok,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RateProductResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RateProductResponse {
    /// Returned for matched and unmatched submissions alike
    #[oai(status = 200)]
    Ok,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
