use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::enquiry::use_cases::product_link::{
    ProductEnquiryLinkParams, ProductEnquiryLinkUseCase,
};
use business::domain::product::filter::ProductFilter;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_similar::{
    GetSimilarProductsParams, GetSimilarProductsUseCase,
};
use business::domain::product::use_cases::list_catalog::{ListCatalogParams, ListCatalogUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CatalogPageResponse, EnquiryLinkResponse, ProductResponse};
use crate::api::tags::ApiTags;

const DEFAULT_PER_PAGE: usize = 20;
const DEFAULT_SIMILAR_LIMIT: usize = 6;

pub struct ProductApi {
    list_use_case: Arc<dyn ListCatalogUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_similar_use_case: Arc<dyn GetSimilarProductsUseCase>,
    enquiry_link_use_case: Arc<dyn ProductEnquiryLinkUseCase>,
}

impl ProductApi {
    pub fn new(
        list_use_case: Arc<dyn ListCatalogUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_similar_use_case: Arc<dyn GetSimilarProductsUseCase>,
        enquiry_link_use_case: Arc<dyn ProductEnquiryLinkUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            get_by_id_use_case,
            get_similar_use_case,
            enquiry_link_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

/// Storefront catalog API
///
/// Customer-facing product reads. Hidden products never appear here.
#[OpenApi]
impl ProductApi {
    /// List catalog products
    ///
    /// Returns visible products filtered by free-text search, category,
    /// company, price range and badge flags, sorted by brand name. Served
    /// from an in-memory cache refreshed at most every five minutes.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    #[allow(clippy::too_many_arguments)]
    async fn list_products(
        &self,
        /// Free-text search; every word must match brand, salt, company or category
        q: Query<Option<String>>,
        /// Categories to include (repeatable)
        category: Query<Option<Vec<String>>>,
        /// Companies to include (repeatable)
        company: Query<Option<Vec<String>>>,
        min_price: Query<Option<f64>>,
        max_price: Query<Option<f64>>,
        /// Only products flagged as new arrivals
        new_arrivals: Query<Option<bool>>,
        /// Only products currently in stock
        in_stock: Query<Option<bool>>,
        page: Query<Option<u64>>,
        per_page: Query<Option<u64>>,
    ) -> ListProductsResponse {
        let params = ListCatalogParams {
            filter: ProductFilter {
                query: q.0.filter(|s| !s.trim().is_empty()),
                categories: category.0.unwrap_or_default(),
                companies: company.0.unwrap_or_default(),
                min_price: min_price.0,
                max_price: max_price.0,
                new_arrivals_only: new_arrivals.0.unwrap_or(false),
                in_stock_only: in_stock.0.unwrap_or(false),
            },
            page: page.0.unwrap_or(1) as usize,
            per_page: per_page.0.unwrap_or(DEFAULT_PER_PAGE as u64) as usize,
        };

        match self.list_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single visible product by its identifier.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let product_id = match ProductId::new(id.0) {
            Ok(product_id) => product_id,
            Err(_) => return GetProductByIdResponse::BadRequest(invalid_id()),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: product_id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List similar products
    ///
    /// Ranks other visible products by name similarity to the given one.
    #[oai(
        path = "/products/:id/similar",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_similar_products(
        &self,
        id: Path<String>,
        limit: Query<Option<u64>>,
    ) -> GetSimilarProductsResponse {
        let product_id = match ProductId::new(id.0) {
            Ok(product_id) => product_id,
            Err(_) => return GetSimilarProductsResponse::BadRequest(invalid_id()),
        };

        match self
            .get_similar_use_case
            .execute(GetSimilarProductsParams {
                id: product_id,
                limit: limit.0.unwrap_or(DEFAULT_SIMILAR_LIMIT as u64) as usize,
            })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetSimilarProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetSimilarProductsResponse::NotFound(json),
                    _ => GetSimilarProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a WhatsApp enquiry link for a product
    ///
    /// Returns a deep link that opens WhatsApp with a pre-filled enquiry
    /// about the product.
    #[oai(
        path = "/products/:id/enquiry-link",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_enquiry_link(&self, id: Path<String>) -> GetEnquiryLinkResponse {
        let product_id = match ProductId::new(id.0) {
            Ok(product_id) => product_id,
            Err(_) => return GetEnquiryLinkResponse::BadRequest(invalid_id()),
        };

        match self
            .enquiry_link_use_case
            .execute(ProductEnquiryLinkParams { product_id })
            .await
        {
            Ok(link) => GetEnquiryLinkResponse::Ok(Json(EnquiryLinkResponse { link })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetEnquiryLinkResponse::NotFound(json),
                    _ => GetEnquiryLinkResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSimilarProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetEnquiryLinkResponse {
    #[oai(status = 200)]
    Ok(Json<EnquiryLinkResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
