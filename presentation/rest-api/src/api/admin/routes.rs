use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::admin_list::AdminListProductsUseCase;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductsParams, DeleteProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::use_cases::update_new_arrivals::{
    NewArrivalChange, UpdateNewArrivalsParams, UpdateNewArrivalsUseCase,
};
use business::domain::product::use_cases::update_visibility::{
    UpdateVisibilityParams, UpdateVisibilityUseCase, VisibilityChange,
};
use business::domain::product::value_objects::ProductId;

use crate::api::admin::dto::{
    CreateProductRequest, DeleteProductsRequest, UpdateNewArrivalsRequest, UpdateProductRequest,
    UpdateVisibilityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::security::AdminKey;
use crate::api::tags::ApiTags;

pub struct AdminProductApi {
    list_use_case: Arc<dyn AdminListProductsUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductsUseCase>,
    visibility_use_case: Arc<dyn UpdateVisibilityUseCase>,
    new_arrivals_use_case: Arc<dyn UpdateNewArrivalsUseCase>,
}

impl AdminProductApi {
    pub fn new(
        list_use_case: Arc<dyn AdminListProductsUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductsUseCase>,
        visibility_use_case: Arc<dyn UpdateVisibilityUseCase>,
        new_arrivals_use_case: Arc<dyn UpdateNewArrivalsUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            visibility_use_case,
            new_arrivals_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

/// Product administration API
///
/// Every endpoint requires the privileged service key. Batch endpoints are
/// not transactional: rows are applied one by one and the first row
/// failure is reported after the whole batch was attempted.
#[OpenApi]
impl AdminProductApi {
    /// List the full product table
    ///
    /// Returns every product, hidden ones included, newest first.
    #[oai(path = "/admin/products", method = "get", tag = "ApiTags::Admin")]
    async fn list_products(&self, _auth: AdminKey) -> AdminListResponse {
        match self.list_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                AdminListResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AdminListResponse::InternalError(json)
            }
        }
    }

    /// Create a product
    #[oai(path = "/admin/products", method = "post", tag = "ApiTags::Admin")]
    async fn create_product(
        &self,
        _auth: AdminKey,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let params = CreateProductParams {
            id: body.0.id,
            brand_name: body.0.brand_name,
            salt_name: body.0.salt_name,
            company: body.0.company,
            packing: body.0.packing,
            mrp: body.0.mrp,
            category: body.0.category,
            in_stock: body.0.in_stock,
            visible: body.0.visible,
            new_arrival: body.0.new_arrival,
            image_url: body.0.image_url,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Changing the id re-keys the row as insert-new then delete-old; the
    /// two halves are not atomic.
    #[oai(path = "/admin/products/:id", method = "put", tag = "ApiTags::Admin")]
    async fn update_product(
        &self,
        _auth: AdminKey,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let product_id = match ProductId::new(id.0) {
            Ok(product_id) => product_id,
            Err(_) => return UpdateProductResponse::BadRequest(invalid_id()),
        };

        let params = UpdateProductParams {
            id: product_id,
            new_id: body.0.id,
            brand_name: body.0.brand_name,
            salt_name: body.0.salt_name,
            company: body.0.company,
            packing: body.0.packing,
            mrp: body.0.mrp,
            category: body.0.category,
            in_stock: body.0.in_stock,
            visible: body.0.visible,
            new_arrival: body.0.new_arrival,
            image_url: body.0.image_url,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete products in bulk
    #[oai(
        path = "/admin/products/delete",
        method = "post",
        tag = "ApiTags::Admin"
    )]
    async fn delete_products(
        &self,
        _auth: AdminKey,
        body: Json<DeleteProductsRequest>,
    ) -> BatchMutationResponse {
        let ids: Vec<ProductId> = match body
            .0
            .ids
            .into_iter()
            .map(ProductId::new)
            .collect::<Result<_, _>>()
        {
            Ok(ids) => ids,
            Err(_) => return BatchMutationResponse::BadRequest(invalid_id()),
        };

        match self
            .delete_use_case
            .execute(DeleteProductsParams { ids })
            .await
        {
            Ok(()) => BatchMutationResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => BatchMutationResponse::NotFound(json),
                    _ => BatchMutationResponse::InternalError(json),
                }
            }
        }
    }

    /// Toggle visibility in bulk
    #[oai(
        path = "/admin/products/visibility",
        method = "post",
        tag = "ApiTags::Admin"
    )]
    async fn update_visibility(
        &self,
        _auth: AdminKey,
        body: Json<UpdateVisibilityRequest>,
    ) -> BatchMutationResponse {
        let changes: Vec<VisibilityChange> = match body
            .0
            .changes
            .into_iter()
            .map(|c| {
                ProductId::new(c.id).map(|id| VisibilityChange {
                    id,
                    visible: c.visible,
                })
            })
            .collect::<Result<_, _>>()
        {
            Ok(changes) => changes,
            Err(_) => return BatchMutationResponse::BadRequest(invalid_id()),
        };

        match self
            .visibility_use_case
            .execute(UpdateVisibilityParams { changes })
            .await
        {
            Ok(()) => BatchMutationResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => BatchMutationResponse::NotFound(json),
                    _ => BatchMutationResponse::InternalError(json),
                }
            }
        }
    }

    /// Toggle the new-arrival badge in bulk
    #[oai(
        path = "/admin/products/new-arrivals",
        method = "post",
        tag = "ApiTags::Admin"
    )]
    async fn update_new_arrivals(
        &self,
        _auth: AdminKey,
        body: Json<UpdateNewArrivalsRequest>,
    ) -> BatchMutationResponse {
        let changes: Vec<NewArrivalChange> = match body
            .0
            .changes
            .into_iter()
            .map(|c| {
                ProductId::new(c.id).map(|id| NewArrivalChange {
                    id,
                    new_arrival: c.new_arrival,
                })
            })
            .collect::<Result<_, _>>()
        {
            Ok(changes) => changes,
            Err(_) => return BatchMutationResponse::BadRequest(invalid_id()),
        };

        match self
            .new_arrivals_use_case
            .execute(UpdateNewArrivalsParams { changes })
            .await
        {
            Ok(()) => BatchMutationResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => BatchMutationResponse::NotFound(json),
                    _ => BatchMutationResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AdminListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Shared by the batch endpoints: the batch either fully applied (204) or
/// partially applied with the first row failure reported.
#[derive(poem_openapi::ApiResponse)]
pub enum BatchMutationResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
