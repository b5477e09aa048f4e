use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::product::value_objects::ProductId;

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, CheckoutResponse, UpdateCartQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    checkout_use_case: Arc<dyn CheckoutUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        checkout_use_case: Arc<dyn CheckoutUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
            checkout_use_case,
        }
    }
}

fn invalid_cart_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "cart.invalid_id".to_string(),
    })
}

fn invalid_product_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

/// Shopping cart API
///
/// Carts are stored server-side under a client-chosen UUID; the device
/// keeps only the id. Checkout hands the cart to WhatsApp and clears it.
#[OpenApi]
impl CartApi {
    /// Get a cart
    ///
    /// Unknown ids yield an empty cart rather than a 404.
    #[oai(path = "/carts/:cart_id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart(&self, cart_id: Path<String>) -> CartStateResponse {
        let cart_id = match Uuid::parse_str(&cart_id.0) {
            Ok(cart_id) => cart_id,
            Err(_) => return CartStateResponse::BadRequest(invalid_cart_id()),
        };

        match self.get_use_case.execute(GetCartParams { cart_id }).await {
            Ok(cart) => CartStateResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartStateResponse::InternalError(json)
            }
        }
    }

    /// Add an item to a cart
    ///
    /// Adding a product already in the cart accumulates its quantity.
    #[oai(
        path = "/carts/:cart_id/items",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_item(
        &self,
        cart_id: Path<String>,
        body: Json<AddCartItemRequest>,
    ) -> CartMutationResponse {
        let cart_id = match Uuid::parse_str(&cart_id.0) {
            Ok(cart_id) => cart_id,
            Err(_) => return CartMutationResponse::BadRequest(invalid_cart_id()),
        };
        let product_id = match ProductId::new(body.0.product_id) {
            Ok(product_id) => product_id,
            Err(_) => return CartMutationResponse::BadRequest(invalid_product_id()),
        };

        match self
            .add_item_use_case
            .execute(AddCartItemParams {
                cart_id,
                product_id,
                quantity: body.0.quantity,
            })
            .await
        {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartMutationResponse::BadRequest(json),
                    404 => CartMutationResponse::NotFound(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }

    /// Set an item's quantity
    ///
    /// A quantity of 0 removes the line.
    #[oai(
        path = "/carts/:cart_id/items/:product_id",
        method = "put",
        tag = "ApiTags::Carts"
    )]
    async fn update_quantity(
        &self,
        cart_id: Path<String>,
        product_id: Path<String>,
        body: Json<UpdateCartQuantityRequest>,
    ) -> CartMutationResponse {
        let cart_id = match Uuid::parse_str(&cart_id.0) {
            Ok(cart_id) => cart_id,
            Err(_) => return CartMutationResponse::BadRequest(invalid_cart_id()),
        };
        let product_id = match ProductId::new(product_id.0) {
            Ok(product_id) => product_id,
            Err(_) => return CartMutationResponse::BadRequest(invalid_product_id()),
        };

        match self
            .update_quantity_use_case
            .execute(UpdateCartQuantityParams {
                cart_id,
                product_id,
                quantity: body.0.quantity,
            })
            .await
        {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartMutationResponse::BadRequest(json),
                    404 => CartMutationResponse::NotFound(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an item from a cart
    #[oai(
        path = "/carts/:cart_id/items/:product_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_item(
        &self,
        cart_id: Path<String>,
        product_id: Path<String>,
    ) -> CartMutationResponse {
        let cart_id = match Uuid::parse_str(&cart_id.0) {
            Ok(cart_id) => cart_id,
            Err(_) => return CartMutationResponse::BadRequest(invalid_cart_id()),
        };
        let product_id = match ProductId::new(product_id.0) {
            Ok(product_id) => product_id,
            Err(_) => return CartMutationResponse::BadRequest(invalid_product_id()),
        };

        match self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                cart_id,
                product_id,
            })
            .await
        {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartMutationResponse::BadRequest(json),
                    404 => CartMutationResponse::NotFound(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear a cart
    #[oai(path = "/carts/:cart_id", method = "delete", tag = "ApiTags::Carts")]
    async fn clear_cart(&self, cart_id: Path<String>) -> ClearCartResponse {
        let cart_id = match Uuid::parse_str(&cart_id.0) {
            Ok(cart_id) => cart_id,
            Err(_) => return ClearCartResponse::BadRequest(invalid_cart_id()),
        };

        match self
            .clear_use_case
            .execute(ClearCartParams { cart_id })
            .await
        {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }

    /// Check out a cart
    ///
    /// Builds the WhatsApp order hand-off, clears the cart and returns the
    /// deep link plus a client-generated order number.
    #[oai(
        path = "/carts/:cart_id/checkout",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn checkout(&self, cart_id: Path<String>) -> CheckoutCartResponse {
        let cart_id = match Uuid::parse_str(&cart_id.0) {
            Ok(cart_id) => cart_id,
            Err(_) => return CheckoutCartResponse::BadRequest(invalid_cart_id()),
        };

        match self
            .checkout_use_case
            .execute(CheckoutParams { cart_id })
            .await
        {
            Ok(summary) => CheckoutCartResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutCartResponse::BadRequest(json),
                    _ => CheckoutCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartStateResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutCartResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
