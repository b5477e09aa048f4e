use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateProductRequest {
    /// Explicit identifier; derived from the brand name when omitted
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    /// Brand name (cannot be empty)
    pub brand_name: String,
    /// Generic / salt name
    pub salt_name: String,
    /// Manufacturer
    pub company: String,
    #[oai(skip_serializing_if_is_none)]
    pub packing: Option<String>,
    /// Maximum Retail Price; treated as 0 when omitted
    #[oai(skip_serializing_if_is_none)]
    pub mrp: Option<f64>,
    pub category: String,
    #[oai(default)]
    pub in_stock: bool,
    #[oai(default)]
    pub visible: bool,
    #[oai(default)]
    pub new_arrival: bool,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateProductRequest {
    /// New identifier; when it differs from the path id the row is
    /// re-keyed (insert under the new id, delete the old row)
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    /// Brand name (cannot be empty)
    pub brand_name: String,
    /// Generic / salt name
    pub salt_name: String,
    /// Manufacturer
    pub company: String,
    #[oai(skip_serializing_if_is_none)]
    pub packing: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub mrp: Option<f64>,
    pub category: String,
    pub in_stock: bool,
    pub visible: bool,
    pub new_arrival: bool,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

/// One row of a batch visibility toggle.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct VisibilityChangeRequest {
    pub id: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateVisibilityRequest {
    pub changes: Vec<VisibilityChangeRequest>,
}

/// One row of a batch new-arrival toggle.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct NewArrivalChangeRequest {
    pub id: String,
    pub new_arrival: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateNewArrivalsRequest {
    pub changes: Vec<NewArrivalChangeRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DeleteProductsRequest {
    pub ids: Vec<String>,
}
