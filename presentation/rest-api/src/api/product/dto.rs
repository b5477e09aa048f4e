use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::use_cases::list_catalog::CatalogPage;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    /// Product unique identifier (lowercase letters, digits and dashes)
    pub id: String,
    /// Brand name shown on cards and in the cart
    pub brand_name: String,
    /// Generic / salt name
    pub salt_name: String,
    /// Manufacturer
    pub company: String,
    /// Packing description, e.g. "10x10 tablets"
    #[oai(skip_serializing_if_is_none)]
    pub packing: Option<String>,
    /// Maximum Retail Price; 0 when the source row had no price
    pub mrp: f64,
    /// Category slug
    pub category: String,
    /// Stock availability flag
    pub in_stock: bool,
    /// Whether the product appears on the storefront
    pub visible: bool,
    /// New-arrival badge flag
    pub new_arrival: bool,
    /// Product image
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            brand_name: product.brand_name,
            salt_name: product.salt_name,
            company: product.company,
            packing: product.packing,
            mrp: product.mrp,
            category: product.category,
            in_stock: product.in_stock,
            visible: product.visible,
            new_arrival: product.new_arrival,
            image_url: product.image_url,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of the filtered catalog.
#[derive(Debug, Clone, Object)]
pub struct CatalogPageResponse {
    pub items: Vec<ProductResponse>,
    /// Products surviving the filter across all pages
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl From<CatalogPage> for CatalogPageResponse {
    fn from(page: CatalogPage) -> Self {
        Self {
            items: page.products.into_iter().map(|p| p.into()).collect(),
            total: page.total as u64,
            page: page.page as u64,
            per_page: page.per_page as u64,
        }
    }
}

/// WhatsApp enquiry deep link for one product.
#[derive(Debug, Clone, Object)]
pub struct EnquiryLinkResponse {
    pub link: String,
}
