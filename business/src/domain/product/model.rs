use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::ProductId;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub brand_name: String,
    pub salt_name: String,
    pub company: String,
    pub packing: Option<String>,
    pub mrp: f64,
    pub category: String,
    pub in_stock: bool,
    pub visible: bool,
    pub new_arrival: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub id: Option<ProductId>,
    pub brand_name: String,
    pub salt_name: String,
    pub company: String,
    pub packing: Option<String>,
    pub mrp: Option<f64>,
    pub category: String,
    pub in_stock: bool,
    pub visible: bool,
    pub new_arrival: bool,
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.brand_name.trim().is_empty() {
            return Err(ProductError::BrandNameEmpty);
        }

        let id = match props.id {
            Some(id) => id,
            None => ProductId::slugify(&props.brand_name)?,
        };

        let now = Utc::now();
        Ok(Self {
            id,
            brand_name: props.brand_name,
            salt_name: props.salt_name,
            company: props.company,
            packing: props.packing,
            mrp: props.mrp.unwrap_or(0.0),
            category: props.category,
            in_stock: props.in_stock,
            visible: props.visible,
            new_arrival: props.new_arrival,
            image_url: props.image_url,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        brand_name: String,
        salt_name: String,
        company: String,
        packing: Option<String>,
        mrp: f64,
        category: String,
        in_stock: bool,
        visible: bool,
        new_arrival: bool,
        image_url: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            brand_name,
            salt_name,
            company,
            packing,
            mrp,
            category,
            in_stock,
            visible,
            new_arrival,
            image_url,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(brand_name: &str) -> NewProductProps {
        NewProductProps {
            id: None,
            brand_name: brand_name.to_string(),
            salt_name: "amoxicillin".to_string(),
            company: "GSK".to_string(),
            packing: Some("10x10 tablets".to_string()),
            mrp: Some(120.0),
            category: "antibiotics".to_string(),
            in_stock: true,
            visible: true,
            new_arrival: false,
            image_url: None,
        }
    }

    #[test]
    fn should_create_product_when_brand_name_valid() {
        let product = Product::new(props("Amoxil 500")).unwrap();

        assert_eq!(product.id.as_str(), "amoxil-500");
        assert_eq!(product.brand_name, "Amoxil 500");
        assert_eq!(product.mrp, 120.0);
    }

    #[test]
    fn should_reject_product_when_brand_name_empty() {
        let result = Product::new(props("   "));

        assert!(matches!(result.unwrap_err(), ProductError::BrandNameEmpty));
    }

    #[test]
    fn should_keep_explicit_id_when_provided() {
        let mut p = props("Amoxil 500");
        p.id = Some(ProductId::new("amx-custom").unwrap());

        let product = Product::new(p).unwrap();

        assert_eq!(product.id.as_str(), "amx-custom");
    }

    #[test]
    fn should_default_mrp_to_zero_when_absent() {
        let mut p = props("Amoxil 500");
        p.mrp = None;

        let product = Product::new(p).unwrap();

        assert_eq!(product.mrp, 0.0);
    }
}
