use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

use super::errors::CartError;

/// Snapshot of a product taken when it was added to the cart. Later price
/// or availability changes on the product do not propagate here.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub product_id: ProductId,
    pub brand_name: String,
    pub company: String,
    pub mrp: f64,
    pub quantity: u32,
    pub image_url: Option<String>,
}

impl CartItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            brand_name: product.brand_name.clone(),
            company: product.company.clone(),
            mrp: product.mrp,
            quantity,
            image_url: product.image_url.clone(),
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.mrp * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn empty(id: Uuid) -> Self {
        Self { id, items: vec![] }
    }

    pub fn from_repository(id: Uuid, items: Vec<CartItem>) -> Self {
        Self { id, items }
    }

    /// Adds an item, merging with an existing line for the same product by
    /// summing quantities.
    pub fn add(&mut self, item: CartItem) -> Result<(), CartError> {
        if item.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
        Ok(())
    }

    /// Sets a line's quantity; zero removes the line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(product_id);
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| &i.product_id == product_id)
            .ok_or(CartError::ItemNotFound)?;
        item.quantity = quantity;
        Ok(())
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        if self.items.len() == before {
            return Err(CartError::ItemNotFound);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}
