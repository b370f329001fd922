use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Maximum length of a product name in characters
pub const MAX_NAME_LEN: usize = 50;

/// A product record in the catalog.
///
/// IDs are assigned by the catalog, never by callers, and two products
/// compare equal when their IDs match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub supplier: String,
}

/// Canonical field order, used for the store file and both exports
pub const FIELDS: [&str; 6] = ["id", "name", "category", "price", "quantity", "supplier"];

impl Product {
    /// Build a product from caller-supplied fields and a catalog-assigned ID.
    /// Fails with a validation error naming the offending field.
    pub fn new(id: u64, fields: NewProduct) -> Result<Self> {
        let product = Product {
            id,
            name: fields.name,
            category: fields.category,
            price: fields.price,
            quantity: fields.quantity,
            supplier: fields.supplier,
        };
        product.validate()?;
        Ok(product)
    }

    /// Check every field against the validation rules
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(Error::validation("id", "must be a positive integer"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::validation("name", "cannot be empty"));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(Error::validation(
                "name",
                format!("too long (max {} characters)", MAX_NAME_LEN),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(Error::validation("category", "cannot be empty"));
        }
        if !self.price.is_finite() {
            return Err(Error::validation("price", "must be a finite number"));
        }
        if self.price < 0.0 {
            return Err(Error::validation("price", "cannot be negative"));
        }
        Ok(())
    }

    /// Total value of this product's stock (price times quantity)
    pub fn total_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Returns true if the quantity is below the given threshold
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.quantity < threshold
    }

    /// Fields in canonical order, rendered as text for a CSV row
    pub fn to_record(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.category.clone(),
            self.price.to_string(),
            self.quantity.to_string(),
            self.supplier.clone(),
        ]
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Caller-supplied fields for a product that does not yet have an ID
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub supplier: String,
}

/// Partial update for an existing product. Only supplied fields are applied;
/// the merged record is re-validated before anything changes.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub supplier: Option<String>,
}

impl ProductPatch {
    /// Returns true if no fields were supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.supplier.is_none()
    }

    /// Apply the supplied fields onto a product
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(supplier) = &self.supplier {
            product.supplier = supplier.clone();
        }
    }
}

#[cfg(test)]
pub use tests::make_test_product;
