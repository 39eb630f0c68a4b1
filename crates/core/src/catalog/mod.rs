pub mod query;
pub mod seed;

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::product::{Category, Product, ProductId};
use crate::errors::DomainError;

/// Read-only product lookup used by the cart and the checkout glue.
pub trait ProductCatalog {
    fn find(&self, product_id: ProductId) -> Option<&Product>;

    fn products(&self) -> &[Product];
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("catalog json is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog entries are invalid: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stock: u32,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_products())
    }

    /// Loads a catalog from a JSON array of products. Ids must be unique and
    /// prices must not be negative.
    pub fn from_json(raw: &str) -> Result<Self, CatalogLoadError> {
        let products = serde_json::from_str::<Vec<Product>>(raw)?;
        let problems = validate_listing(&products);
        if !problems.is_empty() {
            return Err(CatalogLoadError::Invalid(problems));
        }
        Ok(Self::new(products))
    }

    pub fn update_stock(&mut self, product_id: ProductId, stock: u32) -> bool {
        let Some(product) = self.find_mut(product_id) else {
            return false;
        };
        product.stock = stock;
        info!(
            event_name = "storefront.catalog.stock_updated",
            product_id = product_id.0,
            stock,
            "product stock updated"
        );
        true
    }

    /// Returns `Ok(false)` for an unknown product. Negative prices are
    /// rejected before the lookup.
    pub fn update_price(
        &mut self,
        product_id: ProductId,
        price: Decimal,
    ) -> Result<bool, DomainError> {
        if price < Decimal::ZERO {
            return Err(DomainError::InvalidProduct(vec![format!(
                "Price must not be negative, got {price}"
            )]));
        }
        let Some(product) = self.find_mut(product_id) else {
            return Ok(false);
        };
        product.price = price;
        info!(
            event_name = "storefront.catalog.price_updated",
            product_id = product_id.0,
            price = %price,
            "product price updated"
        );
        Ok(true)
    }

    /// Validates and inserts a product at the front of the listing. The new
    /// id is one past the current maximum.
    pub fn add_product(&mut self, new_product: NewProduct) -> Result<&Product, DomainError> {
        let problems = validate_product(&new_product);
        if !problems.is_empty() {
            return Err(DomainError::InvalidProduct(problems));
        }

        let next_id = self
            .products
            .iter()
            .map(|product| product.id.0)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| DomainError::InvalidProduct(vec!["no product id available".to_owned()]))?;
        let product = Product {
            id: ProductId(next_id),
            name: new_product.name.trim().to_owned(),
            category: new_product.category,
            price: new_product.price,
            image: new_product
                .image
                .filter(|image| !image.trim().is_empty())
                .unwrap_or_else(|| seed::DEFAULT_IMAGE.to_owned()),
            stock: new_product.stock,
        };
        info!(
            event_name = "storefront.catalog.product_added",
            product_id = next_id,
            category = %product.category,
            "product added to catalog"
        );
        self.products.insert(0, product);
        Ok(&self.products[0])
    }

    pub fn delete_product(&mut self, product_id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|product| product.id == product_id)?;
        info!(
            event_name = "storefront.catalog.product_deleted",
            product_id = product_id.0,
            "product removed from catalog"
        );
        Some(self.products.remove(index))
    }

    fn find_mut(&mut self, product_id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| product.id == product_id)
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}

pub fn validate_product(new_product: &NewProduct) -> Vec<String> {
    let mut problems = Vec::new();
    if new_product.name.trim().chars().count() < 2 {
        problems.push("Product name must be at least 2 characters long".to_owned());
    }
    if new_product.price <= Decimal::ZERO {
        problems.push("Price must be greater than 0".to_owned());
    }
    problems
}

fn validate_listing(products: &[Product]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut problems = Vec::new();
    for product in products {
        if !seen.insert(product.id) {
            problems.push(format!("duplicate product id {}", product.id));
        }
        if product.price < Decimal::ZERO {
            problems.push(format!("product {} has a negative price", product.id));
        }
    }
    problems
}
