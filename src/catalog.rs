//! Catalog
//!
//! Resolves human-entered product names and SKUs to products.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::products::Product;

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share a SKU.
    #[error("duplicate SKU: {0}")]
    DuplicateSku(String),

    /// Two products share a name, ignoring case.
    #[error("duplicate product name: {0}")]
    DuplicateName(String),
}

/// Product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Products ordered by SKU
    products: Vec<Product>,

    /// SKU -> index into `products`
    by_sku: FxHashMap<String, usize>,

    /// Lowercased name -> index into `products`
    by_name: FxHashMap<String, usize>,
}

impl Catalog {
    /// Create a catalog from a list of products.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if a SKU or a case-insensitive name repeats.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Result<Self, CatalogError> {
        let mut products: Vec<Product> = products.into_iter().collect();
        products.sort_by(|a, b| a.sku.cmp(&b.sku));

        let mut by_sku = FxHashMap::default();
        let mut by_name = FxHashMap::default();

        for (idx, product) in products.iter().enumerate() {
            if by_sku.insert(product.sku.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateSku(product.sku.clone()));
            }

            if by_name.insert(name_key(&product.name), idx).is_some() {
                return Err(CatalogError::DuplicateName(product.name.clone()));
            }
        }

        Ok(Catalog {
            products,
            by_sku,
            by_name,
        })
    }

    /// Find a product by name, ignoring case and surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.by_name
            .get(&name_key(name))
            .and_then(|idx| self.products.get(*idx))
    }

    /// Find a product by its exact SKU.
    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        self.by_sku
            .get(sku)
            .and_then(|idx| self.products.get(*idx))
    }

    /// Find a product by name, falling back to SKU.
    pub fn lookup(&self, token: &str) -> Option<&Product> {
        self.find_by_name(token)
            .or_else(|| self.find_by_sku(token.trim()))
    }

    /// Products ordered by SKU.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
