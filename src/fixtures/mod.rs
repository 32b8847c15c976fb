//! Fixtures
//!
//! Product and offer configuration loaded from YAML fixture sets laid out as
//! `<base>/products/<set>.yml` and `<base>/offers/<set>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{Catalog, CatalogError},
    fixtures::{offers::OffersFixture, products::ProductsFixture},
    offers::Offer,
    products::Product,
    service::OfferService,
};

pub mod offers;
pub mod products;

const BUILTIN_PRODUCTS: &str = include_str!("../../fixtures/products/default.yml");
const BUILTIN_OFFERS: &str = include_str!("../../fixtures/offers/default.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product SKU defined more than once
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),

    /// Invalid offer data
    #[error("Invalid offer data: {0}")]
    InvalidOfferData(String),

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// SKU -> product
    products: FxHashMap<String, Product>,

    /// Offers in load order
    offers: Vec<Offer>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            offers: Vec::new(),
            currency: None,
        }
    }

    /// Load the fixture set compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded fixtures fail to parse.
    pub fn builtin() -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_products_str(BUILTIN_PRODUCTS)?
            .load_offers_str(BUILTIN_OFFERS)?;

        Ok(fixture)
    }

    /// Load a complete fixture set (products and offers with the same name)
    /// from the default base path.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load a complete fixture set from a custom base path.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_products(name)?.load_offers(name)?;

        Ok(fixture)
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        info!(path = %file_path.display(), "loading products");

        self.load_products_str(&contents)
    }

    /// Load products from YAML source
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid, a price is malformed, a SKU is
    /// repeated, or currencies differ.
    pub fn load_products_str(&mut self, contents: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = serde_norway::from_str(contents)?;
        let count = fixture.products.len();

        for (sku, product_fixture) in fixture.products {
            if self.products.contains_key(&sku) {
                return Err(FixtureError::DuplicateProduct(sku));
            }

            let (product, currency) = product_fixture.try_into_product(sku.clone())?;

            // Validate currency consistency
            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            self.products.insert(sku, product);
        }

        info!(count, "loaded products");

        Ok(self)
    }

    /// Load offers from a YAML fixture file
    ///
    /// Products referenced by the offers must already be loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or refers to unknown products.
    pub fn load_offers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("offers").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        info!(path = %file_path.display(), "loading offers");

        self.load_offers_str(&contents)
    }

    /// Load offers from YAML source, appending them in declaration order
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or an offer cannot be built.
    pub fn load_offers_str(&mut self, contents: &str) -> Result<&mut Self, FixtureError> {
        let fixture: OffersFixture = serde_norway::from_str(contents)?;

        for offer_fixture in fixture.offers {
            let offer = offer_fixture.try_into_offer(&self.products)?;

            self.offers.push(offer);
        }

        info!(count = self.offers.len(), "loaded offers");

        Ok(self)
    }

    /// Get a product by its SKU
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, sku: &str) -> Result<&Product, FixtureError> {
        self.products
            .get(sku)
            .ok_or_else(|| FixtureError::ProductNotFound(sku.to_string()))
    }

    /// Get all offers
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Build a catalog from the loaded products
    ///
    /// # Errors
    ///
    /// Returns an error if two products share a name.
    pub fn catalog(&self) -> Result<Catalog, FixtureError> {
        Ok(Catalog::new(self.products.values().cloned())?)
    }

    /// Build an offer service from the loaded offers
    pub fn offer_service(&self) -> OfferService {
        OfferService::new(self.offers.clone())
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
