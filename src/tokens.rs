//! Tokens
//!
//! Folds command-line item tokens into a basket.

use thiserror::Error;
use tracing::debug;

use crate::{basket::Basket, catalog::Catalog};

/// Largest quantity a single `NAME*QUANTITY` token may carry.
pub const MAX_TOKEN_QUANTITY: i64 = 10_000;

/// Errors raised while turning tokens into a basket.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// One or more tokens did not match a product, in input order.
    #[error("unknown products: {}", .0.join(", "))]
    UnknownProducts(Vec<String>),

    /// A `NAME*QUANTITY` token had a quantity that is not an integer between 1
    /// and [`MAX_TOKEN_QUANTITY`].
    #[error("invalid quantity in {0:?}")]
    InvalidQuantity(String),
}

/// Build a basket from item tokens such as `Apples`, `soup` or `Bread*2`.
///
/// Empty tokens are ignored. Every unknown token is reported together.
///
/// # Errors
///
/// Returns a [`TokenError`] if any token is unknown or has a malformed quantity.
pub fn basket_from_tokens<S: AsRef<str>>(
    catalog: &Catalog,
    tokens: &[S],
) -> Result<Basket, TokenError> {
    let mut basket = Basket::new();
    let mut unknown = Vec::new();

    for raw in tokens {
        let raw = raw.as_ref().trim();

        if raw.is_empty() {
            continue;
        }

        let (name, quantity) = split_quantity(raw)?;

        match catalog.lookup(name) {
            Some(product) => {
                debug!(token = raw, sku = %product.sku, quantity, "adding item");

                basket = basket.add_quantity(product, quantity);
            }
            None => unknown.push(raw.to_string()),
        }
    }

    if unknown.is_empty() {
        Ok(basket)
    } else {
        Err(TokenError::UnknownProducts(unknown))
    }
}

fn split_quantity(token: &str) -> Result<(&str, i64), TokenError> {
    let Some((name, quantity)) = token.rsplit_once('*') else {
        return Ok((token, 1));
    };

    match quantity.trim().parse::<i64>() {
        Ok(quantity) if (1..=MAX_TOKEN_QUANTITY).contains(&quantity) => Ok((name, quantity)),
        _ => Err(TokenError::InvalidQuantity(token.to_string())),
    }
}
