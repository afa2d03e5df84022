use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

/// One product as served by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ProductId,
    pub title: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: BigDecimal,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// Reads a JSON number through its shortest decimal form, so `9.99` stays exactly `9.99`.
fn deserialize_price<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    let price = BigDecimal::from_str(&number.to_string()).map_err(serde::de::Error::custom)?;

    if price < BigDecimal::from(0) {
        return Err(serde::de::Error::custom(format!(
            "price must not be negative, got {}",
            price
        )));
    }

    Ok(price)
}

/// A catalog entry held in the cart. Quantity is at least one for every line that exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub entry: CatalogEntry,
    quantity: u64,
}

impl CartLine {
    pub(crate) fn first(entry: CatalogEntry) -> Self {
        Self { entry, quantity: 1 }
    }

    pub(crate) fn with_quantity(entry: CatalogEntry, quantity: u64) -> Self {
        debug_assert!(quantity >= 1);
        Self { entry, quantity }
    }

    pub fn id(&self) -> ProductId {
        self.entry.id
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Exact `quantity × unit price`.
    pub fn subtotal(&self) -> BigDecimal {
        &self.entry.price * BigDecimal::from(self.quantity)
    }
}
