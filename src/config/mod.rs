#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::DEFAULT_CATALOG_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Effective settings of a shop session, after file values and flags are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSettings {
    pub catalog_endpoint: String,
    pub currency_symbol: String,
    pub show_descriptions: bool,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            catalog_endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            show_descriptions: true,
        }
    }
}

impl ConfigProvider for ShopSettings {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog_endpoint
    }

    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn show_descriptions(&self) -> bool {
        self.show_descriptions
    }
}

impl Validate for ShopSettings {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.endpoint", &self.catalog_endpoint)?;
        validate_non_empty_string("display.currency_symbol", &self.currency_symbol)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = ShopSettings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.catalog_endpoint(), "https://fakestoreapi.com/products");
        assert_eq!(settings.currency_symbol(), "$");
        assert!(settings.show_descriptions());
    }

    #[test]
    fn test_blank_currency_is_invalid() {
        let settings = ShopSettings {
            currency_symbol: " ".to_string(),
            ..ShopSettings::default()
        };

        assert!(settings.validate().is_err());
    }
}
