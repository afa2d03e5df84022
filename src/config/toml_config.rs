use crate::config::ShopSettings;
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shop configuration. Every key is optional; missing keys keep the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub catalog: Option<CatalogConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub show_descriptions: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Expands `${VAR}` from the environment; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StoreError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Applies the file's values on top of `base`.
    pub fn apply_to(&self, mut base: ShopSettings) -> ShopSettings {
        if let Some(endpoint) = self.catalog.as_ref().and_then(|c| c.endpoint.clone()) {
            base.catalog_endpoint = endpoint;
        }
        if let Some(display) = &self.display {
            if let Some(symbol) = &display.currency_symbol {
                base.currency_symbol = symbol.clone();
            }
            if let Some(show) = display.show_descriptions {
                base.show_descriptions = show;
            }
        }
        base
    }

    pub fn into_settings(self) -> ShopSettings {
        self.apply_to(ShopSettings::default())
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings().validate()
    }
}
