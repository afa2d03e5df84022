use crate::config::toml_config::FileConfig;
use crate::config::ShopSettings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-cart")]
#[command(about = "Browse a product catalog and fill a shopping cart from the terminal")]
pub struct CliConfig {
    /// Catalog endpoint returning a JSON array of products
    #[arg(long)]
    pub endpoint: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Currency symbol printed in front of prices
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long, help = "Hide product descriptions in the catalog grid")]
    pub hide_descriptions: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// File values first, then flags on top.
    pub fn resolve(&self) -> Result<ShopSettings> {
        let mut settings = match &self.config {
            Some(path) => FileConfig::from_file(path)?.into_settings(),
            None => ShopSettings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.catalog_endpoint = endpoint.clone();
        }
        if let Some(currency) = &self.currency {
            settings.currency_symbol = currency.clone();
        }
        if self.hide_descriptions {
            settings.show_descriptions = false;
        }

        Ok(settings)
    }
}
