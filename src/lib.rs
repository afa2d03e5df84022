pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::HttpCatalogSource;
pub use app::{Renderer, ShopSession};
pub use config::ShopSettings;
pub use crate::core::{
    cart::CartState,
    catalog::{CatalogHandle, CatalogLoader, LoadStatus},
    store::{CartAction, CartObserver, CartStore},
};
pub use domain::model::{CartLine, CatalogEntry, ProductId};
pub use utils::error::{Result, StoreError};
