pub mod cart;
pub mod catalog;
pub mod store;

pub use crate::domain::model::{CartLine, CatalogEntry, ProductId};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
