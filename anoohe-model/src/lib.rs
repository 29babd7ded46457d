//! Core data model definitions shared across Anoohe crates.
#![allow(missing_docs)]

pub mod brand;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use brand::{AssetRef, Brand};
pub use catalog::{BrandCatalog, TileRef};
pub use error::{ModelError, Result as ModelResult};
pub use ids::BrandId;
