//! Frequently used model types for the showcase and CLI crates.

pub use crate::brand::{AssetRef, Brand};
pub use crate::catalog::{BrandCatalog, TileRef};
pub use crate::ids::BrandId;
