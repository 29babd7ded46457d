use std::fmt;

use crate::error::ModelError;
use crate::ids::BrandId;

/// Opaque reference to a remote image asset. Never parsed or fetched by the
/// model; loaders receive it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A partner brand shown in the showcase carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brand {
    pub id: BrandId,
    /// Stable human-readable key, also the seed of `id`.
    pub slug: String,
    pub name: String,
    pub logo: AssetRef,
}

impl Brand {
    pub fn new(
        slug: &str,
        name: &str,
        logo: impl Into<String>,
    ) -> Result<Self, ModelError> {
        if name.trim().is_empty() {
            return Err(ModelError::InvalidBrand(format!(
                "brand '{slug}' has an empty display name"
            )));
        }
        Ok(Self {
            id: BrandId::from_slug(slug)?,
            slug: slug.to_string(),
            name: name.to_string(),
            logo: AssetRef::new(logo),
        })
    }

    /// Alt text used by the fallback strip's logo images.
    pub fn alt_text(&self) -> String {
        format!("{} - Premium beauty brand", self.name)
    }
}
