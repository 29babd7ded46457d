use crate::error::ModelError;
use uuid::Uuid;

/// Namespace for deriving brand ids from their slugs. Changing this value
/// changes every brand id, so treat it as frozen.
const BRAND_NAMESPACE: Uuid = Uuid::from_u128(0x6a1f_03c2_4be7_5d0e_9a41_c7d2_58f3_1e60);

/// Strongly typed, slug-derived brand identity.
///
/// Ids are UUIDv5 values over a fixed namespace, so the same slug always
/// yields the same id across runs and processes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrandId(pub Uuid);

impl BrandId {
    pub fn from_slug(slug: &str) -> Result<Self, ModelError> {
        if slug.trim().is_empty() {
            return Err(ModelError::InvalidBrand(
                "Brand slug cannot be empty".to_string(),
            ));
        }
        Ok(BrandId(Uuid::new_v5(&BRAND_NAMESPACE, slug.as_bytes())))
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for BrandId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_ids_are_stable() {
        let a = BrandId::from_slug("golden-rose").unwrap();
        let b = BrandId::from_slug("golden-rose").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_uuid().get_version_num(), 5);
    }

    #[test]
    fn distinct_slugs_yield_distinct_ids() {
        let a = BrandId::from_slug("dafi").unwrap();
        let b = BrandId::from_slug("cerita").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn blank_slug_is_rejected() {
        assert!(matches!(
            BrandId::from_slug("  "),
            Err(ModelError::InvalidBrand(_))
        ));
    }
}
