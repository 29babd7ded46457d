//! The static brand catalog and its duplicated tile row.
//!
//! The showcase renders the catalog twice in a row so the scrolling strip can
//! wrap without a visible seam. [`TileRef`] describes one rendered copy.

use crate::brand::Brand;
use crate::error::{ModelError, Result};

const ASSET_HOST: &str = "https://api.builder.io/api/v1/image/assets/TEMP";

const STOREFRONT_BRANDS: [(&str, &str, &str, u32); 9] = [
    ("golden-rose", "Golden Rose", "af2d510288a6c7c750d18bca0f47f2eba9c23282", 92),
    ("dafi", "Dafi", "c5d400524e7127db55b0339b57ad11819a676445", 116),
    ("hydroderm", "Hydroderm", "18097d5043ac1706c3710efbd0745405279b9885", 172),
    ("servina", "Servina", "e5d17178352b0bba7f19c40183e1a5ff886dab81", 162),
    ("bio-oil", "Bio-Oil", "cf4dba74e389911ec9b59ec296b073fcc76aefeb", 176),
    ("seagull", "Seagull", "1c4249874f442e813e8dcc8996983af16eafdfa9", 166),
    ("logo-footer", "Logo Footer", "5bdf3900bbaa95ad2d098ea1b87ca921ba62acad", 136),
    ("cerita", "Cerita", "2307cb7e7ff0f72a45454c4fdf28fe9d1f833819", 146),
    ("dermatique", "Dermatique", "1f29cee87011c9b53e8afb29ff372e61e152d80b", 180),
];

/// One rendered tile: a position in the duplicated row pointing back at its
/// brand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRef {
    /// Index in the duplicated row, `0..2 * distinct`.
    pub index: usize,
    /// Index of the brand in the catalog, `index % distinct`.
    pub slot: usize,
    /// 0 for the first copy of the row, 1 for the duplicate.
    pub copy: usize,
}

impl TileRef {
    /// Key that stays unique across both copies, e.g. `dafi-1`.
    pub fn render_key(&self, catalog: &BrandCatalog) -> String {
        format!("{}-{}", catalog.brand_for_tile(self.index).slug, self.copy)
    }
}

/// Immutable, ordered set of brands defined once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandCatalog {
    brands: Vec<Brand>,
}

impl BrandCatalog {
    pub fn new(brands: Vec<Brand>) -> Result<Self> {
        if brands.is_empty() {
            return Err(ModelError::EmptyCatalog);
        }
        for (i, brand) in brands.iter().enumerate() {
            if brands[..i].iter().any(|b| b.id == brand.id) {
                return Err(ModelError::InvalidBrand(format!(
                    "duplicate brand slug '{}'",
                    brand.slug
                )));
            }
        }
        Ok(Self { brands })
    }

    /// The nine partner brands featured on the storefront.
    pub fn storefront() -> Result<Self> {
        let brands = STOREFRONT_BRANDS
            .iter()
            .map(|(slug, name, asset, width)| {
                Brand::new(slug, name, format!("{ASSET_HOST}/{asset}?width={width}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(brands)
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn distinct_count(&self) -> usize {
        self.brands.len()
    }

    /// Number of rendered tiles: the row plus its duplicate.
    pub fn tile_count(&self) -> usize {
        self.brands.len() * 2
    }

    pub fn brand(&self, slot: usize) -> Option<&Brand> {
        self.brands.get(slot)
    }

    /// Brand rendered by a tile of the duplicated row.
    pub fn brand_for_tile(&self, tile_index: usize) -> &Brand {
        &self.brands[tile_index % self.brands.len()]
    }

    pub fn tile(&self, index: usize) -> Option<TileRef> {
        let n = self.brands.len();
        (index < n * 2).then(|| TileRef {
            index,
            slot: index % n,
            copy: index / n,
        })
    }

    pub fn tiles(&self) -> impl Iterator<Item = TileRef> + '_ {
        (0..self.tile_count()).filter_map(|i| self.tile(i))
    }
}
