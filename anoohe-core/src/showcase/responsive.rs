//! Responsive configuration resolver
//!
//! Maps a viewport width onto one of three layout tiers. Resolution is a pure
//! threshold comparison; callers re-run it on mount and on every resize.

use serde::{Deserialize, Serialize};

use crate::constants::{breakpoints, layout};

/// Viewport class selected by width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewportTier {
    Narrow,
    Medium,
    #[default]
    Wide,
}

impl ViewportTier {
    pub const ALL: [Self; 3] = [Self::Narrow, Self::Medium, Self::Wide];

    /// Classify a measured width. `None` (no measurement, e.g. headless
    /// rendering) and non-finite values resolve to [`ViewportTier::Wide`].
    pub fn classify(width: Option<f32>) -> Self {
        match width {
            Some(w) if w.is_finite() && w < breakpoints::MEDIUM_MIN_WIDTH => {
                Self::Narrow
            }
            Some(w) if w.is_finite() && w < breakpoints::WIDE_MIN_WIDTH => {
                Self::Medium
            }
            _ => Self::Wide,
        }
    }
}

impl std::fmt::Display for ViewportTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Narrow => write!(f, "narrow"),
            Self::Medium => write!(f, "medium"),
            Self::Wide => write!(f, "wide"),
        }
    }
}

/// Layout constants for one tier. Selected, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub tier: ViewportTier,
    pub tile_width: f32,
    pub tile_height: f32,
    pub tile_gap: f32,
    pub hover_scale: f32,
    pub base_scale: f32,
    pub viewing_distance: f32,
    pub field_of_view_deg: f32,
}

impl LayoutConfig {
    pub const fn for_tier(tier: ViewportTier) -> Self {
        let (tile_width, tile_height, hover_scale, viewing_distance) =
            match tier {
                ViewportTier::Narrow => (
                    layout::narrow::TILE_WIDTH,
                    layout::narrow::TILE_HEIGHT,
                    layout::narrow::HOVER_SCALE,
                    layout::narrow::VIEWING_DISTANCE,
                ),
                ViewportTier::Medium => (
                    layout::medium::TILE_WIDTH,
                    layout::medium::TILE_HEIGHT,
                    layout::medium::HOVER_SCALE,
                    layout::medium::VIEWING_DISTANCE,
                ),
                ViewportTier::Wide => (
                    layout::wide::TILE_WIDTH,
                    layout::wide::TILE_HEIGHT,
                    layout::wide::HOVER_SCALE,
                    layout::wide::VIEWING_DISTANCE,
                ),
            };
        Self {
            tier,
            tile_width,
            tile_height,
            tile_gap: layout::TILE_GAP,
            hover_scale,
            base_scale: layout::BASE_SCALE,
            viewing_distance,
            field_of_view_deg: layout::FIELD_OF_VIEW_DEG,
        }
    }

    /// Distance between the centres of adjacent tiles.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.tile_width + self.tile_gap
    }
}

/// Resolve the active layout for a viewport width.
pub fn resolve(width: Option<f32>) -> LayoutConfig {
    LayoutConfig::for_tier(ViewportTier::classify(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_closed_open() {
        let cases = [
            (0.0, ViewportTier::Narrow),
            (767.0, ViewportTier::Narrow),
            (767.9, ViewportTier::Narrow),
            (768.0, ViewportTier::Medium),
            (1023.0, ViewportTier::Medium),
            (1024.0, ViewportTier::Wide),
            (3840.0, ViewportTier::Wide),
        ];
        for (width, tier) in cases {
            assert_eq!(ViewportTier::classify(Some(width)), tier, "{width}");
            assert_eq!(resolve(Some(width)).tier, tier);
        }
    }

    #[test]
    fn every_width_maps_to_exactly_one_tier() {
        let mut w = 0.0;
        while w < 2000.0 {
            let tier = ViewportTier::classify(Some(w));
            let matches = ViewportTier::ALL
                .iter()
                .filter(|t| **t == tier)
                .count();
            assert_eq!(matches, 1);
            w += 0.5;
        }
    }

    #[test]
    fn missing_measurement_defaults_to_wide() {
        assert_eq!(resolve(None).tier, ViewportTier::Wide);
        assert_eq!(resolve(Some(f32::NAN)).tier, ViewportTier::Wide);
    }

    #[test]
    fn tiers_shrink_towards_narrow() {
        let narrow = LayoutConfig::for_tier(ViewportTier::Narrow);
        let wide = LayoutConfig::for_tier(ViewportTier::Wide);
        assert!(narrow.spacing() < wide.spacing());
        assert!(narrow.viewing_distance < wide.viewing_distance);
        assert!((wide.spacing() - 2.3).abs() < 1e-6);
    }
}
