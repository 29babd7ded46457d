//! Brand item positioner
//!
//! Pure placement math for the computed path. Given a tile index, the row
//! geometry, the scroll offset and the time since mount, [`place_tile`]
//! returns the tile's transform. Nothing here touches a graphics context.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{appearance, layout};
use crate::settings::ShowcaseSettings;
use crate::showcase::easing::EasingKind;
use crate::showcase::responsive::LayoutConfig;

/// How the scroll offset is wrapped back onto the duplicated row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WrapStrategy {
    /// Wrap after exactly one copy of the row (`distinct * spacing`). Tile
    /// `i` and tile `i + distinct` are then one wrap range apart.
    #[default]
    Period,
    /// Wrap after the row span plus two spacings of slack. Leaves a one-slot
    /// jump at the wrap point; kept for parity with the storefront's first
    /// release.
    SpanWithSlack,
}

/// Horizontal geometry of the duplicated row for one layout tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    pub distinct: usize,
    pub spacing: f32,
    /// Distance between the first and last tile of one copy.
    pub span: f32,
    pub wrap_range: f32,
}

impl RowGeometry {
    pub fn new(
        layout: &LayoutConfig,
        distinct: usize,
        strategy: WrapStrategy,
    ) -> Self {
        let spacing = layout.spacing();
        let span = distinct.saturating_sub(1) as f32 * spacing;
        let wrap_range = match strategy {
            WrapStrategy::Period => distinct as f32 * spacing,
            WrapStrategy::SpanWithSlack => span + 2.0 * spacing,
        };
        Self {
            distinct,
            spacing,
            span,
            wrap_range,
        }
    }

    /// Resting position of a tile with no scroll applied; centres the first
    /// copy of the row on the origin.
    #[inline]
    pub fn base_x(&self, index: usize) -> f32 {
        index as f32 * self.spacing - self.span / 2.0
    }

    /// Scroll offset folded into `[0, wrap_range)`.
    #[inline]
    pub fn wrapped_offset(&self, offset: f32) -> f32 {
        if self.wrap_range <= 0.0 || !offset.is_finite() {
            return 0.0;
        }
        offset.rem_euclid(self.wrap_range)
    }

    /// Position of a tile once its entry has finished.
    #[inline]
    pub fn steady_x(&self, index: usize, offset: f32) -> f32 {
        self.base_x(index) - self.wrapped_offset(offset)
    }
}

/// Staggered entry timing shared by both rendering paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryTiming {
    pub stagger: Duration,
    pub duration: Duration,
    pub easing: EasingKind,
}

impl Default for EntryTiming {
    fn default() -> Self {
        Self::from_settings(&ShowcaseSettings::default())
    }
}

impl EntryTiming {
    pub fn from_settings(settings: &ShowcaseSettings) -> Self {
        Self {
            stagger: settings.entry_stagger(),
            duration: settings.entry_duration(),
            easing: settings.entry_easing,
        }
    }

    /// When the tile at `stagger_index` starts entering.
    pub fn delay(&self, stagger_index: usize) -> Duration {
        self.stagger.saturating_mul(stagger_index as u32)
    }

    /// When the tile at `stagger_index` finishes entering.
    pub fn window_end(&self, stagger_index: usize) -> Duration {
        self.delay(stagger_index) + self.duration
    }

    /// Linear entry progress in `[0, 1]`.
    pub fn progress(&self, stagger_index: usize, elapsed: Duration) -> f32 {
        let since = elapsed.saturating_sub(self.delay(stagger_index));
        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        (since.as_secs_f32() / total).clamp(0.0, 1.0)
    }

    /// Eased entry progress in `[0, 1]`.
    pub fn eased(&self, stagger_index: usize, elapsed: Duration) -> f32 {
        self.easing.apply(self.progress(stagger_index, elapsed))
    }
}

/// Steady-state look of computed-path tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub dimmed_opacity: f32,
    pub focused_opacity: f32,
    pub slide_distance: f32,
    pub scale_smoothing: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self::from_settings(&ShowcaseSettings::default())
    }
}

impl Appearance {
    pub fn from_settings(settings: &ShowcaseSettings) -> Self {
        Self {
            dimmed_opacity: settings.dimmed_opacity,
            focused_opacity: appearance::FOCUSED_OPACITY,
            slide_distance: settings.slide_distance,
            scale_smoothing: settings.scale_smoothing,
        }
    }

    pub fn steady_opacity(&self, focused: bool) -> f32 {
        if focused {
            self.focused_opacity
        } else {
            self.dimmed_opacity
        }
    }
}

/// Per-tick inputs for one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileInput {
    pub index: usize,
    pub hovered: bool,
    pub current: bool,
    pub offset: f32,
    pub elapsed: Duration,
    /// Whether the tile already finished its entry on an earlier tick.
    pub settled: bool,
}

/// Output transform for one tile on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TilePlacement {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub opacity: f32,
    /// Eased entry progress; 1 once settled.
    pub entry_progress: f32,
    pub settled: bool,
}

/// Compute a tile's transform for one tick.
///
/// Once `input.settled` is set the entry curve is skipped entirely, so a
/// settled tile never re-animates regardless of `elapsed`.
pub fn place_tile(
    geometry: &RowGeometry,
    timing: &EntryTiming,
    look: &Appearance,
    input: TileInput,
) -> TilePlacement {
    let steady_x = geometry.steady_x(input.index, input.offset);
    let progress = timing.progress(input.index, input.elapsed);

    if !input.settled && progress < 1.0 {
        let eased = timing.easing.apply(progress);
        let start_x = steady_x - look.slide_distance;
        return TilePlacement {
            x: start_x + look.slide_distance * eased,
            y: layout::TILE_ELEVATION,
            z: layout::TILE_DEPTH,
            opacity: eased,
            entry_progress: eased,
            settled: false,
        };
    }

    TilePlacement {
        x: steady_x,
        y: layout::TILE_ELEVATION,
        z: layout::TILE_DEPTH,
        opacity: look.steady_opacity(input.hovered || input.current),
        entry_progress: 1.0,
        settled: true,
    }
}

/// Scale a tile is easing towards.
#[inline]
pub fn target_scale(layout: &LayoutConfig, hovered: bool) -> f32 {
    if hovered {
        layout.hover_scale
    } else {
        layout.base_scale
    }
}

/// One step of exponential smoothing towards `target`.
#[inline]
pub fn smooth_scale(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
