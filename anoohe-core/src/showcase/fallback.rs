//! Fallback marquee strip
//!
//! The non-accelerated path: the duplicated row rendered as a flat strip
//! translated linearly on an infinite loop. Tiles get the same staggered
//! entry as the computed path but only a 2D transform.

use serde::Serialize;
use std::time::Duration;

use crate::constants::fallback;
use crate::settings::{FallbackSettings, ShowcaseSettings};
use crate::showcase::easing::EasingKind;
use crate::showcase::positioner::EntryTiming;

/// One fallback tile's 2D transform for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FallbackTile {
    pub index: usize,
    /// Horizontal entry offset in px, relative to the tile's flow position.
    pub entry_offset_x: f32,
    /// Opacity of the tile container during entry.
    pub entry_opacity: f32,
    /// Opacity of the logo image inside the tile.
    pub logo_opacity: f32,
    pub scale: f32,
    pub hovered: bool,
}

/// Whole-strip state for a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackFrame {
    /// Translation of the strip container in px.
    pub translate_x: f32,
    pub paused: bool,
    pub tiles: Vec<FallbackTile>,
}

#[derive(Debug, Clone)]
pub struct MarqueeStrip {
    distinct: usize,
    loop_duration: Duration,
    viewport_width: f32,
    look: FallbackSettings,
    entry: EntryTiming,
    /// Accumulated unpaused time.
    running: Duration,
    last_tick: Option<Duration>,
    /// Frame-clock time the entry animation counts from.
    entry_origin: Duration,
    hovered: Option<usize>,
}

impl MarqueeStrip {
    pub fn new(
        distinct: usize,
        viewport_width: f32,
        settings: &ShowcaseSettings,
    ) -> Self {
        let (x1, y1, x2, y2) = fallback::ENTRY_BEZIER;
        Self {
            distinct: distinct.max(1),
            loop_duration: Duration::from_millis(
                settings.fallback.loop_duration_ms.max(1),
            ),
            viewport_width,
            look: settings.fallback,
            entry: EntryTiming {
                easing: EasingKind::CubicBezier(x1, y1, x2, y2),
                ..EntryTiming::from_settings(settings)
            },
            running: Duration::ZERO,
            last_tick: None,
            entry_origin: Duration::ZERO,
            hovered: None,
        }
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Play the staggered entry again, starting at frame-clock time `now`.
    /// Called whenever the strip is shown after the computed path.
    pub fn restart_entry(&mut self, now: Duration) {
        self.entry_origin = now;
    }

    /// Hovering any tile pauses the strip; `None` resumes it in place.
    pub fn set_hovered(&mut self, tile: Option<usize>) {
        self.hovered = tile;
    }

    pub fn is_paused(&self) -> bool {
        self.hovered.is_some()
    }

    /// Advance the strip clock to frame-clock time `now`.
    pub fn tick(&mut self, now: Duration) {
        if let Some(last) = self.last_tick
            && !self.is_paused()
        {
            self.running += now.saturating_sub(last);
        }
        self.last_tick = Some(now);
    }

    /// Strip translation in px for the current loop position.
    pub fn translate_x(&self) -> f32 {
        let start = fallback::TRANSLATE_START_PX;
        let end = -(self.viewport_width + fallback::TRANSLATE_OVERSHOOT_PX);
        let period = self.loop_duration.as_secs_f64();
        let phase = (self.running.as_secs_f64() % period) / period;
        start + (end - start) * phase as f32
    }

    /// Tile transform at frame-clock time `elapsed` since mount.
    pub fn tile(&self, index: usize, elapsed: Duration) -> FallbackTile {
        let stagger_index = index % self.distinct;
        let eased = self
            .entry
            .eased(stagger_index, elapsed.saturating_sub(self.entry_origin));
        let hovered = self.hovered == Some(index);
        FallbackTile {
            index,
            entry_offset_x: fallback::ENTRY_OFFSET_PX * (1.0 - eased),
            entry_opacity: eased,
            logo_opacity: if hovered {
                self.look.hover_opacity
            } else {
                self.look.resting_opacity
            },
            scale: if hovered { self.look.hover_scale } else { 1.0 },
            hovered,
        }
    }

    pub fn frame(&self, elapsed: Duration) -> FallbackFrame {
        FallbackFrame {
            translate_x: self.translate_x(),
            paused: self.is_paused(),
            tiles: (0..self.distinct * 2)
                .map(|i| self.tile(i, elapsed))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> MarqueeStrip {
        MarqueeStrip::new(9, 1000.0, &ShowcaseSettings::default())
    }

    #[test]
    fn translation_is_linear_and_loops() {
        let mut s = strip();
        s.tick(Duration::ZERO);
        assert_eq!(s.translate_x(), -50.0);
        s.tick(Duration::from_secs(10));
        assert!((s.translate_x() - (-50.0 + (-1200.0 + 50.0) / 2.0)).abs() < 1e-3);
        s.tick(Duration::from_secs(20));
        assert!((s.translate_x() + 50.0).abs() < 1e-3);
    }

    #[test]
    fn hover_freezes_translation() {
        let mut s = strip();
        s.tick(Duration::ZERO);
        s.tick(Duration::from_secs(4));
        let frozen = s.translate_x();
        s.set_hovered(Some(2));
        s.tick(Duration::from_secs(9));
        assert_eq!(s.translate_x(), frozen);
        s.set_hovered(None);
        s.tick(Duration::from_secs(10));
        assert!(s.translate_x() < frozen);
    }

    #[test]
    fn entry_stagger_repeats_per_copy() {
        let s = strip();
        let at = Duration::from_millis(450);
        let a = s.tile(3, at);
        let b = s.tile(12, at);
        assert_eq!(a.entry_opacity, b.entry_opacity);
        assert_eq!(a.entry_opacity, 0.0);
        let done = s.tile(3, Duration::from_millis(1_250));
        assert_eq!(done.entry_opacity, 1.0);
        assert_eq!(done.entry_offset_x, 0.0);
    }

    #[test]
    fn restarted_entry_counts_from_the_new_origin() {
        let mut s = strip();
        assert_eq!(s.tile(0, Duration::from_secs(6)).entry_opacity, 1.0);
        s.restart_entry(Duration::from_secs(6));
        let fresh = s.tile(0, Duration::from_secs(6));
        assert_eq!(fresh.entry_opacity, 0.0);
        assert_eq!(fresh.entry_offset_x, -50.0);
        let late = s.tile(12, Duration::from_millis(6_450));
        assert_eq!(late.entry_opacity, 0.0);
        assert_eq!(s.tile(12, Duration::from_millis(7_250)).entry_opacity, 1.0);
    }

    #[test]
    fn hovered_tile_brightens_and_grows() {
        let mut s = strip();
        s.set_hovered(Some(4));
        let frame = s.frame(Duration::from_secs(5));
        assert_eq!(frame.tiles.len(), 18);
        assert!(frame.paused);
        let hovered = frame.tiles[4];
        assert_eq!(hovered.logo_opacity, 1.0);
        assert_eq!(hovered.scale, 1.1);
        assert_eq!(frame.tiles[5].logo_opacity, 0.6);
    }
}
