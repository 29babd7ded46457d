//! ShowcaseEngine: one mounted brand showcase
//!
//! Owns the carousel state, the render-mode selector, the fallback strip and
//! the per-slot texture loads. The host forwards events to it and calls
//! [`ShowcaseEngine::tick`] once per animation frame; each tick returns a
//! complete declarative [`ShowcaseFrame`].
//!
//! Dropping the engine unmounts it: in-flight logo loads are aborted and every
//! listener registered on the surface is removed.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use anoohe_model::{BrandCatalog, TileRef};

use crate::constants::breakpoints;
use crate::error::{Result, ShowcaseError};
use crate::settings::ShowcaseSettings;

use super::fallback::{FallbackFrame, MarqueeStrip};
use super::lifecycle::{MountedListeners, RenderSurface};
use super::positioner::{
    Appearance, EntryTiming, RowGeometry, TileInput, TilePlacement,
    place_tile, smooth_scale, target_scale,
};
use super::render_mode::{
    FallbackNotice, Key, KeyResponse, RenderMode, RenderModeSelector,
    ToggleControl,
};
use super::responsive::{self, LayoutConfig, ViewportTier};
use super::state::{CarouselState, TileMemory};
use super::texture::{LoadState, TextureHandle, TextureLoader, TextureSlots};

/// What a tile shows in place of its logo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TileContent {
    Loading,
    Logo { texture: TextureHandle, alt: String },
    Error { label: String },
}

/// One computed-path tile for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileFrame {
    pub index: usize,
    pub slot: usize,
    /// Unique across both copies of the row, e.g. `dafi-1`.
    pub key: String,
    pub brand: String,
    pub placement: TilePlacement,
    pub scale: f32,
    pub hovered: bool,
    pub current: bool,
    pub content: TileContent,
    /// Brand name label, present while the tile is hovered.
    pub tooltip: Option<String>,
}

/// Complete output of one engine tick.
///
/// `tiles` is filled on the computed path and `fallback` on the fallback
/// path. When `notice` is set the host shows it instead of either.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseFrame {
    pub elapsed_ms: u64,
    pub mode: RenderMode,
    pub tier: ViewportTier,
    pub offset: f32,
    pub paused: bool,
    pub hovered: Option<usize>,
    pub current: usize,
    pub tiles: Vec<TileFrame>,
    pub fallback: Option<FallbackFrame>,
    pub notice: Option<FallbackNotice>,
    pub toggle: Option<ToggleControl>,
}

pub struct ShowcaseEngine {
    catalog: BrandCatalog,
    settings: ShowcaseSettings,
    layout: LayoutConfig,
    geometry: RowGeometry,
    timing: EntryTiming,
    look: Appearance,
    state: CarouselState,
    selector: RenderModeSelector,
    strip: MarqueeStrip,
    textures: TextureSlots,
    last_tick: Duration,
    /// Mode of the previous tick; `None` before the first.
    shown_mode: Option<RenderMode>,
    surface: Arc<dyn RenderSurface>,
    listeners: MountedListeners,
}

impl std::fmt::Debug for ShowcaseEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowcaseEngine")
            .field("tier", &self.layout.tier)
            .field("mode", &self.selector.active())
            .field("offset", &self.state.scroll_offset())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

fn strip_width(width: Option<f32>) -> f32 {
    width
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(breakpoints::WIDE_MIN_WIDTH)
}

impl ShowcaseEngine {
    /// Mount the showcase on `surface`: validate settings, register
    /// listeners, probe capability once and resolve the initial layout.
    pub fn mount(
        catalog: BrandCatalog,
        surface: Arc<dyn RenderSurface>,
        settings: ShowcaseSettings,
    ) -> Result<Self> {
        settings.validate()?;

        let listeners = MountedListeners::acquire(&surface);
        let selector = RenderModeSelector::probe(
            surface.as_ref(),
            Duration::from_millis(settings.fallback.fault_notice_ms),
        );

        let width = surface.viewport_width();
        let layout = responsive::resolve(width);
        let distinct = catalog.distinct_count();
        let geometry =
            RowGeometry::new(&layout, distinct, settings.wrap_strategy);
        let state = CarouselState::new(
            distinct,
            settings.scroll_speed_for(layout.tier),
            layout.base_scale,
        );
        let strip = MarqueeStrip::new(distinct, strip_width(width), &settings);

        tracing::debug!(
            tier = %layout.tier,
            mode = %selector.active(),
            tiles = catalog.tile_count(),
            "showcase mounted"
        );

        Ok(Self {
            textures: TextureSlots::new(distinct),
            catalog,
            settings,
            layout,
            geometry,
            timing: EntryTiming::from_settings(&settings),
            look: Appearance::from_settings(&settings),
            state,
            selector,
            strip,
            last_tick: Duration::ZERO,
            shown_mode: None,
            surface,
            listeners,
        })
    }

    /// Kick off one logo load per brand. Requires a tokio runtime.
    pub fn start_texture_loads(&mut self, loader: Arc<dyn TextureLoader>) {
        self.textures.spawn_all(&self.catalog, loader);
    }

    /// Wait for every started logo load to finish and apply the results.
    pub async fn settle_texture_loads(&mut self) {
        let changed = self.textures.settle(&self.catalog).await;
        tracing::debug!(changed, "logo loads settled");
    }

    /// Re-resolve the layout for a new viewport width.
    pub fn on_resize(&mut self, width: Option<f32>) {
        let layout = responsive::resolve(width);
        if layout.tier != self.layout.tier {
            tracing::debug!(from = %self.layout.tier, to = %layout.tier, "layout tier changed");
        }
        self.layout = layout;
        self.geometry = RowGeometry::new(
            &layout,
            self.catalog.distinct_count(),
            self.settings.wrap_strategy,
        );
        self.state
            .scroll_mut()
            .set_speed(self.settings.scroll_speed_for(layout.tier));
        self.strip.set_viewport_width(strip_width(width));
    }

    /// Re-read the width from the surface, as a resize listener would.
    pub fn refresh_viewport(&mut self) {
        let width = self.surface.viewport_width();
        self.on_resize(width);
    }

    pub fn on_key(&mut self, key: Key) -> KeyResponse {
        self.selector.handle_key(key)
    }

    fn check_tile(&self, index: usize) -> Result<TileRef> {
        self.catalog
            .tile(index)
            .ok_or(ShowcaseError::TileOutOfRange {
                index,
                tile_count: self.catalog.tile_count(),
            })
    }

    /// Hover a tile, or clear hover with `None`. Pauses both scroll paths.
    pub fn hover(&mut self, tile: Option<usize>) -> Result<()> {
        if let Some(index) = tile {
            self.check_tile(index)?;
        }
        self.state.set_hovered(tile);
        self.strip.set_hovered(tile);
        tracing::trace!(?tile, offset = self.state.scroll_offset(), "hover");
        Ok(())
    }

    /// Make the clicked tile's brand current.
    pub fn click(&mut self, tile: usize) -> Result<()> {
        let tile = self.check_tile(tile)?;
        self.state.select(tile.index);
        tracing::debug!(tile = tile.index, brand = %self.catalog.brand_for_tile(tile.index).name, "brand selected");
        Ok(())
    }

    /// Report an unrecoverable error from the accelerated path. The showcase
    /// stays on the fallback path for the rest of the mount.
    pub fn report_fault(&mut self, message: impl Into<String>) {
        self.selector.report_fault(message, self.last_tick);
    }

    /// Advance every animation to frame-clock time `elapsed` (since mount)
    /// and describe the result.
    pub fn tick(&mut self, elapsed: Duration) -> ShowcaseFrame {
        self.last_tick = elapsed;
        self.textures.poll(&self.catalog);

        let offset = self.state.scroll_mut().tick(elapsed);
        self.strip.tick(elapsed);

        let mode = self.selector.active();
        if mode == RenderMode::Fallback
            && self.shown_mode == Some(RenderMode::Computed)
        {
            self.strip.restart_entry(elapsed);
        }
        self.shown_mode = Some(mode);

        let (tiles, fallback) = match mode {
            RenderMode::Computed => (self.computed_tiles(offset, elapsed), None),
            RenderMode::Fallback => {
                (Vec::new(), Some(self.strip.frame(elapsed)))
            }
        };

        ShowcaseFrame {
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            mode,
            tier: self.layout.tier,
            offset,
            paused: self.state.is_paused(),
            hovered: self.state.hovered_slot(),
            current: self.state.current_slot(),
            tiles,
            fallback,
            notice: self.selector.notice(elapsed),
            toggle: self.selector.toggle_control(),
        }
    }

    fn computed_tiles(
        &mut self,
        offset: f32,
        elapsed: Duration,
    ) -> Vec<TileFrame> {
        let refs: Vec<TileRef> = self.catalog.tiles().collect();
        let mut frames = Vec::with_capacity(refs.len());

        for tile in refs {
            let hovered = self.state.is_hovered_tile(tile.index);
            let current = self.state.is_current_tile(tile.index);
            let memory = self.state.tile(tile.index).copied().unwrap_or(
                TileMemory {
                    settled: false,
                    scale: self.layout.base_scale,
                },
            );

            let placement = place_tile(
                &self.geometry,
                &self.timing,
                &self.look,
                TileInput {
                    index: tile.index,
                    hovered,
                    current,
                    offset,
                    elapsed,
                    settled: memory.settled,
                },
            );
            let scale = smooth_scale(
                memory.scale,
                target_scale(&self.layout, hovered),
                self.look.scale_smoothing,
            );

            if let Some(slot) = self.state.tile_mut(tile.index) {
                if placement.settled && !slot.settled {
                    tracing::trace!(tile = tile.index, "tile settled");
                }
                slot.settled |= placement.settled;
                slot.scale = scale;
            }

            let brand = self.catalog.brand_for_tile(tile.index);
            frames.push(TileFrame {
                index: tile.index,
                slot: tile.slot,
                key: tile.render_key(&self.catalog),
                brand: brand.name.clone(),
                placement,
                scale,
                hovered,
                current,
                content: self.content_for(tile.slot),
                tooltip: hovered.then(|| brand.name.clone()),
            });
        }
        frames
    }

    fn content_for(&self, slot: usize) -> TileContent {
        let Some(brand) = self.catalog.brand(slot) else {
            return TileContent::Loading;
        };
        match self.textures.state(slot) {
            Some(LoadState::Loaded(texture)) => TileContent::Logo {
                texture: texture.clone(),
                alt: brand.alt_text(),
            },
            Some(LoadState::Failed(_)) => TileContent::Error {
                label: format!("Failed to load\n{}", brand.name),
            },
            Some(LoadState::Loading) | None => TileContent::Loading,
        }
    }

    pub fn catalog(&self) -> &BrandCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &ShowcaseSettings {
        &self.settings
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn geometry(&self) -> &RowGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn selector(&self) -> &RenderModeSelector {
        &self.selector
    }

    pub fn texture_state(&self, slot: usize) -> Option<&LoadState> {
        self.textures.state(slot)
    }

    pub fn listeners(&self) -> &MountedListeners {
        &self.listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::lifecycle::HeadlessSurface;

    fn mount(width: Option<f32>, accelerated: bool) -> ShowcaseEngine {
        let surface: Arc<dyn RenderSurface> =
            Arc::new(HeadlessSurface::new(width, accelerated));
        ShowcaseEngine::mount(
            BrandCatalog::storefront().unwrap(),
            surface,
            ShowcaseSettings::default(),
        )
        .unwrap()
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_frame_has_eighteen_unstarted_tiles() {
        let mut engine = mount(Some(1280.0), true);
        let frame = engine.tick(Duration::ZERO);
        assert_eq!(frame.mode, RenderMode::Computed);
        assert_eq!(frame.tiles.len(), 18);
        assert_eq!(frame.offset, 0.0);
        assert_eq!(frame.tiles[0].placement.entry_progress, 0.0);
        assert!(frame.tiles.iter().all(|t| t.content == TileContent::Loading));
        assert_eq!(frame.tiles[10].key, "dafi-1");
    }

    #[test]
    fn out_of_range_tiles_are_rejected() {
        let mut engine = mount(None, true);
        assert!(matches!(
            engine.hover(Some(18)),
            Err(ShowcaseError::TileOutOfRange {
                index: 18,
                tile_count: 18
            })
        ));
        assert!(engine.click(40).is_err());
        assert!(!engine.state().is_paused());
    }

    #[test]
    fn hovered_tile_gets_tooltip_and_grows() {
        let mut engine = mount(Some(1280.0), true);
        engine.tick(ms(5_000));
        engine.hover(Some(2)).unwrap();
        let frame = engine.tick(ms(5_016));
        let tile = &frame.tiles[2];
        assert_eq!(tile.tooltip.as_deref(), Some("Hydroderm"));
        assert_eq!(tile.placement.opacity, 1.0);
        assert!(tile.scale > 1.0 && tile.scale < 1.3);
        assert!(frame.tiles[11].hovered, "duplicate copy highlights too");
        assert_eq!(frame.tiles[3].tooltip, None);
    }

    #[test]
    fn resize_switches_tier_without_moving_offset() {
        let mut engine = mount(Some(1280.0), true);
        engine.tick(ms(0));
        let before = engine.tick(ms(4_000)).offset;
        engine.on_resize(Some(500.0));
        assert_eq!(engine.layout().tier, ViewportTier::Narrow);
        let after = engine.tick(ms(4_000)).offset;
        assert!((after - before).abs() < 1e-4);
        let later = engine.tick(ms(5_000)).offset;
        assert!((later - before - 0.2).abs() < 1e-3);
    }

    #[test]
    fn no_capability_renders_fallback_without_toggle() {
        let mut engine = mount(Some(900.0), false);
        let frame = engine.tick(ms(100));
        assert_eq!(frame.mode, RenderMode::Fallback);
        assert!(frame.tiles.is_empty());
        assert_eq!(frame.fallback.map(|f| f.tiles.len()), Some(18));
        assert!(frame.toggle.is_none());
    }

    #[test]
    fn fault_shows_notice_then_stays_on_fallback() {
        let mut engine = mount(Some(1280.0), true);
        engine.tick(ms(1_000));
        engine.report_fault("context lost");
        let frame = engine.tick(ms(1_100));
        assert_eq!(frame.mode, RenderMode::Fallback);
        assert_eq!(frame.notice, Some(FallbackNotice::UNSUPPORTED));
        assert_eq!(
            engine.on_key(Key::Space),
            KeyResponse::Toggled(RenderMode::Fallback)
        );
        let frame = engine.tick(ms(3_000));
        assert!(frame.notice.is_none());
        assert_eq!(frame.mode, RenderMode::Fallback);
        assert!(frame.toggle.is_none());
    }

    #[test]
    fn switching_to_fallback_replays_strip_entry() {
        let mut engine = mount(Some(1280.0), true);
        engine.tick(ms(5_000));
        assert_eq!(
            engine.on_key(Key::Space),
            KeyResponse::Toggled(RenderMode::Fallback)
        );
        let strip = engine.tick(ms(5_016)).fallback.unwrap();
        assert!(strip.tiles[0].entry_opacity < 1.0);
        assert!(strip.tiles[0].entry_offset_x < 0.0);
        assert_eq!(strip.tiles[8].entry_opacity, 0.0);

        let strip = engine.tick(ms(7_500)).fallback.unwrap();
        assert!(strip.tiles.iter().all(|t| t.entry_opacity == 1.0));
    }

    #[test]
    fn fault_replays_strip_entry() {
        let mut engine = mount(Some(1280.0), true);
        engine.tick(ms(10_000));
        engine.report_fault("context lost");
        let strip = engine.tick(ms(10_016)).fallback.unwrap();
        assert!(strip.tiles[0].entry_opacity < 1.0);
        assert_eq!(strip.tiles[17].entry_opacity, 0.0);
    }

    #[test]
    fn dropping_engine_unmounts_listeners() {
        let headless = Arc::new(HeadlessSurface::new(Some(1280.0), true));
        let surface: Arc<dyn RenderSurface> = headless.clone();
        let engine = ShowcaseEngine::mount(
            BrandCatalog::storefront().unwrap(),
            surface,
            ShowcaseSettings::default(),
        )
        .unwrap();
        assert_eq!(headless.active_listeners().len(), 3);
        drop(engine);
        assert!(headless.active_listeners().is_empty());
    }

    #[test]
    fn invalid_settings_fail_before_registering() {
        let headless = Arc::new(HeadlessSurface::new(Some(1280.0), true));
        let surface: Arc<dyn RenderSurface> = headless.clone();
        let settings = ShowcaseSettings {
            entry_duration_ms: 0,
            ..ShowcaseSettings::default()
        };
        let err = ShowcaseEngine::mount(
            BrandCatalog::storefront().unwrap(),
            surface,
            settings,
        )
        .unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidSettings(_)));
        assert!(headless.active_listeners().is_empty());
    }
}
