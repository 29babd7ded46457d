use anoohe_core::showcase::{
    ListenerKind, LoadState, SimulatedTextureLoader, WrapStrategy,
};
use anoohe_core::{
    BrandCatalog, HeadlessSurface, Key, KeyResponse, RenderMode,
    RenderSurface, ShowcaseEngine, ShowcaseSettings, TileContent,
    ViewportTier,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn mount_on(headless: &Arc<HeadlessSurface>) -> ShowcaseEngine {
    let surface: Arc<dyn RenderSurface> = headless.clone();
    ShowcaseEngine::mount(
        BrandCatalog::storefront().unwrap(),
        surface,
        ShowcaseSettings::default(),
    )
    .unwrap()
}

fn desktop() -> Arc<HeadlessSurface> {
    Arc::new(HeadlessSurface::new(Some(1440.0), true))
}

#[test]
fn test_entry_progress_is_staggered_and_monotonic() {
    let mut engine = mount_on(&desktop());
    let first = engine.tick(Duration::ZERO);
    assert_eq!(first.tiles.len(), 18);
    assert_eq!(first.offset, 0.0);
    assert_eq!(first.tiles[0].placement.entry_progress, 0.0);

    let index = 5;
    let start = index as u64 * 150;
    let end = start + 800;
    let mut last = 0.0;
    for t in (0..=end).step_by(25) {
        let frame = engine.tick(ms(t));
        let progress = frame.tiles[index].placement.entry_progress;
        if t <= start {
            assert_eq!(progress, 0.0, "tile {index} started early at {t}ms");
        }
        assert!(progress >= last, "progress fell at {t}ms");
        last = progress;
    }
    assert_eq!(last, 1.0);
    assert!(engine.state().tile(index).unwrap().settled);
}

#[test]
fn test_hover_pauses_scroll_until_released() {
    let mut engine = mount_on(&desktop());
    engine.tick(ms(0));
    engine.tick(ms(2_000));

    engine.hover(Some(3)).unwrap();
    let frozen = engine.tick(ms(2_016));
    assert!(frozen.paused);
    assert_eq!(frozen.hovered, Some(3));
    for t in [3_000, 6_000, 12_000] {
        let frame = engine.tick(ms(t));
        assert_eq!(frame.offset, frozen.offset);
    }

    engine.hover(None).unwrap();
    let resumed = engine.tick(ms(12_000));
    assert!(!resumed.paused);
    assert!((resumed.offset - frozen.offset).abs() < 1e-4);
    let later = engine.tick(ms(13_000));
    assert!((later.offset - frozen.offset - 0.3).abs() < 1e-3);
}

#[test]
fn test_unhover_returns_tile_to_resting_targets() {
    let mut engine = mount_on(&desktop());
    engine.tick(ms(10_000));
    engine.hover(Some(4)).unwrap();
    for step in 1..=60 {
        engine.tick(ms(10_000 + step * 16));
    }
    let grown = engine.state().tile(4).unwrap().scale;
    assert!(grown > 1.25);

    engine.hover(None).unwrap();
    let mut frame = engine.tick(ms(11_000));
    assert_eq!(frame.tiles[4].placement.opacity, 0.7);
    for step in 1..=200 {
        frame = engine.tick(ms(11_000 + step * 16));
    }
    assert!((frame.tiles[4].scale - 1.0).abs() < 1e-3);
}

#[test]
fn test_duplicated_row_is_seamless_at_every_offset() {
    let mut engine = mount_on(&desktop());
    let wrap = engine.geometry().wrap_range;
    for t in (0..120_000).step_by(997) {
        let frame = engine.tick(ms(t));
        for i in 0..9 {
            let a = frame.tiles[i].placement.x;
            let b = frame.tiles[i + 9].placement.x;
            if frame.tiles[i].placement.settled
                && frame.tiles[i + 9].placement.settled
            {
                assert!(((b - a) - wrap).abs() < 1e-3, "tile {i} at {t}ms");
            }
        }
    }
}

#[test]
fn test_legacy_wrap_strategy_is_selectable() {
    let surface: Arc<dyn RenderSurface> = desktop();
    let settings = ShowcaseSettings {
        wrap_strategy: WrapStrategy::SpanWithSlack,
        ..ShowcaseSettings::default()
    };
    let engine = ShowcaseEngine::mount(
        BrandCatalog::storefront().unwrap(),
        surface,
        settings,
    )
    .unwrap();
    let g = engine.geometry();
    assert!((g.wrap_range - (g.span + 2.0 * g.spacing)).abs() < 1e-4);
}

#[test]
fn test_mode_toggle_and_fault() {
    let mut engine = mount_on(&desktop());
    assert_eq!(engine.tick(ms(0)).mode, RenderMode::Computed);
    assert_eq!(
        engine.on_key(Key::Space),
        KeyResponse::Toggled(RenderMode::Fallback)
    );
    let frame = engine.tick(ms(100));
    assert!(frame.fallback.is_some());
    assert_eq!(
        frame.toggle.map(|t| t.title),
        Some("Switch to 3D view (Press Space)".to_string())
    );
    engine.on_key(Key::Space);
    engine.report_fault("WebGL context lost");
    for t in [200, 5_000, 50_000] {
        engine.on_key(Key::Space);
        assert_eq!(engine.tick(ms(t)).mode, RenderMode::Fallback);
    }
}

#[test]
fn test_resize_reclassifies_layout() {
    let headless = desktop();
    let mut engine = mount_on(&headless);
    assert_eq!(engine.layout().tier, ViewportTier::Wide);
    headless.set_width(Some(800.0));
    engine.refresh_viewport();
    assert_eq!(engine.layout().tier, ViewportTier::Medium);
    assert_eq!(engine.tick(ms(0)).tier, ViewportTier::Medium);
    headless.set_width(None);
    engine.refresh_viewport();
    assert_eq!(engine.layout().tier, ViewportTier::Wide);
}

#[test]
fn test_unmount_releases_listeners() {
    let headless = desktop();
    let engine = mount_on(&headless);
    let mut kinds = headless.active_listeners();
    kinds.sort();
    assert_eq!(
        kinds,
        vec![
            ListenerKind::Resize,
            ListenerKind::KeyDown,
            ListenerKind::AnimationFrame
        ]
    );
    assert!(engine.listeners().is_listening(ListenerKind::KeyDown));
    drop(engine);
    assert!(headless.active_listeners().is_empty());
}

#[tokio::test]
async fn test_failed_logo_is_isolated() {
    let mut engine = mount_on(&desktop());
    let loader = SimulatedTextureLoader {
        latency: Duration::ZERO,
        failing: HashSet::from(["c5d40052".to_string()]),
    };
    engine.start_texture_loads(Arc::new(loader));

    let mut t = 0;
    while (0..9).any(|slot| {
        engine
            .texture_state(slot)
            .is_some_and(LoadState::is_loading)
    }) {
        tokio::task::yield_now().await;
        t += 16;
        engine.tick(ms(t));
    }

    let frame = engine.tick(ms(t + 16));
    let expected = TileContent::Error {
        label: "Failed to load\nDafi".to_string(),
    };
    assert_eq!(frame.tiles[1].content, expected);
    assert_eq!(frame.tiles[10].content, expected);
    for tile in frame.tiles.iter().filter(|t| t.slot != 1) {
        assert!(
            matches!(tile.content, TileContent::Logo { .. }),
            "{} should have its logo",
            tile.brand
        );
    }
}
