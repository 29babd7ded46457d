//! Headless showcase run: mounts the engine on an in-memory surface, replays
//! scripted events and prints every frame.

use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anoohe_core::showcase::SimulatedTextureLoader;
use anoohe_core::{
    BrandCatalog, HeadlessSurface, Key, RenderSurface, ShowcaseEngine,
    ShowcaseFrame, ShowcaseSettings, TileContent,
};

/// `<tile>@<frame>` or `none@<frame>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverEvent {
    pub tile: Option<usize>,
    pub frame: u32,
}

impl FromStr for HoverEvent {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        let (tile, frame) = raw
            .split_once('@')
            .ok_or_else(|| format!("expected <tile>@<frame>, got '{raw}'"))?;
        let frame = frame
            .parse()
            .map_err(|_| format!("invalid frame number '{frame}'"))?;
        let tile = match tile {
            "none" | "-" => None,
            t => Some(t.parse().map_err(|_| format!("invalid tile '{t}'"))?),
        };
        Ok(Self { tile, frame })
    }
}

#[derive(Debug, Clone)]
pub struct SimulateOptions {
    pub width: Option<f32>,
    pub frames: u32,
    pub fps: u32,
    pub hover: Vec<HoverEvent>,
    pub toggle_at: Vec<u32>,
    pub fault_at: Option<u32>,
    pub fail_logo: Vec<String>,
    pub no_accel: bool,
    pub json: bool,
}

pub async fn run(opts: SimulateOptions, settings: ShowcaseSettings) -> Result<()> {
    if opts.fps == 0 {
        bail!("--fps must be positive");
    }

    let catalog = BrandCatalog::storefront().context("storefront catalog")?;
    let surface: Arc<dyn RenderSurface> =
        Arc::new(HeadlessSurface::new(opts.width, !opts.no_accel));
    let mut engine = ShowcaseEngine::mount(catalog, surface, settings)
        .context("failed to mount showcase")?;

    engine.start_texture_loads(Arc::new(SimulatedTextureLoader {
        latency: Duration::ZERO,
        failing: opts.fail_logo.iter().cloned().collect::<HashSet<_>>(),
    }));
    // Loads are zero-latency; land them before the first frame.
    engine.settle_texture_loads().await;

    let frame_ms = 1_000.0 / f64::from(opts.fps);
    for n in 0..opts.frames {
        for event in opts.hover.iter().filter(|e| e.frame == n) {
            engine
                .hover(event.tile)
                .with_context(|| format!("hover at frame {n}"))?;
        }
        if opts.toggle_at.contains(&n) {
            engine.on_key(Key::Space);
        }
        if opts.fault_at == Some(n) {
            engine.report_fault("simulated context loss");
        }

        let elapsed = Duration::from_secs_f64(f64::from(n) * frame_ms / 1_000.0);
        let frame = engine.tick(elapsed);
        if opts.json {
            println!("{}", serde_json::to_string(&frame)?);
        } else {
            print_frame(n, &frame);
        }
    }
    Ok(())
}

fn print_frame(n: u32, frame: &ShowcaseFrame) {
    println!(
        "frame {n} t={}ms mode={} tier={} offset={:.3} paused={}",
        frame.elapsed_ms, frame.mode, frame.tier, frame.offset, frame.paused
    );
    if let Some(notice) = &frame.notice {
        println!("  notice: {} / {}", notice.headline, notice.detail);
    }
    for tile in &frame.tiles {
        let content = match &tile.content {
            TileContent::Loading => "loading".to_string(),
            TileContent::Logo { texture, alt } => {
                format!("logo {}x{} ({alt})", texture.width, texture.height)
            }
            TileContent::Error { label } => label.replace('\n', " "),
        };
        println!(
            "  #{:>2} {:<12} x={:>8.3} opacity={:.2} scale={:.3} {}",
            tile.index,
            tile.brand,
            tile.placement.x,
            tile.placement.opacity,
            tile.scale,
            content
        );
    }
    if let Some(strip) = &frame.fallback {
        println!(
            "  strip translate_x={:.1}px tiles={}",
            strip.translate_x,
            strip.tiles.len()
        );
    }
}
