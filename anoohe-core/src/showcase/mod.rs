//! Brand showcase animation engine
//!
//! Leaves first: [`responsive`] picks the layout tier, [`positioner`] places
//! tiles, [`scroll`] drives the offset and [`render_mode`] gates which path
//! consumes the result. [`engine`] ties them to a mounted surface.

pub mod easing;
pub mod engine;
pub mod fallback;
pub mod lifecycle;
pub mod positioner;
pub mod render_mode;
pub mod responsive;
pub mod scroll;
pub mod state;
pub mod texture;

pub use easing::EasingKind;
pub use engine::{ShowcaseEngine, ShowcaseFrame, TileContent, TileFrame};
pub use fallback::{FallbackFrame, FallbackTile, MarqueeStrip};
pub use lifecycle::{
    HeadlessSurface, ListenerGuard, ListenerId, ListenerKind, MountedListeners,
    RenderSurface,
};
pub use positioner::{
    Appearance, EntryTiming, RowGeometry, TileInput, TilePlacement,
    WrapStrategy, place_tile,
};
pub use render_mode::{
    Capability, FallbackNotice, Key, KeyResponse, RenderFault, RenderMode,
    RenderModeSelector, ToggleControl,
};
pub use responsive::{LayoutConfig, ViewportTier};
pub use scroll::ScrollDriver;
pub use state::{CarouselState, TileMemory};
pub use texture::{
    LoadState, SimulatedTextureLoader, TextureHandle, TextureLoader,
    TextureSlots,
};
