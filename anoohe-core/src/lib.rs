//! # Anoohe Core
//!
//! Engine behind the Anoohe storefront's brand showcase, plus the small form
//! and newsletter flow that sits beside it in the page footer.
//!
//! ## Overview
//!
//! - **Showcase**: an infinitely scrolling row of partner-brand logos with a
//!   computed 3D-style layout and a flat marquee fallback
//! - **Forms**: rule-based field validation with per-field error state
//! - **Newsletter**: the signup form driven through an async service seam
//! - **Settings**: runtime tunables loaded from TOML or JSON
//!
//! ## Architecture
//!
//! - [`showcase`]: responsive layout, tile positioner, scroll driver,
//!   render-mode selector and the [`ShowcaseEngine`] that owns them
//! - [`forms`]: [`FormState`] and [`validate_field`]
//! - [`newsletter`]: [`NewsletterForm`] and [`NewsletterService`]
//! - [`settings`]: [`ShowcaseSettings`] and its environment loader
//! - [`constants`]: compiled defaults
//!
//! Everything in [`showcase`] is computed synchronously inside the host's
//! frame callback. The only async work is logo loading and the newsletter
//! call, both on tokio.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use anoohe_core::{
//!     BrandCatalog, HeadlessSurface, RenderSurface, ShowcaseEngine,
//!     ShowcaseSettings,
//! };
//!
//! fn run() -> anyhow::Result<()> {
//!     let surface: Arc<dyn RenderSurface> =
//!         Arc::new(HeadlessSurface::new(Some(1280.0), true));
//!     let mut engine = ShowcaseEngine::mount(
//!         BrandCatalog::storefront()?,
//!         surface,
//!         ShowcaseSettings::default(),
//!     )?;
//!     let frame = engine.tick(Duration::from_millis(16));
//!     println!("{} tiles at offset {}", frame.tiles.len(), frame.offset);
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod error;
pub mod forms;
pub mod newsletter;
pub mod settings;
pub mod showcase;

pub use anoohe_model::{AssetRef, Brand, BrandCatalog, BrandId, TileRef};
pub use error::{NewsletterError, Result, ShowcaseError, TextureError};
pub use forms::{FieldRules, FieldView, FormField, FormState, validate_field};
pub use newsletter::{
    NewsletterForm, NewsletterService, SimulatedNewsletter, SubmitOutcome,
    SubscriptionReceipt, SubscriptionStatus,
};
pub use settings::{FallbackSettings, SettingsSource, ShowcaseSettings};
pub use showcase::{
    HeadlessSurface, Key, KeyResponse, RenderMode, RenderSurface,
    ShowcaseEngine, ShowcaseFrame, TextureLoader, TileContent, ViewportTier,
};
