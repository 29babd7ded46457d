//! Runtime settings for the showcase engine and newsletter flow
//!
//! Every field defaults to the compiled constant in [`crate::constants`].
//! Overrides come from a TOML/JSON file or an inline JSON blob named by
//! environment variables.

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::constants::{appearance, entry, fallback, newsletter, scroll};
use crate::error::ShowcaseError;
use crate::showcase::easing::EasingKind;
use crate::showcase::positioner::WrapStrategy;
use crate::showcase::responsive::ViewportTier;

/// Path to a TOML or JSON settings file.
pub const CONFIG_PATH_ENV: &str = "ANOOHE_SHOWCASE_CONFIG_PATH";
/// Inline JSON settings.
pub const CONFIG_JSON_ENV: &str = "ANOOHE_SHOWCASE_CONFIG_JSON";

/// Source that produced the showcase settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
}

/// Tunables for the fallback marquee strip.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackSettings {
    /// Duration of one full translation loop (ms).
    pub loop_duration_ms: u64,
    /// Opacity of logos that are not hovered.
    pub resting_opacity: f32,
    pub hover_opacity: f32,
    pub hover_scale: f32,
    /// How long the fault notice stays up before the strip shows (ms).
    pub fault_notice_ms: u64,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            loop_duration_ms: fallback::LOOP_DURATION_MS,
            resting_opacity: fallback::RESTING_OPACITY,
            hover_opacity: fallback::HOVER_OPACITY,
            hover_scale: fallback::HOVER_SCALE,
            fault_notice_ms: fallback::FAULT_NOTICE_MS,
        }
    }
}

/// Top-level showcase settings. Raise `entry_stagger_ms` for a slower
/// cascade; lower `scale_smoothing` for a lazier hover response.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    /// Delay between consecutive tiles starting their entry (ms).
    pub entry_stagger_ms: u64,
    /// Duration of one tile's entry (ms).
    pub entry_duration_ms: u64,
    /// Curve applied to computed-path entry progress.
    pub entry_easing: EasingKind,
    /// Distance a tile slides in from, in world units.
    pub slide_distance: f32,
    /// Opacity of tiles that are neither hovered nor current.
    pub dimmed_opacity: f32,
    /// Fraction of the remaining scale gap closed per tick, in `(0, 1]`.
    pub scale_smoothing: f32,
    /// Scroll speed on narrow viewports (units/s).
    pub narrow_scroll_speed: f32,
    /// Scroll speed on medium and wide viewports (units/s).
    pub scroll_speed: f32,
    pub wrap_strategy: WrapStrategy,
    pub fallback: FallbackSettings,
    /// Latency of the simulated newsletter endpoint (ms).
    pub newsletter_delay_ms: u64,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            entry_stagger_ms: entry::STAGGER_MS,
            entry_duration_ms: entry::DURATION_MS,
            entry_easing: EasingKind::EaseOutCubic,
            slide_distance: entry::SLIDE_DISTANCE,
            dimmed_opacity: appearance::DIMMED_OPACITY,
            scale_smoothing: appearance::SCALE_SMOOTHING,
            narrow_scroll_speed: scroll::NARROW_SPEED,
            scroll_speed: scroll::DEFAULT_SPEED,
            wrap_strategy: WrapStrategy::default(),
            fallback: FallbackSettings::default(),
            newsletter_delay_ms: newsletter::SIMULATED_DELAY_MS,
        }
    }
}

impl ShowcaseSettings {
    pub fn entry_stagger(&self) -> Duration {
        Duration::from_millis(self.entry_stagger_ms)
    }

    pub fn entry_duration(&self) -> Duration {
        Duration::from_millis(self.entry_duration_ms)
    }

    pub fn newsletter_delay(&self) -> Duration {
        Duration::from_millis(self.newsletter_delay_ms)
    }

    pub fn scroll_speed_for(&self, tier: ViewportTier) -> f32 {
        match tier {
            ViewportTier::Narrow => self.narrow_scroll_speed,
            ViewportTier::Medium | ViewportTier::Wide => self.scroll_speed,
        }
    }

    /// Reject settings the engine cannot animate sensibly.
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        fn unit(name: &str, v: f32) -> Result<(), ShowcaseError> {
            if !(0.0..=1.0).contains(&v) {
                return Err(ShowcaseError::InvalidSettings(format!(
                    "{name} must be within [0, 1], got {v}"
                )));
            }
            Ok(())
        }

        if self.entry_duration_ms == 0 {
            return Err(ShowcaseError::InvalidSettings(
                "entry_duration_ms must be positive".into(),
            ));
        }
        if self.fallback.loop_duration_ms == 0 {
            return Err(ShowcaseError::InvalidSettings(
                "fallback.loop_duration_ms must be positive".into(),
            ));
        }
        if !(self.scale_smoothing > 0.0 && self.scale_smoothing <= 1.0) {
            return Err(ShowcaseError::InvalidSettings(format!(
                "scale_smoothing must be within (0, 1], got {}",
                self.scale_smoothing
            )));
        }
        if !(self.scroll_speed >= 0.0 && self.narrow_scroll_speed >= 0.0) {
            return Err(ShowcaseError::InvalidSettings(
                "scroll speeds must be non-negative".into(),
            ));
        }
        unit("dimmed_opacity", self.dimmed_opacity)?;
        unit("fallback.resting_opacity", self.fallback.resting_opacity)?;
        unit("fallback.hover_opacity", self.fallback.hover_opacity)?;
        Ok(())
    }

    /// Load settings overrides using environment variables.
    /// Evaluation order:
    /// 1) `$ANOOHE_SHOWCASE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$ANOOHE_SHOWCASE_CONFIG_JSON` (inline JSON),
    /// 3) defaults if neither is set.
    pub fn load_from_env() -> anyhow::Result<(Self, SettingsSource)> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`Self::load_from_env`] with an injectable variable lookup.
    pub fn load_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<(Self, SettingsSource)> {
        let (settings, source) = if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let settings = Self::load_from_file(&path)?;
            (settings, SettingsSource::EnvPath(path))
        } else if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            (parsed, SettingsSource::EnvInline)
        } else {
            (Self::default(), SettingsSource::Default)
        };

        settings.validate()?;
        Ok((settings, source))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read showcase settings from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid showcase settings {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid showcase settings {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse showcase settings {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid showcase settings json: {err}"))
    }
}
