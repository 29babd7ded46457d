//! Render-mode selector
//!
//! Capability is probed once at mount and cached for the session. A rendering
//! fault downgrades the cached capability permanently; the user toggle only
//! expresses a preference on top of it.

use serde::Serialize;
use std::time::Duration;

use super::lifecycle::RenderSurface;

/// Result of the one-time accelerated-graphics probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Accelerated,
    Unavailable,
}

impl Capability {
    pub fn detect(surface: &dyn RenderSurface) -> Self {
        if surface.probe_acceleration() {
            Self::Accelerated
        } else {
            Self::Unavailable
        }
    }
}

/// Which path consumes the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Computed 3D-style placement from the positioner.
    Computed,
    /// 2D marquee strip.
    Fallback,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Computed => write!(f, "3D"),
            Self::Fallback => write!(f, "2D"),
        }
    }
}

/// An unrecoverable error observed on the accelerated path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFault {
    pub message: String,
    /// Frame-clock time the fault was reported.
    pub at: Duration,
}

/// Keys the showcase reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Not ours; let the host handle it.
    Ignored,
    /// Default action suppressed, nothing else happens.
    Consumed,
    /// Mode toggled; carries the now-active mode.
    Toggled(RenderMode),
}

/// On-screen toggle control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleControl {
    /// Mode the control switches to.
    pub target: RenderMode,
    pub title: String,
    pub aria_label: String,
}

/// Placeholder shown briefly after a fault, before the fallback strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackNotice {
    pub headline: &'static str,
    pub detail: &'static str,
}

impl FallbackNotice {
    pub const UNSUPPORTED: Self = Self {
        headline: "3D view not supported",
        detail: "Fallback to standard view",
    };
}

#[derive(Debug, Clone)]
pub struct RenderModeSelector {
    capability: Capability,
    prefer_computed: bool,
    fault: Option<RenderFault>,
    notice_window: Duration,
}

impl RenderModeSelector {
    pub fn new(capability: Capability, notice_window: Duration) -> Self {
        Self {
            capability,
            prefer_computed: true,
            fault: None,
            notice_window,
        }
    }

    /// Probe the surface once and cache the result.
    pub fn probe(surface: &dyn RenderSurface, notice_window: Duration) -> Self {
        let capability = Capability::detect(surface);
        tracing::debug!(?capability, "render capability probed");
        Self::new(capability, notice_window)
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn fault(&self) -> Option<&RenderFault> {
        self.fault.as_ref()
    }

    pub fn active(&self) -> RenderMode {
        if self.prefer_computed && self.capability == Capability::Accelerated {
            RenderMode::Computed
        } else {
            RenderMode::Fallback
        }
    }

    /// Flip the user preference and return the resulting mode. Without
    /// capability the preference changes but the mode stays on fallback.
    pub fn toggle(&mut self) -> RenderMode {
        self.prefer_computed = !self.prefer_computed;
        let mode = self.active();
        tracing::debug!(%mode, "render mode toggled");
        mode
    }

    /// Record an unrecoverable rendering error. Only the first fault is kept.
    pub fn report_fault(&mut self, message: impl Into<String>, at: Duration) {
        if self.fault.is_some() {
            return;
        }
        let message = message.into();
        tracing::warn!(%message, "accelerated rendering failed; using fallback");
        self.capability = Capability::Unavailable;
        self.fault = Some(RenderFault { message, at });
    }

    /// The toggle is hidden only when capability is absent and the fallback
    /// is already showing.
    pub fn toggle_visible(&self) -> bool {
        !(self.capability == Capability::Unavailable
            && self.active() == RenderMode::Fallback)
    }

    pub fn toggle_control(&self) -> Option<ToggleControl> {
        if !self.toggle_visible() {
            return None;
        }
        let target = match self.active() {
            RenderMode::Computed => RenderMode::Fallback,
            RenderMode::Fallback => RenderMode::Computed,
        };
        Some(ToggleControl {
            target,
            title: format!("Switch to {target} view (Press Space)"),
            aria_label: format!("Switch to {target} view"),
        })
    }

    /// Notice to show at frame-clock time `now`, if a fault is recent.
    pub fn notice(&self, now: Duration) -> Option<FallbackNotice> {
        let fault = self.fault.as_ref()?;
        (now.saturating_sub(fault.at) < self.notice_window)
            .then_some(FallbackNotice::UNSUPPORTED)
    }

    pub fn handle_key(&mut self, key: Key) -> KeyResponse {
        match key {
            Key::Space => KeyResponse::Toggled(self.toggle()),
            // Reserved for manual stepping; swallowed so the page does not scroll.
            Key::ArrowLeft | Key::ArrowRight => KeyResponse::Consumed,
            Key::Other => KeyResponse::Ignored,
        }
    }
}
