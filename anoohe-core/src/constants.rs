//! Centralized constants for the brand showcase and newsletter form
//!
//! Compiled defaults for every tunable in [`crate::settings`]. Tuning should
//! happen here so the computed path, the fallback strip and the CLI stay in
//! agreement.

/// Viewport breakpoints in CSS pixels.
pub mod breakpoints {
    /// Widths strictly below this are narrow.
    pub const MEDIUM_MIN_WIDTH: f32 = 768.0;
    /// Widths at or above this are wide.
    pub const WIDE_MIN_WIDTH: f32 = 1024.0;
}

/// Per-tier layout constants for the computed (3D) path, in world units.
pub mod layout {
    /// Horizontal gap between adjacent tiles, identical for every tier.
    pub const TILE_GAP: f32 = 0.5;
    /// Vertical field of view of the showcase camera, in degrees.
    pub const FIELD_OF_VIEW_DEG: f32 = 50.0;
    /// Depth shared by every tile.
    pub const TILE_DEPTH: f32 = 0.0;
    /// Vertical position shared by every tile.
    pub const TILE_ELEVATION: f32 = 0.0;

    pub mod wide {
        pub const TILE_WIDTH: f32 = 1.8;
        pub const TILE_HEIGHT: f32 = 1.5;
        pub const HOVER_SCALE: f32 = 1.3;
        pub const VIEWING_DISTANCE: f32 = 12.0;
    }

    pub mod medium {
        pub const TILE_WIDTH: f32 = 1.5;
        pub const TILE_HEIGHT: f32 = 1.2;
        pub const HOVER_SCALE: f32 = 1.25;
        pub const VIEWING_DISTANCE: f32 = 10.0;
    }

    pub mod narrow {
        pub const TILE_WIDTH: f32 = 1.2;
        pub const TILE_HEIGHT: f32 = 1.0;
        pub const HOVER_SCALE: f32 = 1.2;
        pub const VIEWING_DISTANCE: f32 = 8.0;
    }

    /// Resting scale for all tiers.
    pub const BASE_SCALE: f32 = 1.0;
}

/// Staggered entry animation shared by both rendering paths.
pub mod entry {
    /// Delay between consecutive tiles starting their entry (ms).
    pub const STAGGER_MS: u64 = 150;
    /// Duration of a single tile's entry (ms).
    pub const DURATION_MS: u64 = 800;
    /// Distance a computed-path tile slides in from, in world units.
    pub const SLIDE_DISTANCE: f32 = 5.0;
}

/// Steady-state appearance of computed-path tiles.
pub mod appearance {
    /// Opacity of tiles that are neither hovered nor current.
    pub const DIMMED_OPACITY: f32 = 0.7;
    /// Opacity of hovered or current tiles.
    pub const FOCUSED_OPACITY: f32 = 1.0;
    /// Fraction of the remaining scale gap closed per tick.
    pub const SCALE_SMOOTHING: f32 = 0.1;
}

/// Continuous scroll speeds in world units per second.
pub mod scroll {
    pub const NARROW_SPEED: f32 = 0.2;
    pub const DEFAULT_SPEED: f32 = 0.3;
}

/// Fallback marquee strip, in CSS pixels.
pub mod fallback {
    /// Duration of one full translation loop (ms).
    pub const LOOP_DURATION_MS: u64 = 20_000;
    /// Translation at the start of the loop.
    pub const TRANSLATE_START_PX: f32 = -50.0;
    /// Extra travel beyond the viewport width at the end of the loop.
    pub const TRANSLATE_OVERSHOOT_PX: f32 = 200.0;
    /// Horizontal offset a tile enters from.
    pub const ENTRY_OFFSET_PX: f32 = -50.0;
    /// CSS `cubic-bezier` control points of the tile entry.
    pub const ENTRY_BEZIER: (f32, f32, f32, f32) = (0.25, 0.46, 0.45, 0.94);
    pub const RESTING_OPACITY: f32 = 0.6;
    pub const HOVER_OPACITY: f32 = 1.0;
    pub const HOVER_SCALE: f32 = 1.1;
    /// How long the "3D view not supported" notice stays up after a fault (ms).
    pub const FAULT_NOTICE_MS: u64 = 1_500;
}

/// Newsletter signup.
pub mod newsletter {
    /// Latency of the simulated subscription endpoint (ms).
    pub const SIMULATED_DELAY_MS: u64 = 1_000;
    pub const EMAIL_FIELD: &str = "email";
}
