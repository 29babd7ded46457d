//! CarouselState: hover, selection and scroll state of one mounted showcase

use super::scroll::ScrollDriver;

/// Per-tile animation memory. Everything else about a tile is derived each
/// tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMemory {
    /// Entry finished; one-way for the lifetime of the mount.
    pub settled: bool,
    /// Current smoothed scale.
    pub scale: f32,
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    distinct: usize,
    /// Hovered brand slot (`tile % distinct`). At most one at a time.
    hovered: Option<usize>,
    /// Selected brand slot.
    current: usize,
    scroll: ScrollDriver,
    tiles: Vec<TileMemory>,
}

impl CarouselState {
    /// Fresh state at mount: offset 0, nothing hovered, first brand current.
    pub fn new(distinct: usize, scroll_speed: f32, base_scale: f32) -> Self {
        Self {
            distinct: distinct.max(1),
            hovered: None,
            current: 0,
            scroll: ScrollDriver::new(scroll_speed),
            tiles: vec![
                TileMemory {
                    settled: false,
                    scale: base_scale,
                };
                distinct * 2
            ],
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn distinct(&self) -> usize {
        self.distinct
    }

    /// Hover a tile (any copy) or clear hover. Hovering pauses the scroll;
    /// clearing resumes it from the frozen offset.
    pub fn set_hovered(&mut self, tile: Option<usize>) {
        self.hovered = tile.map(|i| i % self.distinct);
        self.scroll.set_paused(self.hovered.is_some());
    }

    pub fn hovered_slot(&self) -> Option<usize> {
        self.hovered
    }

    /// Make the clicked tile's brand current.
    pub fn select(&mut self, tile: usize) {
        self.current = tile % self.distinct;
    }

    pub fn current_slot(&self) -> usize {
        self.current
    }

    pub fn is_hovered_tile(&self, tile: usize) -> bool {
        self.hovered == Some(tile % self.distinct)
    }

    pub fn is_current_tile(&self, tile: usize) -> bool {
        self.current == tile % self.distinct
    }

    pub fn is_paused(&self) -> bool {
        self.scroll.is_paused()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn scroll(&self) -> &ScrollDriver {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollDriver {
        &mut self.scroll
    }

    pub fn tile(&self, index: usize) -> Option<&TileMemory> {
        self.tiles.get(index)
    }

    pub fn tile_mut(&mut self, index: usize) -> Option<&mut TileMemory> {
        self.tiles.get_mut(index)
    }
}
