//! Rendering surface seam and scoped listener registration
//!
//! A mounted showcase holds one [`ListenerGuard`] per registration. Dropping
//! the guards (normally by dropping the engine) deregisters every listener,
//! including on early-return and error paths.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Host events the showcase subscribes to while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    Resize,
    KeyDown,
    /// The per-frame animation callback.
    AnimationFrame,
}

/// Handle returned by [`RenderSurface::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// The host the showcase renders into: a browser canvas, a GPU window or a
/// headless simulator.
pub trait RenderSurface: Send + Sync {
    /// Current viewport width in CSS pixels, if measurable.
    fn viewport_width(&self) -> Option<f32>;

    /// Whether an accelerated graphics context can be created.
    fn probe_acceleration(&self) -> bool;

    fn add_listener(&self, kind: ListenerKind) -> ListenerId;

    fn remove_listener(&self, id: ListenerId);
}

/// Deregisters its listener on drop.
pub struct ListenerGuard {
    surface: Arc<dyn RenderSurface>,
    id: ListenerId,
    kind: ListenerKind,
}

impl ListenerGuard {
    pub fn acquire(surface: Arc<dyn RenderSurface>, kind: ListenerKind) -> Self {
        let id = surface.add_listener(kind);
        tracing::trace!(?kind, id = id.0, "listener registered");
        Self { surface, id, kind }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.surface.remove_listener(self.id);
        tracing::trace!(kind = ?self.kind, id = self.id.0, "listener removed");
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

/// The full set of registrations a mounted showcase needs.
#[derive(Debug)]
pub struct MountedListeners {
    guards: Vec<ListenerGuard>,
}

impl MountedListeners {
    pub const KINDS: [ListenerKind; 3] = [
        ListenerKind::Resize,
        ListenerKind::KeyDown,
        ListenerKind::AnimationFrame,
    ];

    pub fn acquire(surface: &Arc<dyn RenderSurface>) -> Self {
        let guards = Self::KINDS
            .iter()
            .map(|kind| ListenerGuard::acquire(Arc::clone(surface), *kind))
            .collect();
        Self { guards }
    }

    pub fn ids(&self) -> Vec<ListenerId> {
        self.guards.iter().map(ListenerGuard::id).collect()
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.guards.iter().any(|g| g.kind == kind)
    }
}

/// In-memory surface for the CLI simulator and tests.
#[derive(Debug)]
pub struct HeadlessSurface {
    width: Mutex<Option<f32>>,
    accelerated: bool,
    next_id: AtomicU64,
    listeners: Mutex<BTreeMap<ListenerId, ListenerKind>>,
}

impl HeadlessSurface {
    pub fn new(width: Option<f32>, accelerated: bool) -> Self {
        Self {
            width: Mutex::new(width),
            accelerated,
            next_id: AtomicU64::new(1),
            listeners: Mutex::new(BTreeMap::new()),
        }
    }

    /// Simulate a window resize. Callers forward the event to the engine.
    pub fn set_width(&self, width: Option<f32>) {
        *self.width.lock() = width;
    }

    pub fn active_listeners(&self) -> Vec<ListenerKind> {
        self.listeners.lock().values().copied().collect()
    }
}

impl RenderSurface for HeadlessSurface {
    fn viewport_width(&self) -> Option<f32> {
        *self.width.lock()
    }

    fn probe_acceleration(&self) -> bool {
        self.accelerated
    }

    fn add_listener(&self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().insert(id, kind);
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.lock().remove(&id);
    }
}
