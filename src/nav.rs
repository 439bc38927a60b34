//! Shared navigation state
//!
//! The URL layer of the original front-end reduced to its essentials: a
//! route, plus the single `info` query parameter that marks which card's
//! detail modal is open. The store is a single-writer, multi-reader
//! broadcast: publishing flags every live subscriber, last write wins, no
//! queuing. Subscriptions and the modal scroll lock are guard objects that
//! release on drop, so repeated open/close cycles cannot leak.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

// =============================================================================
// Routes
// =============================================================================

/// Top-level screens, mirroring the original site's routes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Home catalog page (`/`)
    #[default]
    Home,
    /// Movies catalog page (`/peliculas`)
    Movies,
    /// Watch view for one title (`/ver?contenido=<id>`)
    Watch { id: String },
}

/// Snapshot of the shared navigation state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub route: Route,
    /// Which card's modal is open, if any (`info` query parameter)
    pub info: Option<String>,
}

// =============================================================================
// Store
// =============================================================================

/// Broadcast store for [`NavState`]
///
/// Cards subscribe on mount and poll their dirty flag; every publish marks
/// all live subscribers. Dead subscriptions are pruned on publish.
#[derive(Debug, Default)]
pub struct NavStore {
    state: NavState,
    subscribers: Vec<Weak<AtomicBool>>,
}

impl NavStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn info(&self) -> Option<&str> {
        self.state.info.as_deref()
    }

    pub fn route(&self) -> &Route {
        &self.state.route
    }

    /// Register a new observer. The subscription starts dirty so the
    /// subscriber picks up the current state on its first poll.
    pub fn subscribe(&mut self) -> NavSubscription {
        let flag = Arc::new(AtomicBool::new(true));
        self.subscribers.push(Arc::downgrade(&flag));
        NavSubscription { dirty: flag }
    }

    /// Open a card's modal: sets the `info` parameter in place
    pub fn open_info(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.state.info.as_deref() != Some(id.as_str()) {
            self.state.info = Some(id);
            self.publish();
        }
    }

    /// Close whatever modal is open (the `router.push("/")` of the original)
    pub fn clear_info(&mut self) {
        if self.state.info.is_some() {
            self.state.info = None;
            self.publish();
        }
    }

    /// Navigate to a new route, dropping any open modal
    pub fn push(&mut self, route: Route) {
        if self.state.route != route || self.state.info.is_some() {
            self.state.route = route;
            self.state.info = None;
            self.publish();
        }
    }

    fn publish(&mut self) {
        self.subscribers.retain(|weak| match weak.upgrade() {
            Some(flag) => {
                flag.store(true, Ordering::SeqCst);
                true
            }
            None => false,
        });
    }

    /// Live subscriber count (dead ones are pruned lazily)
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }
}

/// Scoped observer handle; dropping it unsubscribes
#[derive(Debug)]
pub struct NavSubscription {
    dirty: Arc<AtomicBool>,
}

impl NavSubscription {
    /// Consume the dirty flag, returning whether a publish happened since
    /// the last poll
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

// =============================================================================
// Scroll Lock
// =============================================================================

/// Process-wide scroll lock, held while any modal is open
///
/// The counted equivalent of `document.body.style.overflow = "hidden"`:
/// carousel navigation is suppressed while the count is non-zero. Guards
/// release on drop, on every modal exit path.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    count: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            count: Arc::clone(&self.count),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.count.load(Ordering::SeqCst) > 0
    }
}

#[derive(Debug)]
pub struct ScrollLockGuard {
    count: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
