//! Resize observation: one backend watch per element, many listeners.
//!
//! The registry multiplexes listener callbacks over a single underlying
//! watch per element and releases the watch once the last listener for that
//! element unsubscribes. Subscriptions deliver `(width, height)` pairs zero
//! or more times between `observe` and `dispose`, never after.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use rustc_hash::FxHashMap;

use crate::error::Result;

/// Opaque handle for an element attached by the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Platform half of resize observation.
pub trait ResizeBackend: Send + Sync {
    /// Starts watching an element. Invoked when the element gains its first
    /// listener. Must fail (not panic) on hosts without resize capability.
    fn watch(&self, element: ElementId) -> Result<()>;

    /// Stops watching an element. Invoked when its last listener leaves.
    fn unwatch(&self, element: ElementId);
}

/// Backend for render contexts without resize capability: every `watch`
/// fails with [`crate::Error::ResizeUnsupported`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessBackend;

impl ResizeBackend for HeadlessBackend {
    fn watch(&self, _element: ElementId) -> Result<()> {
        Err(crate::Error::ResizeUnsupported)
    }

    fn unwatch(&self, _element: ElementId) {}
}

pub type ResizeListener = Arc<dyn Fn(f64, f64) + Send + Sync>;

/// Fans backend observations out to per-element listener lists.
pub struct ResizeRegistry {
    backend: Arc<dyn ResizeBackend>,
    listeners: Mutex<FxHashMap<ElementId, Vec<(u64, ResizeListener)>>>,
    next_listener: AtomicU64,
}

impl ResizeRegistry {
    pub fn new(backend: Arc<dyn ResizeBackend>) -> Arc<Self> {
        Arc::new(Self {
            backend,
            listeners: Mutex::new(FxHashMap::default()),
            next_listener: AtomicU64::new(0),
        })
    }

    /// Subscribes `listener` to size observations for `element`.
    ///
    /// The first subscription for an element starts the backend watch; if
    /// that fails, the listener is rolled back and the error returned.
    pub fn observe(
        self: &Arc<Self>,
        element: ElementId,
        listener: ResizeListener,
    ) -> Result<ResizeSubscription> {
        let id = self.next_listener.fetch_add(1, Ordering::Relaxed);
        let first = {
            let mut listeners = match self.listeners.lock() {
                Ok(listeners) => listeners,
                Err(poisoned) => poisoned.into_inner(),
            };
            let entry = listeners.entry(element).or_default();
            let first = entry.is_empty();
            entry.push((id, listener));
            first
        };

        if first {
            if let Err(err) = self.backend.watch(element) {
                self.remove_listener(element, id, false);
                return Err(err);
            }
        }

        tracing::debug!(
            target: "squircle",
            element = element.0,
            listener = id,
            "resize listener subscribed"
        );
        Ok(ResizeSubscription {
            registry: Arc::downgrade(self),
            element,
            listener: id,
            disposed: AtomicBool::new(false),
        })
    }

    /// Routes one observation to the element's current listeners. Called by
    /// the backend whenever the platform reports a new content size.
    ///
    /// The listener snapshot is taken under the lock and delivery happens
    /// outside it, so a listener may dispose subscriptions reentrantly. A
    /// consumer disposed mid-flight additionally guards with its own
    /// disposed flag.
    pub fn deliver(&self, element: ElementId, width: f64, height: f64) {
        let snapshot: Vec<ResizeListener> = {
            let listeners = match self.listeners.lock() {
                Ok(listeners) => listeners,
                Err(poisoned) => poisoned.into_inner(),
            };
            listeners
                .get(&element)
                .map(|entry| entry.iter().map(|(_, f)| Arc::clone(f)).collect())
                .unwrap_or_default()
        };
        for listener in snapshot {
            listener(width, height);
        }
    }

    /// Number of elements with at least one live listener (diagnostic).
    pub fn observed_count(&self) -> usize {
        self.listeners
            .lock()
            .map(|listeners| listeners.len())
            .unwrap_or(0)
    }

    fn remove_listener(&self, element: ElementId, id: u64, release_watch: bool) {
        let emptied = {
            let mut listeners = match self.listeners.lock() {
                Ok(listeners) => listeners,
                Err(poisoned) => poisoned.into_inner(),
            };
            match listeners.get_mut(&element) {
                Some(entry) => {
                    entry.retain(|(lid, _)| *lid != id);
                    if entry.is_empty() {
                        listeners.remove(&element);
                        true
                    } else {
                        false
                    }
                }
                None => false,
            }
        };
        if emptied && release_watch {
            self.backend.unwatch(element);
            tracing::debug!(target: "squircle", element = element.0, "backend watch released");
        }
    }
}

/// Live resize subscription handle.
///
/// Disposing (explicitly or by drop) stops all future callbacks for this
/// subscription and releases the backend watch once no listeners remain for
/// the element.
#[derive(Debug)]
pub struct ResizeSubscription {
    registry: Weak<ResizeRegistry>,
    element: ElementId,
    listener: u64,
    disposed: AtomicBool,
}

impl ResizeSubscription {
    /// Idempotent.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.remove_listener(self.element, self.listener, true);
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.dispose();
    }
}
