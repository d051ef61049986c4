//! The squircle element: configuration, dimension state, and lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use squircle_core::{DEFAULT_SMOOTHNESS, Size, StyleCache, mask_style, shared_cache, size};

use crate::resize::{ElementId, ResizeRegistry, ResizeSubscription};

/// Host-bound element parameters.
///
/// All fields are optional; an absent `radius` falls back to half the
/// shorter side of the element and an absent `smoothness` to
/// [`DEFAULT_SMOOTHNESS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SquircleConfig {
    /// CSS class passed through to the host element.
    pub class: Option<String>,
    /// Inline style text the mask fragment is appended to.
    pub style: Option<String>,
    pub radius: Option<f64>,
    pub smoothness: Option<f64>,
}

type InvalidateFn = Arc<dyn Fn() + Send + Sync>;

/// State shared with the resize listener closure.
struct ElementState {
    size: Mutex<Size>,
    disposed: AtomicBool,
    invalidate: Mutex<Option<InvalidateFn>>,
}

impl ElementState {
    /// Resize callback target. Observations arriving after disposal has
    /// begun are dropped; the host is re-rendered only when the stored
    /// dimensions actually change.
    fn resized(&self, width: f64, height: f64) {
        if self.disposed.load(Ordering::Acquire) {
            return;
        }
        let changed = {
            let mut current = match self.size.lock() {
                Ok(current) => current,
                Err(poisoned) => poisoned.into_inner(),
            };
            if current.width != width || current.height != height {
                *current = size(width, height);
                true
            } else {
                false
            }
        };
        if changed {
            let invalidate = self
                .invalidate
                .lock()
                .ok()
                .and_then(|slot| slot.as_ref().map(Arc::clone));
            if let Some(invalidate) = invalidate {
                invalidate();
            }
        }
    }
}

/// A rectangular element whose corners are masked to a squircle.
///
/// Lifecycle: construct with the host-bound config, [`attach`] once after
/// the first render, read [`style`] on every render, [`dispose`] (or drop)
/// on teardown.
///
/// [`attach`]: SquircleElement::attach
/// [`style`]: SquircleElement::style
/// [`dispose`]: SquircleElement::dispose
pub struct SquircleElement {
    config: SquircleConfig,
    cache: Arc<StyleCache>,
    state: Arc<ElementState>,
    subscription: Option<ResizeSubscription>,
}

impl SquircleElement {
    /// Uses the process-wide style cache.
    pub fn new(config: SquircleConfig) -> Self {
        Self::with_cache(config, shared_cache())
    }

    /// Uses an injected cache so tests can isolate memoization state.
    pub fn with_cache(config: SquircleConfig, cache: Arc<StyleCache>) -> Self {
        Self {
            config,
            cache,
            state: Arc::new(ElementState {
                size: Mutex::new(size(0.0, 0.0)),
                disposed: AtomicBool::new(false),
                invalidate: Mutex::new(None),
            }),
            subscription: None,
        }
    }

    /// Registers the host's re-render trigger. Invoked whenever a resize
    /// observation changes the stored dimensions.
    pub fn on_invalidate(&self, invalidate: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut slot) = self.state.invalidate.lock() {
            *slot = Some(Arc::new(invalidate));
        }
    }

    /// Run once after the first render: subscribes to resize observations
    /// for the attached element. A host without resize support leaves the
    /// element rendering with its last-known (initially zero) dimensions.
    /// No-op once disposed or already attached.
    pub fn attach(&mut self, registry: &Arc<ResizeRegistry>, element: ElementId) {
        if self.state.disposed.load(Ordering::Acquire) || self.subscription.is_some() {
            return;
        }
        let state = Arc::clone(&self.state);
        match registry.observe(element, Arc::new(move |w, h| state.resized(w, h))) {
            Ok(subscription) => self.subscription = Some(subscription),
            Err(err) => {
                tracing::debug!(
                    target: "squircle",
                    element = element.0,
                    error = %err,
                    "resize observation unavailable; keeping last-known dimensions"
                );
            }
        }
    }

    pub fn config(&self) -> &SquircleConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SquircleConfig) {
        self.config = config;
    }

    /// Last observed dimensions; zero before the first observation.
    pub fn size(&self) -> Size {
        self.state
            .size
            .lock()
            .map(|current| *current)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    /// Composed inline style: the configured style text first, the mask
    /// fragment for the current dimensions after.
    pub fn style(&self) -> String {
        let current = self.size();
        let fragment = mask_style(
            &self.cache,
            current,
            self.config.radius,
            self.config.smoothness.unwrap_or(DEFAULT_SMOOTHNESS),
        );
        match &self.config.style {
            Some(style) => format!("{style}{fragment}"),
            None => fragment.to_string(),
        }
    }

    /// Number of memoized style fragments in this element's cache.
    pub fn cache_entry_count(&self) -> usize {
        self.cache.len()
    }

    /// Wipes this element's style cache. Idempotent.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.state.disposed.load(Ordering::Acquire)
    }

    /// Idempotent teardown: stops observation delivery first, then wipes the
    /// style cache and releases the resize subscription.
    pub fn dispose(&mut self) {
        if self.state.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.cache.clear();
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
    }
}

impl Drop for SquircleElement {
    fn drop(&mut self) {
        self.dispose();
    }
}
