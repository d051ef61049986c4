//! Mask style production and memoization.

use std::sync::{Arc, Mutex, OnceLock};

use rustc_hash::FxHashMap;

use crate::fmt::push_number;
use crate::geom::{RadiusPair, Size};
use crate::svg::MaskDocument;

/// Default corner-smoothing ratio, derived from the iOS corner profile.
/// Recommended configuration range is 0–0.4; 0 degenerates to a standard
/// circular-arc rounded rectangle.
pub const DEFAULT_SMOOTHNESS: f64 = 0.0586 / 0.332;

/// Memoization table for computed mask style fragments.
///
/// Keys are the `(width, height, radius, smoothness)` quadruple formatted as
/// text. Values are exactly what a fresh computation would produce, so an
/// entry can never go stale and concurrent writers for one key always write
/// identical bytes. No eviction: entries live until [`StyleCache::clear`].
///
/// Construct an isolated instance per test, or share the process-wide one
/// from [`shared_cache`].
#[derive(Debug, Default)]
pub struct StyleCache {
    entries: Mutex<FxHashMap<String, Arc<str>>>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wipes all entries. Idempotent.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn get(&self, key: &str) -> Option<Arc<str>> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn insert(&self, key: String, value: Arc<str>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, value);
        }
    }
}

/// Process-wide cache shared by all elements that don't inject their own.
pub fn shared_cache() -> Arc<StyleCache> {
    static CACHE: OnceLock<Arc<StyleCache>> = OnceLock::new();
    Arc::clone(CACHE.get_or_init(|| Arc::new(StyleCache::new())))
}

/// Derives the effective radius pair for an element of `size`.
///
/// An explicit radius never exceeds half the shorter side; an absent radius
/// defaults to the maximum permissible, which is a full pill corner when the
/// element is square. The inner control radius is `final_radius *
/// smoothness`.
pub fn effective_radii(size: Size, radius: Option<f64>, smoothness: f64) -> RadiusPair {
    let max_radius = size.width.min(size.height) / 2.0;
    let final_radius = radius.unwrap_or(max_radius).min(max_radius);
    RadiusPair::normalized(final_radius * smoothness, final_radius)
}

/// Returns the memoized (or freshly computed) CSS mask style fragment for
/// the given element size and configuration.
///
/// The fragment covers `mask-image`, `mask-position`, and `mask-repeat`;
/// the caller concatenates it after any externally supplied style text.
/// Cache insertion on miss is the only side effect.
pub fn mask_style(cache: &StyleCache, size: Size, radius: Option<f64>, smoothness: f64) -> Arc<str> {
    let key = style_key(size, radius, smoothness);
    if let Some(hit) = cache.get(&key) {
        return hit;
    }

    // Concurrent misses for the same key recompute the same bytes; the lock
    // is never held across the computation.
    let radii = effective_radii(size, radius, smoothness);
    let uri = MaskDocument::new(size.width, size.height, radii.inner, radii.outer).to_data_uri();
    let fragment: Arc<str> = format!(
        "mask-image: url(\"{uri}\");\nmask-position: center;\nmask-repeat: no-repeat;"
    )
    .into();
    tracing::debug!(target: "squircle", key = %key, "mask style cache miss");
    cache.insert(key, Arc::clone(&fragment));
    fragment
}

/// Text form of the `(width, height, radius, smoothness)` quadruple. An
/// absent radius leaves its slot empty.
fn style_key(size: Size, radius: Option<f64>, smoothness: f64) -> String {
    let mut buf = ryu_js::Buffer::new();
    let mut key = String::new();
    push_number(&mut key, size.width, &mut buf);
    key.push('-');
    push_number(&mut key, size.height, &mut buf);
    key.push('-');
    if let Some(radius) = radius {
        push_number(&mut key, radius, &mut buf);
    }
    key.push('-');
    push_number(&mut key, smoothness, &mut buf);
    key
}
