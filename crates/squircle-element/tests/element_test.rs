use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use squircle_core::StyleCache;
use squircle_element::{
    ElementId, HeadlessBackend, ResizeBackend, ResizeRegistry, Result, SquircleConfig,
    SquircleElement,
};

#[derive(Default)]
struct AlwaysOnBackend;

impl ResizeBackend for AlwaysOnBackend {
    fn watch(&self, _element: ElementId) -> Result<()> {
        Ok(())
    }

    fn unwatch(&self, _element: ElementId) {}
}

fn registry() -> Arc<ResizeRegistry> {
    ResizeRegistry::new(Arc::new(AlwaysOnBackend))
}

#[test]
fn observation_updates_dimensions_and_invalidates_once_per_change() {
    let registry = registry();
    let element = ElementId(1);
    let mut el = SquircleElement::with_cache(SquircleConfig::default(), Arc::new(StyleCache::new()));

    let renders = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&renders);
    el.on_invalidate(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    el.attach(&registry, element);

    registry.deliver(element, 120.0, 80.0);
    assert_eq!(el.size().width, 120.0);
    assert_eq!(el.size().height, 80.0);
    assert_eq!(renders.load(Ordering::SeqCst), 1);

    // Same dimensions again: no re-render.
    registry.deliver(element, 120.0, 80.0);
    assert_eq!(renders.load(Ordering::SeqCst), 1);

    registry.deliver(element, 120.0, 90.0);
    assert_eq!(renders.load(Ordering::SeqCst), 2);
}

#[test]
fn style_appends_the_mask_fragment_to_the_configured_style() {
    let config = SquircleConfig {
        style: Some("color: red;".into()),
        radius: Some(20.0),
        smoothness: Some(0.2),
        ..SquircleConfig::default()
    };
    let mut el = SquircleElement::with_cache(config, Arc::new(StyleCache::new()));
    let registry = registry();
    let element = ElementId(2);
    el.attach(&registry, element);
    registry.deliver(element, 100.0, 100.0);

    let style = el.style();
    assert!(style.starts_with("color: red;mask-image: url(\"data:image/svg+xml,"));
    assert!(style.ends_with("mask-repeat: no-repeat;"));
}

#[test]
fn repeated_renders_reuse_the_cached_fragment() {
    let cache = Arc::new(StyleCache::new());
    let mut el = SquircleElement::with_cache(SquircleConfig::default(), Arc::clone(&cache));
    let registry = registry();
    let element = ElementId(3);
    el.attach(&registry, element);
    registry.deliver(element, 64.0, 64.0);

    el.style();
    el.style();
    assert_eq!(el.cache_entry_count(), 1);

    // A smoothness change keys a new entry.
    el.set_config(SquircleConfig {
        smoothness: Some(0.2),
        ..SquircleConfig::default()
    });
    el.style();
    assert_eq!(el.cache_entry_count(), 2);

    el.clear_cache();
    assert_eq!(el.cache_entry_count(), 0);
    el.clear_cache();
    assert_eq!(el.cache_entry_count(), 0);
}

#[test]
fn dispose_stops_delivery_and_wipes_the_cache() {
    let cache = Arc::new(StyleCache::new());
    let mut el = SquircleElement::with_cache(SquircleConfig::default(), Arc::clone(&cache));
    let registry = registry();
    let element = ElementId(4);

    let renders = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&renders);
    el.on_invalidate(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    el.attach(&registry, element);
    registry.deliver(element, 50.0, 50.0);
    el.style();
    assert_eq!(cache.len(), 1);

    el.dispose();
    assert!(el.is_disposed());
    assert_eq!(cache.len(), 0);
    assert_eq!(registry.observed_count(), 0);

    registry.deliver(element, 90.0, 90.0);
    assert_eq!(el.size().width, 50.0);
    assert_eq!(renders.load(Ordering::SeqCst), 1);

    // Idempotent.
    el.dispose();
    assert!(el.is_disposed());
}

#[test]
fn headless_host_leaves_the_element_usable() {
    let registry = ResizeRegistry::new(Arc::new(HeadlessBackend));
    let mut el = SquircleElement::with_cache(SquircleConfig::default(), Arc::new(StyleCache::new()));
    el.attach(&registry, ElementId(5));

    // No subscription, default dimensions; the style is still produced.
    assert_eq!(el.size().width, 0.0);
    assert!(el.style().starts_with("mask-image: url(\"data:image/svg+xml,"));
}

#[test]
fn attach_after_dispose_is_a_no_op() {
    let registry = registry();
    let mut el = SquircleElement::with_cache(SquircleConfig::default(), Arc::new(StyleCache::new()));
    el.dispose();
    el.attach(&registry, ElementId(6));
    assert_eq!(registry.observed_count(), 0);
}

#[test]
fn dropping_an_element_releases_its_subscription() {
    let registry = registry();
    {
        let mut el =
            SquircleElement::with_cache(SquircleConfig::default(), Arc::new(StyleCache::new()));
        el.attach(&registry, ElementId(7));
        assert_eq!(registry.observed_count(), 1);
    }
    assert_eq!(registry.observed_count(), 0);
}
