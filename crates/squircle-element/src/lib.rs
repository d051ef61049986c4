#![forbid(unsafe_code)]

//! Component glue around `squircle-core`: host-bound configuration, resize
//! observation, and the element lifecycle that keeps a CSS mask in sync with
//! an element's rendered size.
//!
//! The host framework and the platform resize capability stay behind small
//! interfaces ([`ResizeBackend`], the invalidate callback); everything here
//! is runtime-agnostic and synchronous.

pub mod element;
pub mod error;
pub mod resize;

pub use element::{SquircleConfig, SquircleElement};
pub use error::{Error, Result};
pub use resize::{
    ElementId, HeadlessBackend, ResizeBackend, ResizeListener, ResizeRegistry, ResizeSubscription,
};
