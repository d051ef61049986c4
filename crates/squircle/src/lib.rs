#![forbid(unsafe_code)]

//! `squircle` renders iOS-style continuous corners as CSS mask data URIs.
//!
//! The core surface (re-exported here) is pure string/geometry generation:
//! build the squircle outline, wrap it in a minimal SVG document, encode it
//! as a `data:` URI, and memoize the resulting style fragment by its inputs.
//!
//! # Features
//!
//! - `element`: enable the component glue (`squircle::element`) — host-bound
//!   configuration, resize observation, and the element lifecycle.

pub use squircle_core::*;

#[cfg(feature = "element")]
pub mod element {
    pub use squircle_element::{
        ElementId, Error, HeadlessBackend, ResizeBackend, ResizeRegistry, ResizeSubscription,
        Result, SquircleConfig, SquircleElement,
    };
}
