#![forbid(unsafe_code)]

//! Continuous-corner ("squircle") mask generation.
//!
//! A squircle corner transitions from a shallow-curvature lead-in into a
//! rounded apex instead of jumping straight into a circular arc, which is
//! what gives iOS-style corners their smooth silhouette. This crate builds
//! that outline as an SVG path, wraps it in a minimal SVG document, and
//! encodes the document as a `data:` URI usable directly as a CSS mask
//! source.
//!
//! Design goals:
//! - deterministic, byte-stable output (equal inputs always produce equal
//!   strings, so memoizing by input is safe)
//! - total geometry: degenerate numeric input yields degenerate shapes,
//!   never errors
//! - locale-invariant numeric serialization (the output feeds machine-parsed
//!   grammars)

mod fmt;
pub mod geom;
pub mod mask;
pub mod path;
pub mod svg;

pub use geom::{Point, RadiusPair, Size, point, size};
pub use mask::{DEFAULT_SMOOTHNESS, StyleCache, effective_radii, mask_style, shared_cache};
pub use path::{PathData, PathSegment, squircle_path, squircle_path_svg};
pub use svg::{MaskDocument, mask_data_uri};
