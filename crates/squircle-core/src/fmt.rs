//! Locale-invariant number stringification for path and SVG attributes.

/// Appends `v` the way JS `Number#toString()` would: shortest round-trippable
/// decimal with a `.` separator, never a locale-dependent one.
///
/// Non-finite values render as `0` and `-0` collapses to `0`, so degenerate
/// input still produces a parseable attribute.
pub(crate) fn push_number(out: &mut String, v: f64, buf: &mut ryu_js::Buffer) {
    if !v.is_finite() {
        out.push('0');
        return;
    }
    let v = if v == 0.0 { 0.0 } else { v };
    out.push_str(buf.format_finite(v));
}
