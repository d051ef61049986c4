//! Minimal SVG mask document and `data:` URI encoding.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::fmt::push_number;
use crate::geom::{RadiusPair, Size, size};
use crate::path::squircle_path;

/// Characters that are unsafe or reserved inside the unencoded segment of a
/// `data:` URI. CR/LF are covered by the control-character base set; no
/// other control character can occur in the serialized document. Everything
/// else, spaces and single quotes included, stays literal for compactness.
const DATA_URI_UNSAFE: &AsciiSet = &CONTROLS
    .add(b'%')
    .add(b'#')
    .add(b'(')
    .add(b')')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// An SVG document that clips a filled rectangle of the element's size to a
/// squircle outline. Pure value; equal inputs serialize to identical bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskDocument {
    size: Size,
    radii: RadiusPair,
}

impl MaskDocument {
    /// The radius pair is normalized on construction, see
    /// [`RadiusPair::normalized`].
    pub fn new(width: f64, height: f64, r1: f64, r2: f64) -> Self {
        Self {
            size: size(width, height),
            radii: RadiusPair::normalized(r1, r2),
        }
    }

    /// Deterministic `clipPath` id, unique per distinct shape within one
    /// document. Collisions across separate documents are harmless since
    /// every data URI is self-contained.
    pub fn clip_id(&self) -> String {
        let mut buf = ryu_js::Buffer::new();
        let mut id = String::from("squircle");
        for v in [
            self.size.width,
            self.size.height,
            self.radii.inner,
            self.radii.outer,
        ] {
            id.push('-');
            push_number(&mut id, v, &mut buf);
        }
        id
    }

    /// Serializes the document on a single line with single-quoted
    /// attributes. Double quotes never appear, so the result can sit inside
    /// the unencoded segment of a `data:` URI.
    pub fn to_svg(&self) -> String {
        let w = self.size.width;
        let h = self.size.height;
        let id = self.clip_id();
        let d = squircle_path(self.size, self.radii).to_svg();

        let mut buf = ryu_js::Buffer::new();
        let mut out = String::with_capacity(d.len() + id.len() * 2 + 192);
        out.push_str("<svg xmlns='http://www.w3.org/2000/svg' width='");
        push_number(&mut out, w, &mut buf);
        out.push_str("' height='");
        push_number(&mut out, h, &mut buf);
        out.push_str("' viewBox='0 0 ");
        push_number(&mut out, w, &mut buf);
        out.push(' ');
        push_number(&mut out, h, &mut buf);
        out.push_str("'><defs><clipPath id='");
        out.push_str(&id);
        out.push_str("'><path fill='#000' d='");
        out.push_str(&d);
        out.push_str("'/></clipPath></defs><g clip-path='url(#");
        out.push_str(&id);
        out.push_str(")'><rect width='");
        push_number(&mut out, w, &mut buf);
        out.push_str("' height='");
        push_number(&mut out, h, &mut buf);
        out.push_str("' fill='#000'/></g></svg>");
        out
    }

    /// Percent-escapes the serialized document and prefixes the media type.
    pub fn to_data_uri(&self) -> String {
        let svg = self.to_svg();
        let mut out = String::with_capacity(svg.len() + svg.len() / 2 + 24);
        out.push_str("data:image/svg+xml,");
        out.extend(utf8_percent_encode(&svg, DATA_URI_UNSAFE));
        out
    }
}

/// Normalizes the radius pair and encodes the mask document in one call.
/// Total for any numeric input.
pub fn mask_data_uri(width: f64, height: f64, r1: f64, r2: f64) -> String {
    MaskDocument::new(width, height, r1, r2).to_data_uri()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_is_single_line_and_single_quoted() {
        let svg = MaskDocument::new(100.0, 100.0, 8.825, 50.0).to_svg();
        assert!(!svg.contains('\n'));
        assert!(!svg.contains('"'));
        assert!(svg.starts_with("<svg xmlns='http://www.w3.org/2000/svg'"));
        assert!(svg.contains("clip-path='url(#squircle-100-100-8.825-50)'"));
    }

    #[test]
    fn clip_id_uses_the_normalized_pair() {
        let swapped = MaskDocument::new(100.0, 100.0, 50.0, 8.825);
        assert_eq!(swapped.clip_id(), "squircle-100-100-8.825-50");
    }

    #[test]
    fn data_uri_has_the_required_prefix() {
        let uri = mask_data_uri(100.0, 100.0, 10.0, 50.0);
        assert!(uri.starts_with("data:image/svg+xml,"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let uri = mask_data_uri(100.0, 100.0, 10.0, 50.0);
        let payload = &uri["data:image/svg+xml,".len()..];
        for forbidden in ['<', '>', '#', '(', ')', '"', '\n'] {
            assert!(
                !payload.contains(forbidden),
                "unescaped {forbidden:?} in {payload}"
            );
        }
        assert!(payload.starts_with("%3Csvg"));
        assert!(payload.contains("fill='%23000'"));
        assert!(payload.contains("url%28%23"));
    }

    #[test]
    fn spaces_and_single_quotes_stay_literal() {
        let uri = mask_data_uri(100.0, 100.0, 10.0, 50.0);
        assert!(uri.contains("viewBox='0 0 100 100'"));
        assert!(uri.contains("M 0,50"));
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(
            mask_data_uri(320.0, 200.0, 7.0, 40.0),
            mask_data_uri(320.0, 200.0, 7.0, 40.0)
        );
    }

    #[test]
    fn degenerate_input_is_not_rejected() {
        let uri = mask_data_uri(-5.0, -5.0, -1.0, -1.0);
        assert!(uri.starts_with("data:image/svg+xml,"));
        let uri = mask_data_uri(0.0, 0.0, 0.0, 0.0);
        assert!(uri.contains("squircle-0-0-0-0"));
    }
}
