use crate::config::MapStyle;
use crate::geom::Feature;

use super::proj::geometry_to_path;

/// Assembles the SVG document line by line. Nothing touches disk here; the
/// caller writes the finished string once the whole document is complete.
pub(crate) struct SvgDocument {
    lines: Vec<String>,
}

impl SvgDocument {
    pub(crate) fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// XML declaration, opening <svg> tag, title/desc, and background rect.
    pub(crate) fn push_header(&mut self, style: &MapStyle) {
        let width = style.canvas.width;
        let height = style.canvas.height;

        self.lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
        self.lines.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ));
        self.lines.push("  <title>Yucatan Peninsula - Mexico, Guatemala, Belize</title>".to_string());
        self.lines.push("  <desc>Interactive map of tourist destinations</desc>".to_string());
        self.lines.push(String::new());
        self.lines.push("  <!-- Background -->".to_string());
        self.lines.push(r##"  <rect width="100%" height="100%" fill="#e6f3ff"/>"##.to_string());
        self.lines.push(String::new());
        self.lines.push("  <!-- Countries -->".to_string());
    }

    /// One <path> element per feature: id is the lowercased country name,
    /// d is the projected path data, fill comes from the palette. No
    /// uniqueness or non-empty check on the name; that is the caller's input.
    pub(crate) fn push_feature(&mut self, feature: &Feature, style: &MapStyle) {
        let path = geometry_to_path(&feature.geometry, &style.bounds, &style.canvas);
        let fill = style.palette.fill_for(&feature.name);

        self.lines.push(format!(
            r#"  <path id="{id}" class="country" d="{path}" "#,
            id = feature.name.to_lowercase(),
        ));
        self.lines.push(format!(
            r##"        fill="{fill}" stroke="#333" stroke-width="1.5" opacity="0.8"/>"##
        ));
    }

    /// Empty marker group (populated later by the embedding page) and the
    /// closing </svg> tag.
    pub(crate) fn push_footer(&mut self) {
        self.lines.push(String::new());
        self.lines.push("  <!-- Marker group - to be populated by JavaScript -->".to_string());
        self.lines.push(r#"  <g id="markers"></g>"#.to_string());
        self.lines.push("</svg>".to_string());
    }

    /// Join into the final document text. Lines are newline-separated with no
    /// trailing newline.
    pub(crate) fn into_string(self) -> String {
        self.lines.join("\n")
    }
}
