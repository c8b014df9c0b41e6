mod color;
mod proj;
mod writer;

pub use color::Palette;
pub use proj::project;

use crate::config::MapStyle;
use crate::geom::Feature;
use writer::SvgDocument;

/// Render the complete SVG document text for a list of features.
/// Pure function of its inputs; the same features and style always produce
/// the same bytes.
pub fn render_document(features: &[Feature], style: &MapStyle) -> String {
    let mut doc = SvgDocument::new();
    doc.push_header(style);
    for feature in features {
        doc.push_feature(feature, style);
    }
    doc.push_footer();
    doc.into_string()
}
