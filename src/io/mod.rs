mod geojson;
mod svg;

pub use geojson::{read_features, FeatureCollection};
pub use svg::{project, render_document, Palette};
