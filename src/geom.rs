use geo::LineString;

/// All rings of one polygon, outer ring first.
///
/// Rings are kept exactly as read: no implicit closing, and holes are not
/// distinguished from outer rings (the renderer treats every ring as an
/// independent closed subpath).
pub type Rings = Vec<LineString<f64>>;

/// A renderable GeoJSON geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Rings),
    MultiPolygon(Vec<Rings>),
}

/// One named country boundary from the input document.
/// Constructed once from the input, consumed once to produce one path element.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub geometry: Geometry,
}
