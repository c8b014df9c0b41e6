use anyhow::{anyhow, Context, Result};
use geo::{Coord, LineString};
use serde::Deserialize;
use serde_json::Value;

use crate::geom::{Feature, Geometry, Rings};

/// Top-level GeoJSON document; only the pieces this tool reads.
#[derive(Deserialize)]
struct RawDocument {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    properties: RawProperties,
    geometry: RawGeometry,
}

#[derive(Deserialize)]
struct RawProperties {
    #[serde(rename = "ADMIN")]
    admin: String,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// Renderable features parsed from a document, plus the raw input feature
/// count (features skipped for unsupported geometry types still count).
#[derive(Debug)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    pub input_count: usize,
}

/// Parse a GeoJSON FeatureCollection.
/// Features whose geometry type is neither Polygon nor MultiPolygon are
/// skipped without error; malformed coordinate nesting is an error.
pub fn read_features(text: &str) -> Result<FeatureCollection> {
    let doc: RawDocument = serde_json::from_str(text)
        .context("[read] Failed to parse GeoJSON document")?;

    let input_count = doc.features.len();
    let mut features = Vec::new();
    for feature in doc.features {
        let geometry = match feature.geometry.kind.as_str() {
            "Polygon" => Geometry::Polygon(parse_polygon_coords(&feature.geometry.coordinates)?),
            "MultiPolygon" => {
                Geometry::MultiPolygon(parse_multipolygon_coords(&feature.geometry.coordinates)?)
            }
            _ => continue,
        };
        features.push(Feature { name: feature.properties.admin, geometry });
    }

    Ok(FeatureCollection { features, input_count })
}

/// Parse Polygon coordinates: [ring, ring, ...].
fn parse_polygon_coords(value: &Value) -> Result<Rings> {
    let rings = value.as_array()
        .ok_or_else(|| anyhow!("[read] Polygon coordinates must be an array of rings"))?;

    rings.iter().map(parse_ring_coords).collect()
}

/// Parse MultiPolygon coordinates: [polygon, polygon, ...].
fn parse_multipolygon_coords(value: &Value) -> Result<Vec<Rings>> {
    let polygons = value.as_array()
        .ok_or_else(|| anyhow!("[read] MultiPolygon coordinates must be an array of polygons"))?;

    polygons.iter().map(parse_polygon_coords).collect()
}

/// Parse one ring: [[lon, lat], ...]. Rings are taken as-is, never closed
/// implicitly, so the rendered output reflects the input byte for byte.
fn parse_ring_coords(value: &Value) -> Result<LineString<f64>> {
    let pairs = value.as_array()
        .ok_or_else(|| anyhow!("[read] Ring must be an array of coordinate pairs"))?;

    let mut points = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let pair = pair.as_array()
            .ok_or_else(|| anyhow!("[read] Coordinate pair must be an array"))?;
        let lon = pair.first().and_then(Value::as_f64)
            .ok_or_else(|| anyhow!("[read] Invalid coordinate: longitude must be a number"))?;
        let lat = pair.get(1).and_then(Value::as_f64)
            .ok_or_else(|| anyhow!("[read] Invalid coordinate: latitude must be a number"))?;
        points.push(Coord { x: lon, y: lat });
    }

    Ok(LineString(points))
}
