use geo::{Coord, LineString};

use crate::config::{Canvas, GeoBounds};
use crate::geom::{Geometry, Rings};

/// Project a lon/lat coordinate onto the pixel canvas.
///
/// The Y axis flips: latitude grows northward while SVG y grows downward.
/// No clamping; coordinates outside the bounds project outside the canvas.
pub fn project(coord: &Coord<f64>, bounds: &GeoBounds, canvas: &Canvas) -> (f64, f64) {
    let x = (coord.x - bounds.min_lon) / bounds.lon_span() * canvas.width;
    let y = canvas.height - (coord.y - bounds.min_lat) / bounds.lat_span() * canvas.height;
    (x, y)
}

/// Render a ring as a closed SVG subpath: "M x,y L x,y ... Z", coordinates
/// formatted with two-decimal precision.
///
/// An empty ring contributes nothing. A one-point ring degenerates to
/// "M x,y L  Z" (empty joined list between L and Z); that form is expected.
pub(crate) fn ring_to_path(ring: &LineString<f64>, bounds: &GeoBounds, canvas: &Canvas) -> Option<String> {
    if ring.0.is_empty() {
        return None;
    }

    let points = ring.0.iter()
        .map(|coord| {
            let (x, y) = project(coord, bounds, canvas);
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>();

    Some(format!("M {} L {} Z", points[0], points[1..].join(" ")))
}

/// Render every ring of a polygon independently and join with single spaces.
/// Holes get no special treatment; each ring becomes its own filled closed
/// subpath, exactly like the outer ring.
pub(crate) fn polygon_to_path(rings: &Rings, bounds: &GeoBounds, canvas: &Canvas) -> String {
    rings.iter()
        .filter_map(|ring| ring_to_path(ring, bounds, canvas))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a geometry as SVG path data.
pub(crate) fn geometry_to_path(geometry: &Geometry, bounds: &GeoBounds, canvas: &Canvas) -> String {
    match geometry {
        Geometry::Polygon(rings) => polygon_to_path(rings, bounds, canvas),
        Geometry::MultiPolygon(polygons) => polygons.iter()
            .map(|rings| polygon_to_path(rings, bounds, canvas))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> GeoBounds {
        GeoBounds { min_lon: -93.0, min_lat: 14.0, max_lon: -86.0, max_lat: 21.5 }
    }

    fn canvas() -> Canvas {
        Canvas { width: 1200.0, height: 800.0 }
    }

    fn ring(coords: &[(f64, f64)]) -> LineString<f64> {
        LineString(coords.iter().map(|&(x, y)| Coord { x, y }).collect())
    }

    #[test]
    fn bounding_box_corners_project_to_canvas_corners() {
        let (b, c) = (bounds(), canvas());
        assert_eq!(project(&Coord { x: -93.0, y: 14.0 }, &b, &c), (0.0, 800.0));
        assert_eq!(project(&Coord { x: -86.0, y: 21.5 }, &b, &c), (1200.0, 0.0));
        assert_eq!(project(&Coord { x: -93.0, y: 21.5 }, &b, &c), (0.0, 0.0));
        assert_eq!(project(&Coord { x: -86.0, y: 14.0 }, &b, &c), (1200.0, 800.0));
    }

    #[test]
    fn centroid_projects_to_canvas_center() {
        let (b, c) = (bounds(), canvas());
        let center = Coord { x: (b.min_lon + b.max_lon) / 2.0, y: (b.min_lat + b.max_lat) / 2.0 };
        assert_eq!(project(&center, &b, &c), (600.0, 400.0));
    }

    #[test]
    fn out_of_bounds_coordinates_are_not_clamped() {
        let (b, c) = (bounds(), canvas());
        let (x, y) = project(&Coord { x: -94.0, y: 22.0 }, &b, &c);
        assert!(x < 0.0);
        assert!(y < 0.0);
    }

    #[test]
    fn path_coordinates_use_two_decimal_precision() {
        let re = regex::Regex::new(r"^-?\d+\.\d{2},-?\d+\.\d{2}$").unwrap();
        let fragment = ring_to_path(
            &ring(&[(-92.123456, 20.987654), (-95.0, 13.5), (-86.000001, 21.499999)]),
            &bounds(),
            &canvas(),
        )
        .unwrap();

        let pairs: Vec<&str> = fragment
            .split_whitespace()
            .filter(|token| !matches!(*token, "M" | "L" | "Z"))
            .collect();
        assert_eq!(pairs.len(), 3);
        for pair in pairs {
            assert!(re.is_match(pair), "bad coordinate pair: {pair}");
        }
    }

    #[test]
    fn rings_render_as_closed_subpaths() {
        let fragment = ring_to_path(
            &ring(&[(-93.0, 21.5), (-86.0, 21.5), (-86.0, 14.0)]),
            &bounds(),
            &canvas(),
        )
        .unwrap();
        assert_eq!(fragment, "M 0.00,0.00 L 1200.00,0.00 1200.00,800.00 Z");
    }

    #[test]
    fn one_point_ring_degenerates_to_empty_line_list() {
        let fragment = ring_to_path(&ring(&[(-93.0, 14.0)]), &bounds(), &canvas()).unwrap();
        assert_eq!(fragment, "M 0.00,800.00 L  Z");
    }

    #[test]
    fn empty_ring_contributes_nothing() {
        assert_eq!(ring_to_path(&ring(&[]), &bounds(), &canvas()), None);
        let path = polygon_to_path(
            &vec![ring(&[]), ring(&[(-93.0, 21.5), (-86.0, 21.5)])],
            &bounds(),
            &canvas(),
        );
        assert_eq!(path, "M 0.00,0.00 L 1200.00,0.00 Z");
    }

    #[test]
    fn holes_render_like_outer_rings() {
        let rings = vec![
            ring(&[(-93.0, 21.5), (-86.0, 21.5), (-86.0, 14.0)]),
            ring(&[(-93.0, 14.0), (-86.0, 14.0)]),
        ];
        let path = polygon_to_path(&rings, &bounds(), &canvas());
        assert_eq!(
            path,
            "M 0.00,0.00 L 1200.00,0.00 1200.00,800.00 Z M 0.00,800.00 L 1200.00,800.00 Z"
        );
    }

    #[test]
    fn multipolygon_renders_one_fragment_per_polygon() {
        let polygon = vec![ring(&[(-93.0, 21.5), (-86.0, 21.5), (-86.0, 14.0)])];
        let geometry = Geometry::MultiPolygon(vec![polygon.clone(), polygon.clone(), polygon]);

        let path = geometry_to_path(&geometry, &bounds(), &canvas());
        assert_eq!(path.matches('M').count(), 3);
        assert_eq!(path.matches('Z').count(), 3);
        for fragment in path.split("Z ") {
            assert!(fragment.trim_start().starts_with('M'));
        }
    }
}
