use crate::io::Palette;

/// Geographic bounding box used as the domain of the projection.
/// Invariant: max > min on both axes, otherwise the projection divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    /// Yucatan Peninsula region (Mexico, Guatemala, Belize).
    pub const YUCATAN: GeoBounds = GeoBounds {
        min_lon: -93.0,
        min_lat: 14.0,
        max_lon: -86.0,
        max_lat: 21.5,
    };

    #[inline] pub fn lon_span(&self) -> f64 { self.max_lon - self.min_lon }

    #[inline] pub fn lat_span(&self) -> f64 { self.max_lat - self.min_lat }
}

impl Default for GeoBounds {
    fn default() -> Self { Self::YUCATAN }
}

/// Target pixel canvas. Both dimensions must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: 1200.0, height: 800.0 }
    }
}

/// Everything the renderer needs besides the features themselves.
/// The defaults reproduce the fixed constants of the original map; tests can
/// substitute alternate bounds or canvas without touching the transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapStyle {
    pub bounds: GeoBounds,
    pub canvas: Canvas,
    pub palette: Palette,
}
