#![doc = "GeoJSON to SVG map converter"]
mod config;
mod geom;
mod io;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use config::{Canvas, GeoBounds, MapStyle};

#[doc(inline)]
pub use geom::{Feature, Geometry, Rings};

#[doc(inline)]
pub use io::{project, read_features, render_document, FeatureCollection, Palette};
