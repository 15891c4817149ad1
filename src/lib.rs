//! Building blocks for small Tokyo map viewers: a typed Overpass client,
//! a converter from raw OSM elements to GeoJSON features, marker extraction
//! and the viewport/selection state the apps drive. Rendering itself is left
//! to whatever map layer consumes the output.

pub mod errors;
pub mod geojson;
pub mod overpass;
pub mod types;
pub mod viewport;

/// Tile style consumed by the rendering layer.
pub const MAP_STYLE_URL: &str = "https://tile.openstreetmap.jp/styles/osm-bright-ja/style.json";
