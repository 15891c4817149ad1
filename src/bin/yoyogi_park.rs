use std::process::ExitCode;

use log::{error, info};
use tokyo_maps::geojson::build;
use tokyo_maps::overpass::{fetch_in_background, Clause, OverpassClient, OverpassQuery};
use tokyo_maps::types::Coord;
use tokyo_maps::viewport::Viewport;

// Approximate centre of Yoyogi park.
const YOYOGI_PARK_CENTER: Coord = Coord::new(35.6716, 139.6971);

/// Fetches the Yoyogi park outline and emits it as a GeoJSON
/// FeatureCollection for a fill/line layer.
fn main() -> ExitCode {
    env_logger::init();

    let query = OverpassQuery::new()
        .clause(Clause::relations().tag("name", "代々木公園"))
        .clause(Clause::ways().tag("name", "代々木公園"))
        .with_geometry();

    let handle = fetch_in_background(OverpassClient::default(), query);
    let viewport = Viewport::new(YOYOGI_PARK_CENTER, 14.0);
    info!(
        "viewing {:.4}, {:.4} @ zoom {}",
        viewport.center.lat, viewport.center.long, viewport.zoom
    );

    let elements = match handle.wait() {
        Ok(elements) => elements,
        Err(e) => {
            error!("fetching park data failed: {e}");
            eprintln!("Could not load park data: {e}");
            return ExitCode::FAILURE;
        }
    };

    let collection = build(&elements);
    eprintln!("{} park features", collection.features.len());

    match serde_json::to_string_pretty(&collection) {
        Ok(geojson) => println!("{geojson}"),
        Err(e) => {
            error!("serializing park layer failed: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
