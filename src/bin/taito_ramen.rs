use std::process::ExitCode;

use log::{error, info};
use tokyo_maps::geojson::point_features;
use tokyo_maps::overpass::{fetch_in_background, Clause, OverpassClient, OverpassQuery};
use tokyo_maps::types::{extract_pois, Coord};
use tokyo_maps::viewport::{Selection, Viewport};

// Around the centre of Taito ward.
const TAITO_CENTER: Coord = Coord::new(35.7147, 139.7891);

/// Ramen shops in Taito ward as markers, with a detail popup for the
/// selected shop and the marker layer emitted as GeoJSON.
fn main() -> ExitCode {
    env_logger::init();

    let query = OverpassQuery::new()
        .in_area("台東区")
        .clause(Clause::nodes().tag("amenity", "restaurant").tag("cuisine", "ramen"))
        .clause(Clause::nodes().tag("amenity", "fast_food").tag("cuisine", "ramen"))
        .clause(Clause::nodes().tag("shop", "noodle"));

    // The session's single fetch runs off the main thread.
    let handle = fetch_in_background(OverpassClient::default(), query);
    let viewport = Viewport::new(TAITO_CENTER, 14.0);

    let elements = match handle.wait() {
        Ok(elements) => elements,
        Err(e) => {
            error!("fetching ramen shops failed: {e}");
            eprintln!("Could not load ramen shop data: {e}");
            return ExitCode::FAILURE;
        }
    };

    let shops = extract_pois(&elements);
    eprintln!("{} ramen shops found", shops.len());

    // Clicking the first marker: centre on it and open its popup.
    if let Some(shop) = shops.first() {
        let viewport = viewport.moved(shop.coord);
        info!(
            "viewport centred on {:.4}, {:.4}",
            viewport.center.lat, viewport.center.long
        );
        let selection = Selection::default().select(shop.clone());
        if let Some(selected) = selection.current() {
            eprintln!("---\n{}", selected.popup_text());
        }
    }

    match serde_json::to_string_pretty(&point_features(&elements)) {
        Ok(markers) => println!("{markers}"),
        Err(e) => {
            error!("serializing marker layer failed: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
