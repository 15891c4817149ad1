use tokyo_maps::types::Coord;
use tokyo_maps::viewport::Viewport;
use tokyo_maps::MAP_STYLE_URL;

// Around Tokyo station.
const TOKYO_CENTER: Coord = Coord::new(35.6812, 139.7671);

/// Plain viewer: no data layer, just the initial map composition.
fn main() {
    env_logger::init();

    let viewport = Viewport::new(TOKYO_CENTER, 10.0);
    println!("map style: {MAP_STYLE_URL}");
    println!(
        "initial view: {:.4}, {:.4} @ zoom {}",
        viewport.center.lat, viewport.center.long, viewport.zoom
    );
}
