//! End-to-end decode-and-convert over canned Overpass response bodies.

use geojson::Value;
use tokyo_maps::geojson::{build, point_features};
use tokyo_maps::types::{extract_pois, parse_elements};

// Trimmed response for a park outline query with `>; out skel qt;`
// recursion: the relation and way come first, the member nodes last.
const PARK_RESPONSE: &str = r#"{
  "version": 0.6,
  "generator": "Overpass API 0.7.62",
  "osm3s": {
    "timestamp_osm_base": "2026-08-30T00:00:00Z",
    "copyright": "The data included in this document is from www.openstreetmap.org."
  },
  "elements": [
    {"type": "relation", "id": 5000, "tags": {"name": "代々木公園", "leisure": "park"},
     "members": [{"type": "way", "ref": 900, "role": "outer"}]},
    {"type": "way", "id": 900, "nodes": [1, 2, 3, 4, 1],
     "tags": {"name": "代々木公園", "leisure": "park"}},
    {"type": "way", "id": 901, "nodes": [2, 5]},
    {"type": "node", "id": 1, "lat": 35.6700, "lon": 139.6940},
    {"type": "node", "id": 2, "lat": 35.6700, "lon": 139.7000},
    {"type": "node", "id": 3, "lat": 35.6740, "lon": 139.7000},
    {"type": "node", "id": 4, "lat": 35.6740, "lon": 139.6940},
    {"type": "node", "id": 5, "lat": 35.6705, "lon": 139.7010}
  ]
}"#;

const RAMEN_RESPONSE: &str = r#"{
  "version": 0.6,
  "generator": "Overpass API 0.7.62",
  "elements": [
    {"type": "node", "id": 21, "lat": 35.7120, "lon": 139.7800,
     "tags": {"name": "青島食堂", "amenity": "restaurant", "cuisine": "ramen",
              "addr:street": "浅草通り"}},
    {"type": "node", "id": 22, "lat": 35.7160, "lon": 139.7930,
     "tags": {"shop": "noodle"}}
  ]
}"#;

#[test]
fn park_response_converts_to_polygon_and_linestring() {
    let elements = parse_elements(PARK_RESPONSE).unwrap();
    assert_eq!(elements.len(), 8);

    let collection = build(&elements);
    assert_eq!(collection.features.len(), 2);

    // The closed outline, ways in response order.
    let outline = &collection.features[0];
    assert_eq!(outline.id, Some(geojson::feature::Id::Number(900.into())));
    let Value::Polygon(rings) = &outline.geometry.as_ref().unwrap().value else {
        panic!("expected polygon outline");
    };
    assert_eq!(rings[0].len(), 5);
    assert_eq!(rings[0][0], vec![139.6940, 35.6700]);
    assert_eq!(outline.properties.as_ref().unwrap()["name"], "代々木公園");

    // The open path.
    let path = &collection.features[1];
    let Value::LineString(coords) = &path.geometry.as_ref().unwrap().value else {
        panic!("expected linestring path");
    };
    assert_eq!(coords.len(), 2);
    assert!(path.properties.as_ref().unwrap().is_empty());

    // Relations pass through without geometry of their own.
    assert!(!collection
        .features
        .iter()
        .any(|f| f.id == Some(geojson::feature::Id::Number(5000.into()))));
}

#[test]
fn ramen_response_yields_markers_and_popups() {
    let elements = parse_elements(RAMEN_RESPONSE).unwrap();
    let shops = extract_pois(&elements);
    assert_eq!(shops.len(), 2);
    assert_eq!(shops[0].popup_text(), "青島食堂\nAddress: 浅草通り\nCuisine: ramen");
    assert_eq!(shops[1].display_name(), "(unnamed)");

    let markers = point_features(&elements);
    assert_eq!(markers.features.len(), 2);
    assert_eq!(
        markers.features[0].geometry.as_ref().unwrap().value,
        Value::Point(vec![139.7800, 35.7120])
    );

    // A pure marker query has no ways, so the layer source stays empty.
    assert!(build(&elements).features.is_empty());
}

#[test]
fn serialized_collection_is_a_feature_collection_document() {
    let elements = parse_elements(PARK_RESPONSE).unwrap();
    let json = serde_json::to_value(build(&elements)).unwrap();
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"][0]["geometry"]["type"], "Polygon");
    assert_eq!(json["features"][1]["geometry"]["type"], "LineString");
}
