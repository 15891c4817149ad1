use std::collections::{BTreeMap, HashMap, HashSet};

use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use log::warn;

use crate::types::Element;

/// Converts a raw element batch into a feature collection for a fill/line
/// layer source.
///
/// Runs two passes: every node lands in the id index first, then each way is
/// resolved through it, so a way may reference a node that appears later in
/// the response. A way whose first and last member ids coincide and which has
/// at least 3 distinct members becomes a Polygon (closing coordinate kept);
/// any other way becomes a LineString. A way with an unresolvable member id
/// is dropped with a warning and the rest of the batch still converts.
/// Relations emit no geometry of their own; their member ways convert
/// individually. Output order follows input way order.
pub fn build(elements: &[Element]) -> FeatureCollection {
    let mut node_index: HashMap<i64, geo::Coord> = HashMap::new();
    for element in elements {
        if let Element::Node { id, lat, lon, .. } = element {
            node_index.insert(*id, geo::Coord { x: *lon, y: *lat });
        }
    }

    let mut features = Vec::new();
    for element in elements {
        let Element::Way { id, nodes, tags } = element else {
            continue;
        };
        if nodes.is_empty() {
            continue;
        }

        let mut coords = Vec::with_capacity(nodes.len());
        let mut unresolved = None;
        for node_id in nodes {
            match node_index.get(node_id) {
                Some(coord) => coords.push(*coord),
                None => {
                    unresolved = Some(*node_id);
                    break;
                }
            }
        }
        if let Some(node_id) = unresolved {
            warn!("dropping way {id}: unresolved node reference {node_id}");
            continue;
        }

        // A closed 1- or 2-member ring is degenerate and stays a LineString.
        let distinct: HashSet<i64> = nodes.iter().copied().collect();
        let closed = nodes.first() == nodes.last() && distinct.len() >= 3;
        let geometry = if closed {
            Value::from(&geo::Polygon::new(geo::LineString(coords), vec![]))
        } else {
            Value::from(&geo::LineString(coords))
        };

        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(geometry)),
            id: Some(Id::Number((*id).into())),
            properties: Some(tag_properties(tags)),
            foreign_members: None,
        });
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Lifts every tagged node into a Point feature, in input order. Marker
/// placement reads the (lon, lat) position straight off the geometry.
pub fn point_features(elements: &[Element]) -> FeatureCollection {
    let features = elements
        .iter()
        .filter_map(|element| {
            let Element::Node { id, lat, lon, tags } = element else {
                return None;
            };
            if tags.is_empty() {
                return None;
            }
            Some(Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![*lon, *lat]))),
                id: Some(Id::Number((*id).into())),
                properties: Some(tag_properties(tags)),
                foreign_members: None,
            })
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn tag_properties(tags: &BTreeMap<String, String>) -> JsonObject {
    tags.iter()
        .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
        .collect()
}
