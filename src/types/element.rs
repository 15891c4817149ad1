use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::OverpassError;

/// One raw record from an Overpass `[out:json]` response, decoded over the
/// `type` field. Anything the service may add that we do not know about lands
/// on `Unknown` and is quarantined during [`parse_elements`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node {
        id: i64,
        lat: f64,
        lon: f64,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Way {
        id: i64,
        #[serde(default)]
        nodes: Vec<i64>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Relation {
        id: i64,
        #[serde(default)]
        members: Vec<Member>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "ref")]
    pub id: i64,
    #[serde(default)]
    pub role: String,
}

impl Element {
    pub fn id(&self) -> Option<i64> {
        match self {
            Element::Node { id, .. } | Element::Way { id, .. } | Element::Relation { id, .. } => {
                Some(*id)
            }
            Element::Unknown => None,
        }
    }

    pub fn tags(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Element::Node { tags, .. }
            | Element::Way { tags, .. }
            | Element::Relation { tags, .. } => Some(tags),
            Element::Unknown => None,
        }
    }
}

// Top-level response document. Only `elements` is consumed, the metadata
// fields are tolerated so a decode does not fail on them.
#[derive(Debug, Clone, Deserialize)]
struct OverpassResponse {
    elements: Vec<serde_json::Value>,
    #[allow(dead_code)]
    version: Option<f64>,
    #[allow(dead_code)]
    generator: Option<String>,
}

/// Decodes a response body into typed elements.
///
/// The document shape itself must parse or the whole body is rejected as
/// [`OverpassError::MalformedResponse`]. Individual elements that fail
/// validation (missing coordinates, unknown type, ...) are quarantined with a
/// warning instead of poisoning the batch.
pub fn parse_elements(body: &str) -> Result<Vec<Element>, OverpassError> {
    let response: OverpassResponse = serde_json::from_str(body)?;

    let mut elements = Vec::with_capacity(response.elements.len());
    for raw in response.elements {
        match serde_json::from_value::<Element>(raw) {
            Ok(Element::Unknown) => warn!("skipping element of unknown type"),
            Ok(element) => elements.push(element),
            Err(e) => warn!("skipping malformed element: {e}"),
        }
    }
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_node_way_and_relation() {
        let body = r#"{
            "version": 0.6,
            "generator": "Overpass API",
            "elements": [
                {"type": "node", "id": 1, "lat": 35.0, "lon": 139.0,
                 "tags": {"amenity": "restaurant"}},
                {"type": "way", "id": 10, "nodes": [1, 2, 3]},
                {"type": "relation", "id": 100,
                 "members": [{"type": "way", "ref": 10, "role": "outer"}]}
            ]
        }"#;

        let elements = parse_elements(body).unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].id(), Some(1));
        assert_eq!(
            elements[0].tags().unwrap().get("amenity").map(String::as_str),
            Some("restaurant")
        );
        assert!(matches!(&elements[1], Element::Way { nodes, .. } if nodes == &vec![1, 2, 3]));
        assert!(matches!(&elements[2], Element::Relation { members, .. }
            if members[0].id == 10 && members[0].role == "outer"));
    }

    #[test]
    fn quarantines_bad_elements_instead_of_failing() {
        let body = r#"{"elements": [
            {"type": "node", "id": 1, "lat": 35.0, "lon": 139.0},
            {"type": "node", "id": 2},
            {"type": "area", "id": 3},
            {"type": "way", "id": 10, "nodes": [1]}
        ]}"#;

        let elements = parse_elements(body).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].id(), Some(1));
        assert_eq!(elements[1].id(), Some(10));
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(matches!(
            parse_elements("<html>rate limited</html>"),
            Err(OverpassError::MalformedResponse(_))
        ));
        // A JSON body without the elements field is the wrong shape too.
        assert!(parse_elements(r#"{"remark": "timed out"}"#).is_err());
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let body = r#"{"elements": [{"type": "node", "id": 1, "lat": 0.0, "lon": 0.0}]}"#;
        let elements = parse_elements(body).unwrap();
        assert!(elements[0].tags().unwrap().is_empty());
    }
}
