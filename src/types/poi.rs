use super::{Coord, Element};

/// A tagged node element lifted into marker form: name, position and the
/// detail fields the popup shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub id: i64,
    pub name: Option<String>,
    pub coord: Coord,
    pub address: Option<String>,
    pub cuisine: Option<String>,
}

impl Poi {
    /// Builds a marker from a node element. Non-node elements and untagged
    /// nodes yield `None`; bare way-member nodes are geometry scaffolding,
    /// not markers.
    pub fn from_element(element: &Element) -> Option<Self> {
        let Element::Node { id, lat, lon, tags } = element else {
            return None;
        };
        if tags.is_empty() {
            return None;
        }

        Some(Poi {
            id: *id,
            name: tags.get("name").cloned(),
            coord: Coord::new(*lat, *lon),
            // Prefer the full address, fall back to the street part.
            address: tags
                .get("addr:full")
                .or_else(|| tags.get("addr:street"))
                .cloned(),
            cuisine: tags.get("cuisine").cloned(),
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }

    /// The detail popup body for a selected marker, one line per present tag.
    pub fn popup_text(&self) -> String {
        let mut lines = vec![self.display_name().to_string()];
        if let Some(address) = &self.address {
            lines.push(format!("Address: {address}"));
        }
        if let Some(cuisine) = &self.cuisine {
            lines.push(format!("Cuisine: {cuisine}"));
        }
        lines.join("\n")
    }
}

/// Extracts every marker from a raw element batch, in input order.
pub fn extract_pois(elements: &[Element]) -> Vec<Poi> {
    elements.iter().filter_map(Poi::from_element).collect()
}
