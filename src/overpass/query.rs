use std::fmt::Write;

use crate::errors::OverpassError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

impl ElementKind {
    fn keyword(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
            ElementKind::Relation => "relation",
        }
    }
}

/// One selection clause: an element kind plus its `["key"="value"]` tag
/// filters. A filter without a value matches any value of the key.
#[derive(Debug, Clone)]
pub struct Clause {
    kind: ElementKind,
    tags: Vec<(String, Option<String>)>,
}

impl Clause {
    pub fn nodes() -> Self {
        Self::new(ElementKind::Node)
    }

    pub fn ways() -> Self {
        Self::new(ElementKind::Way)
    }

    pub fn relations() -> Self {
        Self::new(ElementKind::Relation)
    }

    fn new(kind: ElementKind) -> Self {
        Clause { kind, tags: Vec::new() }
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.tags.push((key.to_string(), Some(value.to_string())));
        self
    }

    pub fn tag_key(mut self, key: &str) -> Self {
        self.tags.push((key.to_string(), None));
        self
    }
}

/// Builds the declarative filter sent as the request body: `[out:json]`
/// header, an optional named-area scope, union of selection clauses, and the
/// output footer. `with_geometry` appends the member-node recursion
/// (`>; out skel qt;`) so way geometry can be resolved client side.
#[derive(Debug, Clone, Default)]
pub struct OverpassQuery {
    area: Option<String>,
    clauses: Vec<Clause>,
    recurse: bool,
}

impl OverpassQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_area(mut self, name: &str) -> Self {
        self.area = Some(name.to_string());
        self
    }

    pub fn clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn with_geometry(mut self) -> Self {
        self.recurse = true;
        self
    }

    pub fn build(&self) -> Result<String, OverpassError> {
        if self.clauses.is_empty() {
            return Err(OverpassError::EmptyQuery);
        }

        let mut query = String::from("[out:json];\n");
        let scope = if let Some(area) = &self.area {
            let _ = writeln!(query, "area[\"name\"=\"{area}\"]->.searchArea;");
            "(area.searchArea)"
        } else {
            ""
        };

        query.push_str("(\n");
        for clause in &self.clauses {
            query.push_str(clause.kind.keyword());
            for (key, value) in &clause.tags {
                match value {
                    Some(value) => {
                        let _ = write!(query, "[\"{key}\"=\"{value}\"]");
                    }
                    None => {
                        let _ = write!(query, "[\"{key}\"]");
                    }
                }
            }
            let _ = writeln!(query, "{scope};");
        }
        query.push_str(");\nout body;\n");

        if self.recurse {
            query.push_str(">;\nout skel qt;\n");
        }
        Ok(query)
    }
}
