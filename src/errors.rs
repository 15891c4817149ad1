use thiserror::Error;

/// Failures surfaced by the Overpass boundary. Everything downstream of a
/// successful fetch degrades to partial output instead of erroring.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Transport failure or non-success HTTP status from the query service.
    #[error("overpass request failed: {0}")]
    Fetch(String),

    /// The response body was not the expected JSON document shape.
    #[error("malformed overpass response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// A query was built with no filter clauses at all.
    #[error("query has no filter clauses")]
    EmptyQuery,
}

impl From<ureq::Error> for OverpassError {
    fn from(value: ureq::Error) -> Self {
        OverpassError::Fetch(value.to_string())
    }
}
