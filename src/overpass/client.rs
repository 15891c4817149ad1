use log::{debug, info};

use crate::errors::OverpassError;
use crate::types::{parse_elements, Element};

use super::{OverpassClient, OverpassQuery};

impl OverpassClient {
    /// One POST of the form-encoded query, decoded into typed elements.
    /// There is no retry; a transport failure or non-success status surfaces
    /// as [`OverpassError::Fetch`] and the caller decides what to show.
    pub fn fetch_elements(&self, query: &OverpassQuery) -> Result<Vec<Element>, OverpassError> {
        let body = self.send_query_string(&query.build()?)?;
        let elements = parse_elements(&body)?;
        info!("got {} elements", elements.len());
        Ok(elements)
    }

    pub fn send_query_string(&self, query: &str) -> Result<String, OverpassError> {
        if query.is_empty() {
            return Err(OverpassError::EmptyQuery);
        }
        debug!("sending query:\n{query}");

        let mut response = self.agent.post(&self.url).send_form([("data", query)])?;
        if response.status() != 200 {
            return Err(OverpassError::Fetch(format!(
                "unexpected status {}",
                response.status()
            )));
        }
        Ok(response.body_mut().read_to_string()?)
    }
}
