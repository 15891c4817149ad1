mod client;
mod query;
pub(crate) mod worker;

use std::time::Duration;

pub use query::*;
use ureq::Agent;
pub use worker::*;

pub const OVERPASS_API_URL: &str = "https://overpass-api.de/api/interpreter";

#[derive(Clone)]
pub struct OverpassClient {
    url: String,
    pub agent: Agent,
}

impl Default for OverpassClient {
    fn default() -> Self {
        Self::new(OVERPASS_API_URL)
    }
}

impl OverpassClient {
    pub fn new(url: &str) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();
        let agent: Agent = config.into();
        OverpassClient {
            agent,
            url: url.to_string(),
        }
    }

    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }
}
