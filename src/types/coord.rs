use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Copy)]
#[serde(rename_all = "camelCase")]
pub struct Coord {
    pub lat: f64,
    #[serde(rename = "lon")]
    pub long: f64,
}

impl Coord {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// (longitude, latitude), the order GeoJSON positions use.
    pub fn to_lon_lat(&self) -> (f64, f64) {
        (self.long, self.lat)
    }
}

impl From<Coord> for geo::Point {
    fn from(value: Coord) -> Self {
        geo::Point::new(value.long, value.lat)
    }
}
