//! Static city reference table.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A city with its map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self { name, latitude, longitude }
    }

    pub fn coordinates(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// Supported cities, in display order.
pub const CITIES: [City; 10] = [
    City::new("Delhi", 28.6139, 77.2090),
    City::new("Mumbai", 19.0760, 72.8777),
    City::new("Chennai", 13.0827, 80.2707),
    City::new("Bangalore", 12.9716, 77.5946),
    City::new("Kolkata", 22.5726, 88.3639),
    City::new("Hyderabad", 17.3850, 78.4867),
    City::new("Ahmedabad", 23.0225, 72.5714),
    City::new("Pune", 18.5204, 73.8567),
    City::new("Jaipur", 26.9124, 75.7873),
    City::new("Lucknow", 26.8467, 80.9462),
];

pub fn city_names() -> Vec<&'static str> {
    CITIES.iter().map(|c| c.name).collect()
}

/// Serializes as a JSON object of `name -> [lat, lon]`, keeping table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityCoordinates;

impl Serialize for CityCoordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CITIES.len()))?;
        for city in &CITIES {
            map.serialize_entry(city.name, &city.coordinates())?;
        }
        map.end()
    }
}
