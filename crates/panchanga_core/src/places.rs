//! Place resolution: city names or raw coordinates to an [`Observer`].

use std::collections::BTreeMap;

use panchanga_ephem::{GeoLocation, Observer};
use panchanga_time::CivilZone;

use crate::error::ConfigurationError;

/// A named location and its civil zone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub location: GeoLocation,
    pub zone: CivilZone,
}

impl Place {
    pub fn observer(&self) -> Observer {
        Observer::new(self.location, self.zone)
    }
}

/// Looks up places by name.
pub trait PlaceResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Place>;
}

/// Where a panchanga is wanted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceQuery {
    Named(String),
    /// Latitude, longitude and zone are required; elevation defaults to 0 m.
    Coordinates {
        latitude: Option<f64>,
        longitude: Option<f64>,
        elevation_m: Option<f64>,
        /// Hours (`"5.5"`), `"+05:30"` or an IANA name.
        zone: Option<String>,
    },
}

impl PlaceQuery {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn coordinates(latitude: f64, longitude: f64, zone: impl Into<String>) -> Self {
        Self::Coordinates {
            latitude: Some(latitude),
            longitude: Some(longitude),
            elevation_m: None,
            zone: Some(zone.into()),
        }
    }

    /// Resolve to an observer, using `resolver` for named places.
    pub fn resolve(&self, resolver: &dyn PlaceResolver) -> Result<Observer, ConfigurationError> {
        match self {
            Self::Named(name) => resolver
                .resolve(name)
                .map(|p| p.observer())
                .ok_or_else(|| ConfigurationError::UnresolvedPlace(name.clone())),
            Self::Coordinates {
                latitude: Some(latitude),
                longitude: Some(longitude),
                elevation_m,
                zone: Some(zone),
            } => {
                let location = GeoLocation::new(*latitude, *longitude, elevation_m.unwrap_or(0.0));
                if !location.is_valid() {
                    return Err(ConfigurationError::InvalidCoordinates {
                        latitude: *latitude,
                        longitude: *longitude,
                    });
                }
                let zone = CivilZone::parse(zone).map_err(|_| ConfigurationError::UnknownTimeZone(zone.clone()))?;
                Ok(Observer::new(location, zone))
            }
            Self::Coordinates { .. } => Err(ConfigurationError::IncompleteGeography),
        }
    }
}

/// `"new  delhi"` → `"New Delhi"`.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// In-memory place table keyed by title-cased name.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    places: BTreeMap<String, Place>,
}

impl PlaceCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of major Indian cities, all on Indian Standard Time.
    pub fn builtin() -> Self {
        let ist = CivilZone::Named(chrono_tz::Asia::Kolkata);
        let mut catalog = Self::new();
        for &(name, lat, lon, elev) in BUILTIN_CITIES {
            catalog.insert(
                name,
                Place {
                    location: GeoLocation::new(lat, lon, elev),
                    zone: ist,
                },
            );
        }
        catalog
    }

    pub fn insert(&mut self, name: &str, place: Place) {
        self.places.insert(title_case(name), place);
    }

    pub fn with_place(mut self, name: &str, place: Place) -> Self {
        self.insert(name, place);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.places.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl PlaceResolver for PlaceCatalog {
    fn resolve(&self, name: &str) -> Option<Place> {
        self.places.get(&title_case(name)).copied()
    }
}

/// (name, latitude °N, longitude °E, elevation m)
const BUILTIN_CITIES: &[(&str, f64, f64, f64)] = &[
    ("Ahmedabad", 23.0225, 72.5714, 53.0),
    ("Bangalore", 12.9716, 77.5946, 920.0),
    ("Bengaluru", 12.9716, 77.5946, 920.0),
    ("Bhopal", 23.2599, 77.4126, 527.0),
    ("Chennai", 13.0827, 80.2707, 6.0),
    ("Delhi", 28.7041, 77.1025, 216.0),
    ("Haridwar", 29.9457, 78.1642, 314.0),
    ("Hyderabad", 17.3850, 78.4867, 542.0),
    ("Jaipur", 26.9124, 75.7873, 431.0),
    ("Kochi", 9.9312, 76.2673, 0.0),
    ("Kolkata", 22.5726, 88.3639, 9.0),
    ("Lucknow", 26.8467, 80.9462, 123.0),
    ("Madurai", 9.9252, 78.1198, 134.0),
    ("Mumbai", 19.0760, 72.8777, 14.0),
    ("Mysore", 12.2958, 76.6394, 763.0),
    ("New Delhi", 28.6139, 77.2090, 216.0),
    ("Patna", 25.5941, 85.1376, 53.0),
    ("Pune", 18.5204, 73.8567, 560.0),
    ("Thiruvananthapuram", 8.5241, 76.9366, 10.0),
    ("Tirupati", 13.6288, 79.4192, 162.0),
    ("Udupi", 13.3409, 74.7421, 27.0),
    ("Ujjain", 23.1765, 75.7885, 494.0),
    ("Varanasi", 25.3176, 82.9739, 80.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_casing() {
        assert_eq!(title_case("bangalore"), "Bangalore");
        assert_eq!(title_case("  new   DELHI "), "New Delhi");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let c = PlaceCatalog::builtin();
        let p = c.resolve("BANGALORE").expect("bangalore");
        assert!((p.location.latitude_deg - 12.9716).abs() < 1e-9);
        assert_eq!(p.zone, CivilZone::Named(chrono_tz::Asia::Kolkata));
        assert!(c.resolve("new delhi").is_some());
        assert!(c.resolve("Atlantis").is_none());
    }

    #[test]
    fn unresolved_names_the_input() {
        let err = PlaceQuery::named("atlantis").resolve(&PlaceCatalog::builtin()).unwrap_err();
        assert_eq!(err, ConfigurationError::UnresolvedPlace("atlantis".into()));
    }

    #[test]
    fn coordinates_need_all_fields() {
        let q = PlaceQuery::Coordinates {
            latitude: Some(12.0),
            longitude: None,
            elevation_m: None,
            zone: Some("5.5".into()),
        };
        assert_eq!(q.resolve(&PlaceCatalog::new()).unwrap_err(), ConfigurationError::IncompleteGeography);
    }

    #[test]
    fn coordinates_resolve() {
        let obs = PlaceQuery::coordinates(40.7, -74.0, "America/New_York")
            .resolve(&PlaceCatalog::new())
            .unwrap();
        assert_eq!(obs.location.elevation_m, 0.0);
        assert_eq!(obs.zone, CivilZone::Named(chrono_tz::America::New_York));
    }

    #[test]
    fn bad_zone_and_coordinates() {
        let empty = PlaceCatalog::new();
        assert!(matches!(
            PlaceQuery::coordinates(0.0, 0.0, "Nowhere/Land").resolve(&empty),
            Err(ConfigurationError::UnknownTimeZone(_))
        ));
        assert!(matches!(
            PlaceQuery::coordinates(95.0, 0.0, "0").resolve(&empty),
            Err(ConfigurationError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn custom_entries() {
        let c = PlaceCatalog::new().with_place(
            "tromsø",
            Place {
                location: GeoLocation::new(69.65, 18.96, 0.0),
                zone: CivilZone::from_hours(1.0).unwrap(),
            },
        );
        assert_eq!(c.len(), 1);
        assert!(c.resolve("TROMSØ").is_some());
        assert_eq!(c.names().collect::<Vec<_>>(), ["Tromsø"]);
    }
}
