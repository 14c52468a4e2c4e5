//! Observer geography.

use panchanga_time::CivilZone;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Elevation above mean sea level in meters.
    pub elevation_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        }
    }

    /// Whether the coordinates are finite and inside their ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude_deg.is_finite()
            && self.longitude_deg.is_finite()
            && self.elevation_m.is_finite()
            && (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// A location plus the civil clock kept there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    pub location: GeoLocation,
    pub zone: CivilZone,
}

impl Observer {
    pub fn new(location: GeoLocation, zone: CivilZone) -> Self {
        Self { location, zone }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(GeoLocation::new(12.97, 77.59, 920.0).is_valid());
        assert!(!GeoLocation::new(91.0, 0.0, 0.0).is_valid());
        assert!(!GeoLocation::new(0.0, 181.0, 0.0).is_valid());
        assert!(!GeoLocation::new(f64::NAN, 0.0, 0.0).is_valid());
    }
}
