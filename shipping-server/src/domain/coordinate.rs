//! Geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a latitude or longitude is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    /// Latitude outside [-90, 90] or not finite
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    /// Longitude outside [-180, 180] or not finite
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

/// A point on the Earth's surface, in decimal degrees.
///
/// Both components are range-checked at construction, so any `Coordinate`
/// can be handed to the distance calculation without further validation.
///
/// # Examples
///
/// ```
/// use shipping_server::domain::Coordinate;
///
/// let berlin = Coordinate::new(52.520008, 13.404954).unwrap();
/// assert_eq!(berlin.latitude(), 52.520008);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -180.5).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Unchecked form used for deserialization.
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a coordinate, checking that it lies on the globe.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate::Longitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.latitude, self.longitude)
    }
}
