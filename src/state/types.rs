use std::fmt;

use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair.
///
/// Serialized as a two-element array, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<[f64; 2]> for Location {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Location> for [f64; 2] {
    fn from(location: Location) -> Self {
        [location.latitude, location.longitude]
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.latitude, self.longitude)
    }
}

/// Identifier of a panorama image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanoramaId(pub u64);

impl fmt::Display for PanoramaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Viewpoint and orientation of the panorama camera.
///
/// `location` is the literal viewpoint; heading, pitch and fov describe the
/// orientation and are unset until known.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub location: Option<Location>,
    pub heading: Option<f64>,
    pub pitch: Option<f64>,
    pub fov: Option<f64>,
}

impl Camera {
    /// Name of the first orientation field holding a non-finite value.
    pub fn invalid_field(&self) -> Option<&'static str> {
        [
            ("heading", self.heading),
            ("pitch", self.pitch),
            ("fov", self.fov),
        ]
        .into_iter()
        .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
        .map(|(name, _)| name)
    }
}
