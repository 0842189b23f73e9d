use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::{Camera, Location, PanoramaId};

/// What a panorama fetch is looking for: a known image, or the image
/// nearest to a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PanoramaTarget {
    Id(PanoramaId),
    Location(Location),
}

impl PanoramaTarget {
    pub fn id(&self) -> Option<PanoramaId> {
        match self {
            PanoramaTarget::Id(id) => Some(*id),
            PanoramaTarget::Location(_) => None,
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            PanoramaTarget::Id(_) => None,
            PanoramaTarget::Location(location) => Some(*location),
        }
    }
}

impl From<PanoramaId> for PanoramaTarget {
    fn from(id: PanoramaId) -> Self {
        PanoramaTarget::Id(id)
    }
}

impl From<Location> for PanoramaTarget {
    fn from(location: Location) -> Self {
        PanoramaTarget::Location(location)
    }
}

/// Sequence number stamped on each panorama fetch.
///
/// Monotonically increasing per store; a response carrying an older number
/// than the latest fetch answers a superseded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestSeq(pub u64);

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A resolved panorama.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShowStraatbeeldPayload {
    pub id: PanoramaId,
    #[serde(default)]
    pub camera: Camera,
    /// The fetch this result answers, when the fetcher tracked it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestSeq>,
}
