use serde::{Deserialize, Serialize};

use super::payload::PanoramaTarget;
use crate::mvi::SliceState;
use crate::state::{Camera, Location, PanoramaId};

/// The panorama currently shown or being fetched.
///
/// Exactly one of ID or location identifies it; the enum makes the other
/// one unrepresentable. On the wire both keys are present and the unused
/// one is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "StraatbeeldRecord", try_from = "StraatbeeldRecord")]
pub struct StraatbeeldState {
    pub target: PanoramaTarget,
    pub camera: Camera,
    pub is_loading: bool,
}

impl SliceState for StraatbeeldState {}

impl StraatbeeldState {
    pub fn id(&self) -> Option<PanoramaId> {
        self.target.id()
    }

    pub fn location(&self) -> Option<Location> {
        self.target.location()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StraatbeeldRecord {
    id: Option<PanoramaId>,
    location: Option<Location>,
    #[serde(default)]
    camera: Camera,
    #[serde(default)]
    is_loading: bool,
}

impl From<StraatbeeldState> for StraatbeeldRecord {
    fn from(state: StraatbeeldState) -> Self {
        Self {
            id: state.id(),
            location: state.location(),
            camera: state.camera,
            is_loading: state.is_loading,
        }
    }
}

impl TryFrom<StraatbeeldRecord> for StraatbeeldState {
    type Error = String;

    fn try_from(record: StraatbeeldRecord) -> Result<Self, Self::Error> {
        let target = match (record.id, record.location) {
            (Some(id), None) => PanoramaTarget::Id(id),
            (None, Some(location)) => PanoramaTarget::Location(location),
            (Some(_), Some(_)) => {
                return Err("straatbeeld has both an id and a location".to_string())
            }
            (None, None) => return Err("straatbeeld has neither an id nor a location".to_string()),
        };

        Ok(Self {
            target,
            camera: record.camera,
            is_loading: record.is_loading,
        })
    }
}
