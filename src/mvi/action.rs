//! Actions: the only sanctioned way to request a state change.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::detail::ShowDetailPayload;
use crate::map::Highlight;
use crate::state::Location;
use crate::straatbeeld::{PanoramaTarget, RequestSeq, ShowStraatbeeldPayload};

/// Errors raised while turning a named action into a typed [`Action`].
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Invalid payload for {action}: {source}")]
    InvalidPayload {
        action: ActionKind,
        #[source]
        source: serde_json::Error,
    },
}

/// Name of an action, independent of its payload.
///
/// This is the key reducers are registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    FetchStraatbeeld,
    ShowStraatbeeld,
    #[serde(rename = "MAP_SET_BASELAYER")]
    MapSetBaseLayer,
    MapAddOverlay,
    MapRemoveOverlay,
    MapPan,
    MapZoom,
    MapHighlight,
    ShowSearchResultsByQuery,
    ShowSearchResultsByClick,
    FetchDetail,
    ShowDetail,
    ShowPage,
}

impl ActionKind {
    pub const ALL: [ActionKind; 13] = [
        ActionKind::FetchStraatbeeld,
        ActionKind::ShowStraatbeeld,
        ActionKind::MapSetBaseLayer,
        ActionKind::MapAddOverlay,
        ActionKind::MapRemoveOverlay,
        ActionKind::MapPan,
        ActionKind::MapZoom,
        ActionKind::MapHighlight,
        ActionKind::ShowSearchResultsByQuery,
        ActionKind::ShowSearchResultsByClick,
        ActionKind::FetchDetail,
        ActionKind::ShowDetail,
        ActionKind::ShowPage,
    ];

    /// The string constant used on the dispatch surface.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::FetchStraatbeeld => "FETCH_STRAATBEELD",
            ActionKind::ShowStraatbeeld => "SHOW_STRAATBEELD",
            ActionKind::MapSetBaseLayer => "MAP_SET_BASELAYER",
            ActionKind::MapAddOverlay => "MAP_ADD_OVERLAY",
            ActionKind::MapRemoveOverlay => "MAP_REMOVE_OVERLAY",
            ActionKind::MapPan => "MAP_PAN",
            ActionKind::MapZoom => "MAP_ZOOM",
            ActionKind::MapHighlight => "MAP_HIGHLIGHT",
            ActionKind::ShowSearchResultsByQuery => "SHOW_SEARCH_RESULTS_BY_QUERY",
            ActionKind::ShowSearchResultsByClick => "SHOW_SEARCH_RESULTS_BY_CLICK",
            ActionKind::FetchDetail => "FETCH_DETAIL",
            ActionKind::ShowDetail => "SHOW_DETAIL",
            ActionKind::ShowPage => "SHOW_PAGE",
        }
    }

    /// Look up a kind by its string constant.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named event carrying its own payload type.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start loading a panorama, by ID or by nearest-to-location search.
    FetchStraatbeeld(PanoramaTarget),

    /// A panorama fetch resolved.
    ShowStraatbeeld(ShowStraatbeeldPayload),

    MapSetBaseLayer(String),
    MapAddOverlay(String),
    MapRemoveOverlay(String),
    MapPan(Location),
    MapZoom(u8),

    /// Select a map feature, or clear the selection with `None`.
    MapHighlight(Option<Highlight>),

    ShowSearchResultsByQuery(String),
    ShowSearchResultsByClick(Location),

    /// Start loading a detail view for an API endpoint.
    FetchDetail(String),
    ShowDetail(ShowDetailPayload),

    ShowPage(String),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::FetchStraatbeeld(_) => ActionKind::FetchStraatbeeld,
            Action::ShowStraatbeeld(_) => ActionKind::ShowStraatbeeld,
            Action::MapSetBaseLayer(_) => ActionKind::MapSetBaseLayer,
            Action::MapAddOverlay(_) => ActionKind::MapAddOverlay,
            Action::MapRemoveOverlay(_) => ActionKind::MapRemoveOverlay,
            Action::MapPan(_) => ActionKind::MapPan,
            Action::MapZoom(_) => ActionKind::MapZoom,
            Action::MapHighlight(_) => ActionKind::MapHighlight,
            Action::ShowSearchResultsByQuery(_) => ActionKind::ShowSearchResultsByQuery,
            Action::ShowSearchResultsByClick(_) => ActionKind::ShowSearchResultsByClick,
            Action::FetchDetail(_) => ActionKind::FetchDetail,
            Action::ShowDetail(_) => ActionKind::ShowDetail,
            Action::ShowPage(_) => ActionKind::ShowPage,
        }
    }

    /// Build an action from its string name and an untyped payload.
    ///
    /// Returns `Ok(None)` for names that are not part of the action set.
    pub fn from_name(name: &str, payload: Value) -> Result<Option<Self>, ActionError> {
        let Some(kind) = ActionKind::from_name(name) else {
            return Ok(None);
        };

        let action = match kind {
            ActionKind::FetchStraatbeeld => Action::FetchStraatbeeld(parse(kind, payload)?),
            ActionKind::ShowStraatbeeld => Action::ShowStraatbeeld(parse(kind, payload)?),
            ActionKind::MapSetBaseLayer => Action::MapSetBaseLayer(parse(kind, payload)?),
            ActionKind::MapAddOverlay => Action::MapAddOverlay(parse(kind, payload)?),
            ActionKind::MapRemoveOverlay => Action::MapRemoveOverlay(parse(kind, payload)?),
            ActionKind::MapPan => Action::MapPan(parse(kind, payload)?),
            ActionKind::MapZoom => Action::MapZoom(parse(kind, payload)?),
            ActionKind::MapHighlight => Action::MapHighlight(parse(kind, payload)?),
            ActionKind::ShowSearchResultsByQuery => {
                Action::ShowSearchResultsByQuery(parse(kind, payload)?)
            }
            ActionKind::ShowSearchResultsByClick => {
                Action::ShowSearchResultsByClick(parse(kind, payload)?)
            }
            ActionKind::FetchDetail => Action::FetchDetail(parse(kind, payload)?),
            ActionKind::ShowDetail => Action::ShowDetail(parse(kind, payload)?),
            ActionKind::ShowPage => Action::ShowPage(parse(kind, payload)?),
        };

        Ok(Some(action))
    }

    /// Whether this action opens a new panorama request.
    pub fn starts_request(&self) -> bool {
        matches!(self, Action::FetchStraatbeeld(_))
    }

    /// Whether this action leaves the panorama view, abandoning any
    /// outstanding panorama request.
    pub fn cancels_request(&self) -> bool {
        matches!(
            self,
            Action::ShowSearchResultsByQuery(_)
                | Action::ShowSearchResultsByClick(_)
                | Action::FetchDetail(_)
                | Action::ShowPage(_)
        )
    }

    /// The request this action answers, if its payload names one.
    pub fn answers_request(&self) -> Option<RequestSeq> {
        match self {
            Action::ShowStraatbeeld(payload) => payload.request,
            _ => None,
        }
    }
}

fn parse<T: DeserializeOwned>(action: ActionKind, payload: Value) -> Result<T, ActionError> {
    serde_json::from_value(payload).map_err(|source| ActionError::InvalidPayload { action, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PanoramaId;
    use serde_json::json;

    #[test]
    fn names_round_trip_through_lookup() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn serde_name_matches_dispatch_name() {
        for kind in ActionKind::ALL {
            let encoded = serde_json::to_value(kind).unwrap();
            assert_eq!(encoded, json!(kind.as_str()));
        }
    }

    #[test]
    fn unknown_name_is_not_an_error() {
        let parsed = Action::from_name("TOGGLE_FULLSCREEN", json!(true)).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn fetch_by_id_parses_numeric_payload() {
        let parsed = Action::from_name("FETCH_STRAATBEELD", json!(123)).unwrap();
        assert_eq!(
            parsed,
            Some(Action::FetchStraatbeeld(PanoramaTarget::Id(PanoramaId(123))))
        );
    }

    #[test]
    fn fetch_by_location_parses_coordinate_pair() {
        let parsed = Action::from_name("FETCH_STRAATBEELD", json!([52.987, 4.321])).unwrap();
        assert_eq!(
            parsed,
            Some(Action::FetchStraatbeeld(PanoramaTarget::Location(Location::new(
                52.987, 4.321
            ))))
        );
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let err = Action::from_name("FETCH_STRAATBEELD", json!({"some": "object"})).unwrap_err();
        assert!(matches!(
            err,
            ActionError::InvalidPayload {
                action: ActionKind::FetchStraatbeeld,
                ..
            }
        ));
    }

    #[test]
    fn show_straatbeeld_carries_request_sequence() {
        let action = Action::from_name(
            "SHOW_STRAATBEELD",
            json!({
                "id": 98765,
                "camera": {"location": [51.5, 4.5], "heading": 7, "pitch": 8, "fov": 9},
                "request": 4
            }),
        )
        .unwrap()
        .unwrap();

        assert_eq!(action.kind(), ActionKind::ShowStraatbeeld);
        assert_eq!(action.answers_request(), Some(RequestSeq(4)));
        assert!(!action.starts_request());
    }

    #[test]
    fn leaving_the_panorama_cancels_requests() {
        assert!(Action::ShowPage("about".into()).cancels_request());
        assert!(Action::FetchDetail("bag/1".into()).cancels_request());
        assert!(!Action::FetchStraatbeeld(PanoramaTarget::Id(PanoramaId(1))).cancels_request());
        assert!(!Action::MapZoom(10).cancels_request());
    }
}
