use serde::{Deserialize, Serialize};

/// The username whose page is being viewed, taken from `?user=`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProfileIdentity(String);

impl ProfileIdentity {
    /// Extract the identity from a location query string (with or without the leading `?`).
    ///
    /// Returns `None` when the parameter is missing or empty, which the page treats as
    /// a reason to leave.
    pub fn from_query(search: &str) -> Option<Self> {
        let query = search.strip_prefix('?').unwrap_or(search);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "user")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProfileIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response of `/login-status`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatus {
    pub is_logged_in: bool,
    #[serde(default)]
    pub username: String,
}

impl LoginStatus {
    /// True when the logged-in user is looking at their own page
    pub fn is_viewing(&self, identity: &ProfileIdentity) -> bool {
        self.is_logged_in && self.username == identity.as_str()
    }
}

/// A single message posted on a user page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub user: String,
    /// Server-rendered HTML, shown as-is
    pub text: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// A marker persisted on the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusStop {
    pub neighborhood: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<BusStop> for MapMarker {
    fn from(stop: BusStop) -> Self {
        Self {
            lat: stop.lat,
            lng: stop.lng,
            content: stop.neighborhood,
        }
    }
}

/// A marker the user has placed but not saved yet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingMarker {
    pub lat: f64,
    pub lng: f64,
}

impl PendingMarker {
    pub fn with_content(self, content: impl Into<String>) -> MapMarker {
        MapMarker {
            lat: self.lat,
            lng: self.lng,
            content: content.into(),
        }
    }
}
