use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::models::{BusStop, LoginStatus, MapMarker, Message, ProfileIdentity};
use crate::services::error::ApiError;

pub const LOGIN_STATUS_PATH: &str = "/login-status";
pub const ABOUT_PATH: &str = "/about";
pub const MESSAGES_PATH: &str = "/messages";
pub const INTEREST_PATH: &str = "/interest";
pub const IMAGE_UPLOAD_URL_PATH: &str = "/image-upload-url";
pub const USER_MARKERS_PATH: &str = "/user-markers";
pub const BUS_STOPS_PATH: &str = "/bus-stops";
pub const ABOUT_ME_PATH: &str = "/about-me";

/// A server resource the page reads from or posts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    LoginStatus,
    About,
    Messages,
    Interests,
    ImageUploadUrl,
    UserMarkers,
    BusStops,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::LoginStatus => LOGIN_STATUS_PATH,
            Endpoint::About => ABOUT_PATH,
            Endpoint::Messages => MESSAGES_PATH,
            Endpoint::Interests => INTEREST_PATH,
            Endpoint::ImageUploadUrl => IMAGE_UPLOAD_URL_PATH,
            Endpoint::UserMarkers => USER_MARKERS_PATH,
            Endpoint::BusStops => BUS_STOPS_PATH,
        }
    }
}

/// Strip trailing slashes so `<base><path>` never doubles them
pub fn normalize_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// Build `<base><path>?user=<identity>`
pub fn user_url(base: &str, path: &str, identity: &ProfileIdentity) -> String {
    format!("{}{}?user={}", normalize_base(base), path, urlencoding::encode(identity.as_str()))
}

/// Action of the message posting form: `/messages?recipient=<identity>`
pub fn message_form_action(base: &str, identity: &ProfileIdentity) -> String {
    format!(
        "{}{}?recipient={}",
        normalize_base(base),
        MESSAGES_PATH,
        urlencoding::encode(identity.as_str())
    )
}

/// Action of the about-me form
pub fn about_me_form_action(base: &str) -> String {
    format!("{}{}", normalize_base(base), ABOUT_ME_PATH)
}

/// Form-encoded body for `POST /user-markers`
pub fn marker_form_body(identity: &ProfileIdentity, marker: &MapMarker) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("lat", &marker.lat.to_string())
        .append_pair("lng", &marker.lng.to_string())
        .append_pair("content", &marker.content)
        .append_pair("user", identity.as_str())
        .finish()
}

/// Server resources the profile page reads and writes
#[async_trait(?Send)]
pub trait ProfileApi {
    async fn login_status(&self) -> Result<LoginStatus, ApiError>;

    /// About-me text, possibly empty
    async fn about(&self, identity: &ProfileIdentity) -> Result<String, ApiError>;

    async fn messages(&self, identity: &ProfileIdentity) -> Result<Vec<Message>, ApiError>;

    /// Server-rendered interests fragment
    async fn interests(&self, identity: &ProfileIdentity) -> Result<String, ApiError>;

    /// Blobstore upload target for the image attachment form
    async fn image_upload_url(&self) -> Result<String, ApiError>;

    async fn markers(&self, identity: &ProfileIdentity) -> Result<Vec<MapMarker>, ApiError>;

    async fn create_marker(&self, identity: &ProfileIdentity, marker: &MapMarker) -> Result<(), ApiError>;

    async fn bus_stops(&self) -> Result<Vec<BusStop>, ApiError>;
}

/// `ProfileApi` over the browser's fetch
#[derive(Clone, Debug, Default)]
pub struct HttpProfileApi {
    base_url: String,
}

impl HttpProfileApi {
    /// Create a client; an empty base means same-origin relative paths
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(&base_url.into()).to_string(),
        }
    }

    /// Request URL for `endpoint`, scoped to `identity` when given
    pub fn url(&self, endpoint: Endpoint, identity: Option<&ProfileIdentity>) -> String {
        match identity {
            Some(identity) => user_url(&self.base_url, endpoint.path(), identity),
            None => format!("{}{}", self.base_url, endpoint.path()),
        }
    }

    async fn get(&self, url: &str) -> Result<gloo_net::http::Response, ApiError> {
        log::debug!("GET {}", url);

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status { url: url.to_string(), status: response.status() });
        }

        Ok(response)
    }

    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.get(url)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ProfileApi for HttpProfileApi {
    async fn login_status(&self) -> Result<LoginStatus, ApiError> {
        self.get_json(&self.url(Endpoint::LoginStatus, None)).await
    }

    async fn about(&self, identity: &ProfileIdentity) -> Result<String, ApiError> {
        self.get_text(&self.url(Endpoint::About, Some(identity))).await
    }

    async fn messages(&self, identity: &ProfileIdentity) -> Result<Vec<Message>, ApiError> {
        self.get_json(&self.url(Endpoint::Messages, Some(identity))).await
    }

    async fn interests(&self, identity: &ProfileIdentity) -> Result<String, ApiError> {
        self.get_text(&self.url(Endpoint::Interests, Some(identity))).await
    }

    async fn image_upload_url(&self) -> Result<String, ApiError> {
        // The servlet prints the URL with a trailing newline
        let url = self.get_text(&self.url(Endpoint::ImageUploadUrl, None)).await?;
        Ok(url.trim().to_string())
    }

    async fn markers(&self, identity: &ProfileIdentity) -> Result<Vec<MapMarker>, ApiError> {
        self.get_json(&self.url(Endpoint::UserMarkers, Some(identity))).await
    }

    async fn create_marker(&self, identity: &ProfileIdentity, marker: &MapMarker) -> Result<(), ApiError> {
        let url = self.url(Endpoint::UserMarkers, None);
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(marker_form_body(identity, marker))
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status { url, status: response.status() });
        }

        Ok(())
    }

    async fn bus_stops(&self) -> Result<Vec<BusStop>, ApiError> {
        self.get_json(&self.url(Endpoint::BusStops, None)).await
    }
}
