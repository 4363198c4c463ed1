//! Recording fakes for controller tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::controller::map::MapProvider;
use crate::controller::view::{page_title, Form, ProfileView, Region, Rendered, Slot};
use crate::models::{BusStop, LoginStatus, MapMarker, Message, PendingMarker, ProfileIdentity};
use crate::services::api::{Endpoint, HttpProfileApi, ProfileApi};
use crate::services::error::ApiError;

/// Same-origin request URL, as the real client builds it
fn url(endpoint: Endpoint, identity: Option<&ProfileIdentity>) -> String {
    HttpProfileApi::default().url(endpoint, identity)
}

#[derive(Default)]
struct ApiState {
    requests: Vec<String>,
    login_status: LoginStatus,
    about: String,
    messages: Vec<Message>,
    interests: String,
    upload_url: String,
    markers: Vec<MapMarker>,
    bus_stops: Vec<BusStop>,
    created: Vec<(String, MapMarker)>,
    failing: bool,
}

#[derive(Clone, Default)]
pub struct FakeApi(Rc<RefCell<ApiState>>);

impl FakeApi {
    pub fn requests(&self) -> Vec<String> {
        self.0.borrow().requests.clone()
    }

    pub fn created(&self) -> Vec<(String, MapMarker)> {
        self.0.borrow().created.clone()
    }

    pub fn set_login_status(&self, is_logged_in: bool, username: &str) {
        self.0.borrow_mut().login_status = LoginStatus { is_logged_in, username: username.to_string() };
    }

    pub fn set_about(&self, about: &str) {
        self.0.borrow_mut().about = about.to_string();
    }

    pub fn set_messages_json(&self, json: &str) {
        self.0.borrow_mut().messages = serde_json::from_str(json).unwrap();
    }

    pub fn set_interests(&self, html: &str) {
        self.0.borrow_mut().interests = html.to_string();
    }

    pub fn set_upload_url(&self, url: &str) {
        self.0.borrow_mut().upload_url = url.to_string();
    }

    pub fn set_markers(&self, markers: Vec<MapMarker>) {
        self.0.borrow_mut().markers = markers;
    }

    pub fn set_bus_stops(&self, stops: Vec<BusStop>) {
        self.0.borrow_mut().bus_stops = stops;
    }

    /// Every later request fails with a network error
    pub fn fail_all(&self) {
        self.0.borrow_mut().failing = true;
    }

    fn request<T>(&self, url: String, respond: impl FnOnce(&ApiState) -> T) -> Result<T, ApiError> {
        let mut state = self.0.borrow_mut();
        state.requests.push(url);
        if state.failing {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(respond(&*state))
    }
}

#[async_trait(?Send)]
impl ProfileApi for FakeApi {
    async fn login_status(&self) -> Result<LoginStatus, ApiError> {
        self.request(url(Endpoint::LoginStatus, None), |s| s.login_status.clone())
    }

    async fn about(&self, identity: &ProfileIdentity) -> Result<String, ApiError> {
        self.request(url(Endpoint::About, Some(identity)), |s| s.about.clone())
    }

    async fn messages(&self, identity: &ProfileIdentity) -> Result<Vec<Message>, ApiError> {
        self.request(url(Endpoint::Messages, Some(identity)), |s| s.messages.clone())
    }

    async fn interests(&self, identity: &ProfileIdentity) -> Result<String, ApiError> {
        self.request(url(Endpoint::Interests, Some(identity)), |s| s.interests.clone())
    }

    async fn image_upload_url(&self) -> Result<String, ApiError> {
        self.request(url(Endpoint::ImageUploadUrl, None), |s| s.upload_url.clone())
    }

    async fn markers(&self, identity: &ProfileIdentity) -> Result<Vec<MapMarker>, ApiError> {
        self.request(url(Endpoint::UserMarkers, Some(identity)), |s| s.markers.clone())
    }

    async fn create_marker(&self, identity: &ProfileIdentity, marker: &MapMarker) -> Result<(), ApiError> {
        self.0.borrow_mut().created.push((identity.to_string(), marker.clone()));
        self.request(url(Endpoint::UserMarkers, None), |_| ())
    }

    async fn bus_stops(&self) -> Result<Vec<BusStop>, ApiError> {
        self.request(url(Endpoint::BusStops, None), |s| s.bus_stops.clone())
    }
}

#[derive(Default)]
struct ViewState {
    title: Option<String>,
    slots: HashMap<Slot, Rendered>,
    visible: HashMap<Region, bool>,
    actions: HashMap<Form, String>,
}

#[derive(Clone, Default)]
pub struct FakeView(Rc<RefCell<ViewState>>);

impl FakeView {
    pub fn title(&self) -> Option<String> {
        self.0.borrow().title.clone()
    }

    pub fn slot(&self, slot: Slot) -> Option<Rendered> {
        self.0.borrow().slots.get(&slot).cloned()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.0.borrow().visible.get(&region).copied().unwrap_or(false)
    }

    pub fn form_action(&self, form: Form) -> Option<String> {
        self.0.borrow().actions.get(&form).cloned()
    }
}

impl ProfileView for FakeView {
    fn set_title(&self, identity: &ProfileIdentity) {
        self.0.borrow_mut().title = Some(page_title(identity));
    }

    fn render(&self, slot: Slot, content: Rendered) {
        self.0.borrow_mut().slots.insert(slot, content);
    }

    fn set_visible(&self, region: Region, visible: bool) {
        self.0.borrow_mut().visible.insert(region, visible);
    }

    fn set_form_action(&self, form: Form, action: &str) {
        self.0.borrow_mut().actions.insert(form, action.to_string());
    }
}

#[derive(Default)]
struct MapState {
    markers: Vec<MapMarker>,
    editor: Option<PendingMarker>,
}

#[derive(Clone, Default)]
pub struct FakeMap(Rc<RefCell<MapState>>);

impl FakeMap {
    pub fn markers(&self) -> Vec<MapMarker> {
        self.0.borrow().markers.clone()
    }

    pub fn editor(&self) -> Option<PendingMarker> {
        self.0.borrow().editor
    }
}

impl MapProvider for FakeMap {
    fn add_marker(&self, marker: &MapMarker) {
        self.0.borrow_mut().markers.push(marker.clone());
    }

    fn open_editor(&self, at: PendingMarker) {
        self.0.borrow_mut().editor = Some(at);
    }

    fn close_editor(&self) {
        self.0.borrow_mut().editor = None;
    }
}
