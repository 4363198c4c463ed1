//! Profile page controller
//!
//! Owns the page's identity and unsaved marker, and turns
//! server responses into view updates. Every fetch is an independent unit of
//! work (`Fetch`) that callers may run in any order, or concurrently on the
//! UI thread; each one touches its own slot or region only.

pub mod map;
pub mod render;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

use std::cell::RefCell;

use crate::config::{Layout, PageConfig};
use crate::models::{MapMarker, PendingMarker, ProfileIdentity};
use crate::services::api::{about_me_form_action, message_form_action, ProfileApi};
use crate::services::error::ApiError;

use map::{MapProvider, MarkerEditor};
use view::{Form, ProfileView, Region, Slot};

/// Where the page goes when there is no `?user=`
pub const FALLBACK_LOCATION: &str = "/";

/// Result of reading the location at page load
pub enum Boot<C> {
    Ready(C),
    Redirect(&'static str),
}

/// A mutually exclusive tab of content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Messages,
    Interests,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Messages, Section::Interests];

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Messages => "Messages",
            Section::Interests => "Interests",
        }
    }

    pub fn region(&self) -> Region {
        match self {
            Section::About => Region::AboutSection,
            Section::Messages => Region::MessagesSection,
            Section::Interests => Region::InterestsSection,
        }
    }

    /// The first section whose region is shown; the view is the source of truth for tabs
    pub fn active(is_visible: impl Fn(Region) -> bool) -> Option<Section> {
        Section::ALL.into_iter().find(|section| is_visible(section.region()))
    }

    fn fetches(&self) -> Vec<Fetch> {
        match self {
            Section::About => vec![Fetch::AboutMe],
            Section::Messages => vec![Fetch::SelfView, Fetch::Messages],
            Section::Interests => vec![Fetch::Interests],
        }
    }
}

/// One independent request/render cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fetch {
    AboutMe,
    Messages,
    Interests,
    /// Login status, and the posting affordances that depend on it
    SelfView,
    Markers,
    BusStops,
}

pub struct ProfilePageController<A, V, M> {
    identity: ProfileIdentity,
    config: PageConfig,
    api: A,
    view: V,
    map: M,
    editor: RefCell<MarkerEditor>,
}

impl<A, V, M> ProfilePageController<A, V, M>
where
    A: ProfileApi,
    V: ProfileView,
    M: MapProvider,
{
    /// Build a controller for the page at `search`, or say where to go instead
    pub fn boot(search: &str, config: PageConfig, api: A, view: V, map: M) -> Boot<Self> {
        match ProfileIdentity::from_query(search) {
            Some(identity) => {
                log::info!("Profile page for {} ({} layout)", identity, config.layout.as_str());
                Boot::Ready(Self {
                    identity,
                    config,
                    api,
                    view,
                    map,
                    editor: RefCell::new(MarkerEditor::default()),
                })
            }
            None => {
                log::info!("No user in location, redirecting to {}", FALLBACK_LOCATION);
                Boot::Redirect(FALLBACK_LOCATION)
            }
        }
    }

    pub fn identity(&self) -> &ProfileIdentity {
        &self.identity
    }

    pub fn layout(&self) -> Layout {
        self.config.layout
    }

    #[allow(dead_code)]
    pub fn pending_marker(&self) -> Option<PendingMarker> {
        self.editor.borrow().pending()
    }

    /// Set the title and initial visibility; returns the fetches to kick off
    pub fn start(&self) -> Vec<Fetch> {
        self.view.set_title(&self.identity);
        self.view.set_form_action(Form::AboutMe, &about_me_form_action(&self.config.api_base));
        self.view.set_visible(Region::AboutMeForm, false);
        self.view.set_visible(Region::MessageForm, false);
        self.view.set_visible(Region::ImageUpload, false);
        self.view.set_visible(Region::Map, self.config.layout.has_map());

        match self.config.layout {
            Layout::Tabbed => {
                let mut fetches = vec![Fetch::SelfView];
                fetches.extend(self.show_section(Section::About));
                fetches
            }
            Layout::Map => {
                for section in Section::ALL {
                    self.view.set_visible(section.region(), true);
                }
                let mut fetches = vec![
                    Fetch::SelfView,
                    Fetch::AboutMe,
                    Fetch::Messages,
                    Fetch::Interests,
                    Fetch::Markers,
                ];
                if self.config.show_bus_stops {
                    fetches.push(Fetch::BusStops);
                }
                fetches
            }
        }
    }

    /// Switch tabs; returns the fetches that refresh the selected section
    pub fn select_section(&self, section: Section) -> Vec<Fetch> {
        if !self.config.layout.has_tabs() {
            log::debug!("Ignoring {} tab, every section is shown", section.label());
            return Vec::new();
        }

        self.show_section(section)
    }

    fn show_section(&self, section: Section) -> Vec<Fetch> {
        for other in Section::ALL {
            self.view.set_visible(other.region(), other == section);
        }
        section.fetches()
    }

    /// Run one fetch to completion. Failures are logged and leave the page as it was.
    pub async fn run(&self, fetch: Fetch) {
        let result = match fetch {
            Fetch::AboutMe => self.load_about_me().await,
            Fetch::Messages => self.load_messages().await,
            Fetch::Interests => self.load_interests().await,
            Fetch::SelfView => self.load_self_view().await,
            Fetch::Markers => self.load_markers().await,
            Fetch::BusStops => self.load_bus_stops().await,
        };

        if let Err(e) = result {
            log::warn!("{:?} fetch for {} failed: {}", fetch, self.identity, e);
        }
    }

    async fn load_about_me(&self) -> Result<(), ApiError> {
        let about_me = self.api.about(&self.identity).await?;
        self.view.render(Slot::AboutMe, render::render_about_me(about_me));
        Ok(())
    }

    async fn load_messages(&self) -> Result<(), ApiError> {
        let messages = self.api.messages(&self.identity).await?;
        log::debug!("Loaded {} messages for {}", messages.len(), self.identity);
        self.view.render(Slot::Messages, render::render_messages(&messages));
        Ok(())
    }

    async fn load_interests(&self) -> Result<(), ApiError> {
        let fragment = self.api.interests(&self.identity).await?;
        self.view.render(Slot::Interests, render::render_interests(fragment));
        Ok(())
    }

    /// The about-me form is offered to everyone; posting only to the page owner
    async fn load_self_view(&self) -> Result<(), ApiError> {
        self.view.set_visible(Region::AboutMeForm, true);

        let status = self.api.login_status().await?;
        if !status.is_viewing(&self.identity) {
            log::debug!("Not viewing own page, posting stays hidden");
            return Ok(());
        }

        self.view.set_form_action(Form::Message, &message_form_action(&self.config.api_base, &self.identity));
        self.view.set_visible(Region::MessageForm, true);

        let upload_url = self.api.image_upload_url().await?;
        self.view.set_form_action(Form::ImageUpload, &upload_url);
        self.view.set_visible(Region::ImageUpload, true);
        Ok(())
    }

    async fn load_markers(&self) -> Result<(), ApiError> {
        let markers = self.api.markers(&self.identity).await?;
        for marker in &markers {
            self.map.add_marker(marker);
        }
        Ok(())
    }

    async fn load_bus_stops(&self) -> Result<(), ApiError> {
        let stops = self.api.bus_stops().await?;
        for stop in stops {
            self.map.add_marker(&MapMarker::from(stop));
        }
        Ok(())
    }

    /// A click on the map starts a new unsaved marker, discarding any previous one
    pub fn on_map_click(&self, lat: f64, lng: f64) {
        if !self.config.layout.has_map() {
            return;
        }

        let replaced = self.editor.borrow_mut().begin(lat, lng);
        if replaced.is_some() {
            self.map.close_editor();
        }
        self.map.open_editor(PendingMarker { lat, lng });
    }

    /// Save the unsaved marker with `content`. The marker is drawn right away;
    /// the create request's outcome is only logged.
    pub async fn submit_marker(&self, content: &str) {
        let pending = self.editor.borrow_mut().take();
        let Some(pending) = pending else {
            log::debug!("Marker submit with nothing pending");
            return;
        };

        let marker = pending.with_content(content);
        self.map.close_editor();
        self.map.add_marker(&marker);

        if let Err(e) = self.api.create_marker(&self.identity, &marker).await {
            log::warn!("Failed to save marker at ({}, {}): {}", marker.lat, marker.lng, e);
        }
    }

    /// Drop the unsaved marker; nothing is sent
    pub fn dismiss_marker(&self) {
        let pending = self.editor.borrow_mut().take();
        match pending {
            Some(pending) => {
                log::debug!("Discarding unsaved marker at ({}, {})", pending.lat, pending.lng);
                self.map.close_editor();
            }
            None => log::debug!("Marker dismiss with nothing pending"),
        }
    }
}
