use std::collections::HashMap;

use dioxus::prelude::*;

use crate::controller::view::{page_title, Form, ProfileView, Region, Rendered, Slot};
use crate::models::ProfileIdentity;

/// Signal-backed page state the controller renders into
#[derive(Clone, Copy, PartialEq)]
pub struct PageView {
    pub title: Signal<String>,
    pub heading: Signal<String>,
    pub about_me: Signal<Option<Rendered>>,
    pub messages: Signal<Option<Rendered>>,
    pub interests: Signal<Option<Rendered>>,
    pub visible: Signal<HashMap<Region, bool>>,
    pub about_action: Signal<String>,
    pub message_action: Signal<String>,
    pub upload_action: Signal<String>,
}

impl PageView {
    pub fn slot(&self, slot: Slot) -> Signal<Option<Rendered>> {
        match slot {
            Slot::AboutMe => self.about_me,
            Slot::Messages => self.messages,
            Slot::Interests => self.interests,
        }
    }

    /// Regions start hidden until the controller says otherwise
    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.read().get(&region).copied().unwrap_or(false)
    }
}

pub fn use_page_view() -> PageView {
    PageView {
        title: use_signal(String::new),
        heading: use_signal(String::new),
        about_me: use_signal(|| None),
        messages: use_signal(|| None),
        interests: use_signal(|| None),
        visible: use_signal(HashMap::new),
        about_action: use_signal(String::new),
        message_action: use_signal(String::new),
        upload_action: use_signal(String::new),
    }
}

impl ProfileView for PageView {
    fn set_title(&self, identity: &ProfileIdentity) {
        let mut title = self.title;
        let mut heading = self.heading;
        title.set(page_title(identity));
        heading.set(identity.to_string());
    }

    fn render(&self, slot: Slot, content: Rendered) {
        let mut target = self.slot(slot);
        target.set(Some(content));
    }

    fn set_visible(&self, region: Region, visible: bool) {
        let mut regions = self.visible;
        regions.write().insert(region, visible);
    }

    fn set_form_action(&self, form: Form, action: &str) {
        let mut target = match form {
            Form::AboutMe => self.about_action,
            Form::Message => self.message_action,
            Form::ImageUpload => self.upload_action,
        };
        target.set(action.to_string());
    }
}
