//! The page as the controller sees it: named regions to show or hide and
//! slots whose content is replaced wholesale.

use crate::models::ProfileIdentity;

/// Regions whose visibility the controller toggles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    AboutSection,
    AboutMeForm,
    MessagesSection,
    MessageForm,
    ImageUpload,
    InterestsSection,
    Map,
}

/// Containers whose inner content is replaced by a fetcher
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    AboutMe,
    Messages,
    Interests,
}

/// Forms whose submission target is set at runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    AboutMe,
    Message,
    ImageUpload,
}

/// One rendered message: a plain-text header and a trusted HTML body
#[derive(Clone, Debug, PartialEq)]
pub struct MessageCard {
    pub header: String,
    pub body_html: String,
}

/// Content for a slot
#[derive(Clone, Debug, PartialEq)]
pub enum Rendered {
    /// Raw markup injected as-is
    Markup(String),
    Cards(Vec<MessageCard>),
}

pub trait ProfileView {
    /// Document title and page heading
    fn set_title(&self, identity: &ProfileIdentity);

    /// Replace everything in `slot` with `content`
    fn render(&self, slot: Slot, content: Rendered);

    fn set_visible(&self, region: Region, visible: bool);

    fn set_form_action(&self, form: Form, action: &str);
}

/// Document title for a profile page
pub fn page_title(identity: &ProfileIdentity) -> String {
    format!("{} - User Page", identity)
}
