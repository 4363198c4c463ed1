use crate::controller::view::{MessageCard, Rendered};
use crate::models::Message;
use crate::utils::time::format_message_timestamp;

pub const ABOUT_ME_PLACEHOLDER: &str = "This user has not entered any information yet.";
pub const NO_MESSAGES_PLACEHOLDER: &str = "<p>This user has no posts yet.</p>";

pub fn render_about_me(about_me: String) -> Rendered {
    if about_me.is_empty() {
        Rendered::Markup(ABOUT_ME_PLACEHOLDER.to_string())
    } else {
        Rendered::Markup(about_me)
    }
}

/// Cards in server order, or the placeholder when there are none
pub fn render_messages(messages: &[Message]) -> Rendered {
    if messages.is_empty() {
        return Rendered::Markup(NO_MESSAGES_PLACEHOLDER.to_string());
    }

    Rendered::Cards(messages.iter().map(message_card).collect())
}

pub fn message_card(message: &Message) -> MessageCard {
    MessageCard {
        header: format!("{} - {}", message.user, format_message_timestamp(message.timestamp)),
        body_html: message.text.clone(),
    }
}

pub fn render_interests(fragment: String) -> Rendered {
    Rendered::Markup(fragment)
}
