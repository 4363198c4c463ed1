use dioxus::prelude::*;

use crate::controller::view::{MessageCard, Rendered};

/// Server content for one slot. Nothing is drawn until the first fetch lands.
#[component]
pub fn RenderedSlot(id: String, #[props(!optional)] content: Option<Rendered>) -> Element {
    match content {
        None => rsx! {
            div { id: "{id}", class: "hidden" }
        },
        Some(Rendered::Markup(html)) => rsx! {
            div {
                id: "{id}",
                class: "prose dark:prose-invert max-w-none",
                dangerous_inner_html: "{html}",
            }
        },
        Some(Rendered::Cards(cards)) => rsx! {
            div {
                id: "{id}",
                class: "flex flex-col gap-3",
                for (index, card) in cards.into_iter().enumerate() {
                    MessageCardView { key: "{index}", card }
                }
            }
        },
    }
}

#[component]
fn MessageCardView(card: MessageCard) -> Element {
    rsx! {
        div {
            class: "message-div border border-border rounded-xl p-4",
            div {
                class: "message-header text-sm text-muted-foreground mb-2",
                "{card.header}"
            }
            div {
                class: "message-body",
                dangerous_inner_html: "{card.body_html}",
            }
        }
    }
}
