use dioxus::prelude::*;

use crate::controller::Section;

#[component]
pub fn TabBar(active: Section, on_select: EventHandler<Section>) -> Element {
    rsx! {
        nav {
            class: "flex gap-2 border-b border-border mb-4",
            role: "tablist",
            for section in Section::ALL {
                button {
                    key: "{section.label()}",
                    role: "tab",
                    aria_selected: if section == active { "true" } else { "false" },
                    class: if section == active {
                        "px-4 py-2 font-semibold border-b-2 border-primary"
                    } else {
                        "px-4 py-2 text-muted-foreground hover:text-foreground transition"
                    },
                    onclick: move |_| on_select.call(section),
                    "{section.label()}"
                }
            }
        }
    }
}
