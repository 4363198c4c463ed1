use dioxus::prelude::*;

use crate::components::{MapPanel, RenderedSlot, TabBar};
use crate::controller::view::Region;
use crate::controller::Section;
use crate::hooks::{spawn_fetches, use_profile_page};

/// A user's profile page, driven by `?user=`
#[component]
pub fn UserPage() -> Element {
    let page = use_profile_page();

    let Some(page) = page else {
        return rsx! {};
    };

    let view = page.view;
    let map = page.map;
    let layout = page.controller.layout();
    let identity = page.controller.identity().to_string();

    let controller_for_tabs = page.controller.clone();
    let controller_for_click = page.controller.clone();
    let controller_for_submit = page.controller.clone();
    let controller_for_dismiss = page.controller.clone();

    let hidden = |region: Region| if view.is_visible(region) { "" } else { "hidden" };
    let about_class = hidden(Region::AboutSection);
    let about_form_class = hidden(Region::AboutMeForm);
    let messages_class = hidden(Region::MessagesSection);
    let message_form_class = hidden(Region::MessageForm);
    let upload_class = hidden(Region::ImageUpload);
    let interests_class = hidden(Region::InterestsSection);
    let show_map = view.is_visible(Region::Map);
    let active = Section::active(|region| view.is_visible(region)).unwrap_or(Section::About);

    rsx! {
        document::Title { "{view.title}" }

        div {
            class: "max-w-3xl mx-auto p-4 flex flex-col gap-6",

            h1 {
                id: "page-title",
                class: "text-3xl font-bold",
                "{view.heading}"
            }

            if layout.has_tabs() {
                TabBar {
                    active,
                    on_select: move |section: Section| {
                        let fetches = controller_for_tabs.select_section(section);
                        spawn_fetches(&controller_for_tabs, fetches);
                    },
                }
            }

            // About
            section {
                id: "about",
                class: "{about_class}",
                RenderedSlot { id: "about-me-container", content: view.about_me.read().clone() }
                form {
                    id: "about-me-form",
                    class: "mt-4 flex flex-col gap-2 {about_form_class}",
                    action: "{view.about_action}",
                    method: "POST",
                    textarea {
                        name: "about-me",
                        class: "w-full p-2 rounded border border-border bg-background",
                        placeholder: "Enter information about yourself",
                    }
                    button {
                        r#type: "submit",
                        class: "self-end px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                        "Submit"
                    }
                }
            }

            // Messages
            section {
                id: "message",
                class: "{messages_class}",
                form {
                    id: "message-form",
                    class: "mb-4 flex flex-col gap-2 {message_form_class}",
                    action: "{view.message_action}",
                    method: "POST",
                    textarea {
                        name: "text",
                        class: "w-full p-2 rounded border border-border bg-background",
                        placeholder: "Write a message",
                    }
                    button {
                        r#type: "submit",
                        class: "self-end px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                        "Post"
                    }
                }
                form {
                    id: "image-upload-form",
                    class: "mb-4 flex items-center gap-2 {upload_class}",
                    action: "{view.upload_action}",
                    method: "POST",
                    enctype: "multipart/form-data",
                    input { r#type: "hidden", name: "recipient", value: "{identity}" }
                    input { r#type: "file", name: "image", accept: "image/*" }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                        "Upload"
                    }
                }
                RenderedSlot { id: "message-container", content: view.messages.read().clone() }
            }

            // Interests
            section {
                id: "interest",
                class: "{interests_class}",
                RenderedSlot { id: "interest-container", content: view.interests.read().clone() }
            }

            if show_map {
                MapPanel {
                    map,
                    on_click: move |(lat, lng): (f64, f64)| controller_for_click.on_map_click(lat, lng),
                    on_submit: move |content: String| {
                        let controller = controller_for_submit.clone();
                        spawn(async move {
                            controller.submit_marker(&content).await;
                        });
                    },
                    on_dismiss: move |_| controller_for_dismiss.dismiss_marker(),
                }
            }
        }
    }
}
