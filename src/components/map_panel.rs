use dioxus::prelude::*;

use crate::stores::map_store::MapStore;
use crate::utils::projection::{lat_lng_to_percent, point_to_lat_lng, MAP_HEIGHT_PX, MAP_WIDTH_PX};

/// Marker map: saved pins with click popups, plus the editor for a new marker
#[component]
pub fn MapPanel(
    map: MapStore,
    on_click: EventHandler<(f64, f64)>,
    on_submit: EventHandler<String>,
    on_dismiss: EventHandler<()>,
) -> Element {
    let mut open_popup = use_signal(|| None::<usize>);
    let mut draft = use_signal(String::new);

    let pins = map.pins.read().clone();
    let editor = *map.editor.read();

    rsx! {
        div {
            id: "map",
            class: "relative overflow-hidden rounded-xl border border-border bg-muted cursor-crosshair",
            style: "width: {MAP_WIDTH_PX}px; height: {MAP_HEIGHT_PX}px;",
            onclick: move |evt| {
                let point = evt.element_coordinates();
                let (lat, lng) = point_to_lat_lng(point.x, point.y);
                open_popup.set(None);
                draft.set(String::new());
                on_click.call((lat, lng));
            },

            for (index, pin) in pins.into_iter().enumerate() {
                {
                    let (left, top) = lat_lng_to_percent(pin.lat, pin.lng);
                    rsx! {
                        div {
                            key: "{index}",
                            class: "absolute -translate-x-1/2 -translate-y-full",
                            style: "left: {left}%; top: {top}%;",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                let current = *open_popup.read();
                                open_popup.set(if current == Some(index) { None } else { Some(index) });
                            },
                            span { class: "block w-3 h-3 rounded-full bg-primary border-2 border-white shadow" }
                            if *open_popup.read() == Some(index) {
                                div {
                                    class: "absolute bottom-4 left-1/2 -translate-x-1/2 bg-card border border-border rounded-lg p-2 shadow-xl min-w-32 text-sm",
                                    dangerous_inner_html: "{pin.content}",
                                }
                            }
                        }
                    }
                }
            }

            if let Some(pending) = editor {
                {
                    let (left, top) = lat_lng_to_percent(pending.lat, pending.lng);
                    rsx! {
                        div {
                            class: "absolute -translate-x-1/2 -translate-y-full bg-card border border-border rounded-lg p-2 shadow-xl flex flex-col gap-2",
                            style: "left: {left}%; top: {top}%;",
                            onclick: move |evt| evt.stop_propagation(),
                            div {
                                class: "flex justify-end",
                                button {
                                    class: "text-muted-foreground hover:text-foreground",
                                    aria_label: "Close",
                                    onclick: move |_| {
                                        draft.set(String::new());
                                        on_dismiss.call(());
                                    },
                                    "×"
                                }
                            }
                            textarea {
                                class: "w-48 p-2 rounded border border-border bg-background text-sm",
                                value: "{draft}",
                                oninput: move |evt| draft.set(evt.value()),
                            }
                            button {
                                class: "px-3 py-1 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                                onclick: move |_| {
                                    let content = draft.read().clone();
                                    draft.set(String::new());
                                    on_submit.call(content);
                                },
                                "Submit"
                            }
                        }
                    }
                }
            }
        }
    }
}
