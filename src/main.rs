#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod config;
mod controller;
mod hooks;
mod models;
mod services;
mod stores;
mod utils;

use components::UserPage;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting profile page");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        UserPage {}
    }
}
