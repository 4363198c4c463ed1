/// Query string of the current location, including the leading `?`
pub fn location_search() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            match window.location().search() {
                Ok(search) => return search,
                Err(e) => log::error!("Failed to read location: {:?}", e),
            }
        }
    }

    String::new()
}

/// Leave the page without keeping it in history
pub fn replace_location(to: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().replace(to) {
                log::error!("Failed to redirect to {}: {:?}", to, e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    log::info!("Would redirect to {}", to);
}
