use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::PageConfig;
use crate::controller::{Boot, Fetch, ProfilePageController};
use crate::services::api::HttpProfileApi;
use crate::stores::map_store::{use_map_store, MapStore};
use crate::stores::page_view::{use_page_view, PageView};
use crate::utils::browser::{location_search, replace_location};

pub type PageController = ProfilePageController<HttpProfileApi, PageView, MapStore>;

/// Everything a profile page component needs
#[derive(Clone)]
pub struct ProfilePage {
    pub controller: Rc<PageController>,
    pub view: PageView,
    pub map: MapStore,
}

/// Boot the controller from the current location and start the initial fetches.
///
/// Returns `None` when the page is being redirected away.
pub fn use_profile_page() -> Option<ProfilePage> {
    let view = use_page_view();
    let map = use_map_store();

    let page = use_hook(move || {
        let search = location_search();
        let config = PageConfig::load(&search);
        let api = HttpProfileApi::new(config.api_base.clone());

        match ProfilePageController::boot(&search, config, api, view, map) {
            Boot::Ready(controller) => Some(ProfilePage { controller: Rc::new(controller), view, map }),
            Boot::Redirect(to) => {
                replace_location(to);
                None
            }
        }
    });

    let page_for_start = page.clone();
    use_effect(move || {
        if let Some(page) = &page_for_start {
            let fetches = page.controller.start();
            spawn_fetches(&page.controller, fetches);
        }
    });

    page
}

/// Fire-and-forget each fetch on the UI thread
pub fn spawn_fetches(controller: &Rc<PageController>, fetches: Vec<Fetch>) {
    for fetch in fetches {
        let controller = controller.clone();
        spawn(async move {
            controller.run(fetch).await;
        });
    }
}
