use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// Which page variant is active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One section visible at a time, switched with tabs
    #[default]
    #[serde(rename = "tabs", alias = "tabbed")]
    Tabbed,
    /// Every section shown at once, plus the marker map
    Map,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Tabbed => "tabs",
            Layout::Map => "map",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tabs" | "tabbed" => Some(Layout::Tabbed),
            "map" => Some(Layout::Map),
            _ => None,
        }
    }

    pub fn has_tabs(&self) -> bool {
        matches!(self, Layout::Tabbed)
    }

    pub fn has_map(&self) -> bool {
        matches!(self, Layout::Map)
    }
}

/// Page configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub layout: Layout,
    /// Show the `/bus-stops` layer on the map
    pub show_bus_stops: bool,
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
}

const STORAGE_KEY: &str = "profile_page_config";

impl PageConfig {
    /// Load the stored config, then apply `?layout=` from the location query
    pub fn load(search: &str) -> Self {
        let mut config = match LocalStorage::get::<PageConfig>(STORAGE_KEY) {
            Ok(config) => {
                log::info!("Loaded page config from storage: {:?}", config);
                config
            }
            Err(e) => {
                log::debug!("No stored page config ({}), using defaults", e);
                PageConfig::default()
            }
        };

        config.apply_query(search);
        config
    }

    /// Override fields from the location query string
    pub fn apply_query(&mut self, search: &str) {
        let query = search.strip_prefix('?').unwrap_or(search);
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key == "layout" {
                match Layout::parse(&value) {
                    Some(layout) => self.layout = layout,
                    None => log::warn!("Ignoring unknown layout '{}'", value),
                }
            }
        }
    }
}
