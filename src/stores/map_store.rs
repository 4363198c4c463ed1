use dioxus::prelude::*;

use crate::controller::map::MapProvider;
use crate::models::{MapMarker, PendingMarker};

/// Pins and the open editor, drawn by `MapPanel`
#[derive(Clone, Copy, PartialEq)]
pub struct MapStore {
    pub pins: Signal<Vec<MapMarker>>,
    pub editor: Signal<Option<PendingMarker>>,
}

pub fn use_map_store() -> MapStore {
    MapStore {
        pins: use_signal(Vec::new),
        editor: use_signal(|| None),
    }
}

impl MapProvider for MapStore {
    fn add_marker(&self, marker: &MapMarker) {
        let mut pins = self.pins;
        pins.write().push(marker.clone());
    }

    fn open_editor(&self, at: PendingMarker) {
        let mut editor = self.editor;
        editor.set(Some(at));
    }

    fn close_editor(&self) {
        let mut editor = self.editor;
        editor.set(None);
    }
}
