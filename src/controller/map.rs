use crate::models::{MapMarker, PendingMarker};

/// The map widget the page draws on
pub trait MapProvider {
    /// Show a saved marker; clicking it opens a popup with its content
    fn add_marker(&self, marker: &MapMarker);

    /// Show the content editor anchored at `at`
    fn open_editor(&self, at: PendingMarker);

    fn close_editor(&self);
}

/// Tracks the single unsaved marker between a map click and submit/dismiss
#[derive(Debug, Default)]
pub struct MarkerEditor {
    pending: Option<PendingMarker>,
}

impl MarkerEditor {
    /// Start editing at (lat, lng); returns the marker this one replaced, if any
    pub fn begin(&mut self, lat: f64, lng: f64) -> Option<PendingMarker> {
        self.pending.replace(PendingMarker { lat, lng })
    }

    /// Leave editing; the caller decides whether the marker is saved or dropped
    pub fn take(&mut self) -> Option<PendingMarker> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<PendingMarker> {
        self.pending
    }
}
