//! Equirectangular projection for the marker map
//!
//! The map panel is a fixed-size plane: x spans longitude -180..180 left to
//! right, y spans latitude 90..-90 top to bottom.

pub const MAP_WIDTH_PX: f64 = 720.0;
pub const MAP_HEIGHT_PX: f64 = 360.0;

/// Convert a click position inside the map panel to (lat, lng)
pub fn point_to_lat_lng(x: f64, y: f64) -> (f64, f64) {
    let x = x.clamp(0.0, MAP_WIDTH_PX);
    let y = y.clamp(0.0, MAP_HEIGHT_PX);
    let lat = 90.0 - (y / MAP_HEIGHT_PX) * 180.0;
    let lng = (x / MAP_WIDTH_PX) * 360.0 - 180.0;
    (lat, lng)
}

/// Position of (lat, lng) as percentages (left, top) of the panel
pub fn lat_lng_to_percent(lat: f64, lng: f64) -> (f64, f64) {
    let left = (lng.clamp(-180.0, 180.0) + 180.0) / 360.0 * 100.0;
    let top = (90.0 - lat.clamp(-90.0, 90.0)) / 180.0 * 100.0;
    (left, top)
}
