// Signal-backed state the controller writes into

pub mod map_store;
pub mod page_view;
