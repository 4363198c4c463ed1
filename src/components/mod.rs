// UI Components

pub mod map_panel;
pub mod rendered_slot;
pub mod tab_bar;
pub mod user_page;

pub use map_panel::MapPanel;
pub use rendered_slot::RenderedSlot;
pub use tab_bar::TabBar;
pub use user_page::UserPage;
