pub mod use_profile_page;

pub use use_profile_page::{spawn_fetches, use_profile_page};
