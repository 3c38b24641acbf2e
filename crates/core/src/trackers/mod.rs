pub mod active_section;
pub mod elevation;
pub mod menu;

pub use active_section::{ActiveSectionTracker, TrackerState, select_section};
pub use elevation::ScrollElevationTracker;
pub use menu::MobileMenuController;
