pub mod config;
pub mod content;
pub mod effects;
pub mod html;
pub mod observer;
pub mod shell;
pub mod text;
pub mod trackers;

pub use config::{ConfigError, SiteConfig};
pub use effects::{EffectError, FragmentStore, MemoryFragmentStore, ScrollLock, SharedScrollLock};
pub use observer::ViewportObserver;
pub use shell::{PageShell, ShellUpdate};
pub use trackers::{ActiveSectionTracker, MobileMenuController, ScrollElevationTracker};
