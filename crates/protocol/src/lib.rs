pub mod observation;
pub mod section;
pub mod theme;
pub mod types;
pub mod view;

pub use observation::{
    Length, MarginParseError, ObservationBatch, ObserverConfig, RootMargin, SectionObservation,
};
pub use section::{SectionId, UnknownSection};
pub use theme::ThemeToken;
pub use types::{Rect, Viewport};
pub use view::{NavLink, PageView};
