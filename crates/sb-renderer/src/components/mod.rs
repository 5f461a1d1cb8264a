//! Presentational fragments: tip callout, feature grid, landing page,
//! sidebar menu and the page layout around them.
//!
//! Every component is a pure function from data to an HTML string.

mod features;
mod landing;
mod layout;
mod sidebar;
mod tip;

pub use features::{DEFAULT_FEATURES, Feature, render_features};
pub use landing::render_landing;
pub use layout::{LayoutContext, PageContent, PageLink, Pagination, render_page};
pub use sidebar::{DocLookup, render_sidebar};
pub use tip::{DEFAULT_TIP_TITLE, TIP_CLOSE, TipDirective, render_tip, tip_open};
