pub mod index;
pub mod matcher;
pub mod widget;

pub use index::build_index;
pub use matcher::{find_matches, normalize, MAX_RESULTS};
pub use widget::{Highlight, PageSurface, Rendered, SearchWidget, Selection};
