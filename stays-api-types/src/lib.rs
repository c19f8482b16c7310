mod listing;

pub mod search;

pub use listing::{Card, Section};
pub use search::{RecordKind, SearchRecord};
