use serde::{Deserialize, Serialize};

/// A titled horizontal group of stays. A section is identified by its position in the
/// listing, which never changes for the lifetime of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Whether the carousel ends with a "See all" tile.
    pub show_see_all: bool,
    pub cards: Vec<Card>,
}

/// A single stay. Identified by `(section index, card index)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    /// Already formatted for display, without the currency symbol.
    pub price: String,
    pub nights: String,
    pub rating: String,
    pub image: String,
    pub guest_favorite: bool,
}
