pub mod error_banner;
pub mod header;
pub mod listing_card;
pub mod listing_section;
pub mod location_search;
pub mod search_result;
