use stays_api_types::{SearchRecord, Section};
use tracing::debug;

/// Card titles read "<stay type> in <place>"; the place is whatever follows the last
/// occurrence of this separator.
pub const LOCATION_SEPARATOR: &str = " in ";

/// Flattens the listing into search records: each section followed by its cards, in
/// display order.
pub fn build_index(sections: &[Section]) -> Vec<SearchRecord> {
    let mut records = Vec::with_capacity(
        sections.len() + sections.iter().map(|s| s.cards.len()).sum::<usize>(),
    );
    for (section_index, section) in sections.iter().enumerate() {
        records.push(SearchRecord::section(section_index, section.title.as_str()));
        for (card_index, card) in section.cards.iter().enumerate() {
            records.push(SearchRecord::card(
                section_index,
                card_index,
                card.title.as_str(),
                card_location(&card.title, &section.title),
            ));
        }
    }
    debug!(records = records.len(), "search index built");
    records
}

fn card_location<'a>(card_title: &'a str, section_title: &'a str) -> &'a str {
    if !card_title.contains(LOCATION_SEPARATOR) {
        return section_title;
    }
    card_title
        .rsplit(LOCATION_SEPARATOR)
        .next()
        .filter(|place| !place.is_empty())
        .unwrap_or(section_title)
}
