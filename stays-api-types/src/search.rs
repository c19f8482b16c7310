use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Declaration order is rank order: sections sort ahead of cards.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Section,
    Card,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Section => "section",
            RecordKind::Card => "card",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flattened, searchable projection of a section or a card.
///
/// `card_index` is `None` exactly when `kind` is [`RecordKind::Section`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchRecord {
    pub kind: RecordKind,
    pub section_index: usize,
    pub card_index: Option<usize>,
    pub title: String,
    pub subtitle: String,
}

impl SearchRecord {
    pub fn section(section_index: usize, title: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Section,
            section_index,
            card_index: None,
            title: title.into(),
            subtitle: "Section".to_string(),
        }
    }

    pub fn card(
        section_index: usize,
        card_index: usize,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            kind: RecordKind::Card,
            section_index,
            card_index: Some(card_index),
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let record = SearchRecord::card(2, 4, "Room in Wayanad", "Wayanad");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""kind":"card""#));
        assert_eq!(RecordKind::Section.to_string(), "section");
    }

    #[test]
    fn section_records_have_no_card_index() {
        let record = SearchRecord::section(0, "Stay in Idukki");
        assert_eq!(record.kind, RecordKind::Section);
        assert_eq!(record.card_index, None);
        assert_eq!(record.subtitle, "Section");
    }
}
