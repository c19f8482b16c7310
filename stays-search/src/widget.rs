//! Headless state for one search widget.
//!
//! The page owns the elements; a widget only reaches them through a [`PageSurface`], so the
//! same state machine drives the browser binding and the tests.

use std::sync::Arc;

use stays_api_types::{RecordKind, SearchRecord};
use tracing::debug;

use crate::matcher::{find_matches, normalize};

/// Which highlight class an element carries while it is the widget's selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Highlight {
    Section,
    Card,
}

impl Highlight {
    pub fn class_name(&self) -> &'static str {
        match self {
            Highlight::Section => "search-section-selected",
            Highlight::Card => "search-selected",
        }
    }
}

/// Typed access to rendered listing elements.
///
/// Lookups return `None` while an element isn't mounted; callers treat that as "nothing to
/// do", never as an error.
pub trait PageSurface {
    type Handle;

    fn section(&self, section_index: usize) -> Option<Self::Handle>;
    fn card(&self, section_index: usize, card_index: usize) -> Option<Self::Handle>;
    fn scroll_into_view(&self, element: &Self::Handle);
    fn add_highlight(&self, element: &Self::Handle, highlight: Highlight);
    fn remove_highlight(&self, element: &Self::Handle, highlight: Highlight);
}

/// Content of the results panel. It survives the panel being hidden, the same way the
/// markup stays in place when only the visibility class is removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Rendered {
    #[default]
    Nothing,
    Matches(Vec<SearchRecord>),
    NoMatches,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Section(usize),
    Card {
        section_index: usize,
        card_index: usize,
    },
}

#[derive(Clone, Debug)]
pub struct SearchWidget {
    records: Arc<[SearchRecord]>,
    input: String,
    rendered: Rendered,
    panel_visible: bool,
    selection: Selection,
}

impl SearchWidget {
    pub fn new(records: Arc<[SearchRecord]>) -> Self {
        Self {
            records,
            input: String::new(),
            rendered: Rendered::Nothing,
            panel_visible: false,
            selection: Selection::None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    /// Rendered result entries, empty when the panel shows nothing or "no matches".
    pub fn results(&self) -> &[SearchRecord] {
        match &self.rendered {
            Rendered::Matches(records) => records,
            Rendered::Nothing | Rendered::NoMatches => &[],
        }
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Recomputes suggestions for `text`. Clearing the input also drops the highlight.
    pub fn on_input<S: PageSurface>(&mut self, text: &str, surface: &S) {
        self.input = text.to_string();
        if normalize(text).is_empty() {
            self.rendered = Rendered::Nothing;
            self.panel_visible = false;
            self.clear_selection(surface);
            return;
        }
        let matches = find_matches(&self.records, text);
        self.rendered = if matches.is_empty() {
            Rendered::NoMatches
        } else {
            Rendered::Matches(matches)
        };
        self.panel_visible = true;
    }

    /// Activates the first rendered result. Returns whether anything was activated.
    pub fn on_submit<S: PageSurface>(&mut self, surface: &S) -> bool {
        let Some(first) = self.results().first().cloned() else {
            return false;
        };
        self.activate(&first, surface);
        true
    }

    /// Navigates to `record` and makes it the widget's only highlighted element.
    pub fn activate<S: PageSurface>(&mut self, record: &SearchRecord, surface: &S) {
        self.input = record.title.clone();
        self.panel_visible = false;
        self.clear_selection(surface);

        match (record.kind, record.card_index) {
            (RecordKind::Section, _) => {
                let Some(section) = surface.section(record.section_index) else {
                    debug!(section = record.section_index, "section not mounted");
                    return;
                };
                surface.scroll_into_view(&section);
                surface.add_highlight(&section, Highlight::Section);
                self.selection = Selection::Section(record.section_index);
            }
            (RecordKind::Card, Some(card_index)) => {
                // the section is scrolled so its carousel brings the card on screen
                let section = surface.section(record.section_index);
                let card = surface.card(record.section_index, card_index);
                let (Some(section), Some(card)) = (section, card) else {
                    debug!(
                        section = record.section_index,
                        card = card_index,
                        "card not mounted"
                    );
                    return;
                };
                surface.scroll_into_view(&section);
                surface.add_highlight(&card, Highlight::Card);
                self.selection = Selection::Card {
                    section_index: record.section_index,
                    card_index,
                };
            }
            (RecordKind::Card, None) => {
                debug!(section = record.section_index, "card record without index");
            }
        }
    }

    /// Pointer interaction outside the widget: hide the panel, keep text and selection.
    pub fn dismiss(&mut self) {
        self.panel_visible = false;
    }

    fn clear_selection<S: PageSurface>(&mut self, surface: &S) {
        match std::mem::take(&mut self.selection) {
            Selection::None => {}
            Selection::Section(section_index) => {
                if let Some(section) = surface.section(section_index) {
                    surface.remove_highlight(&section, Highlight::Section);
                }
            }
            Selection::Card {
                section_index,
                card_index,
            } => {
                if let Some(card) = surface.card(section_index, card_index) {
                    surface.remove_highlight(&card, Highlight::Card);
                }
            }
        }
    }
}
