use std::{collections::HashMap, sync::Arc};

use leptos::{html, prelude::*};
use stays_api_types::Section;
use stays_search::{Highlight, PageSurface};
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Typed lookup from listing positions to the rendered section and card elements.
///
/// Refs are created up front from the listing and filled in when the carousels mount, so
/// a lookup before that point simply finds nothing.
#[derive(Clone)]
pub struct ListingElements {
    sections: Arc<Vec<NodeRef<html::Section>>>,
    cards: Arc<HashMap<(usize, usize), NodeRef<html::Article>>>,
}

impl ListingElements {
    pub fn for_listing(sections: &[Section]) -> Self {
        let cards = sections
            .iter()
            .enumerate()
            .flat_map(|(section_index, section)| {
                (0..section.cards.len())
                    .map(move |card_index| ((section_index, card_index), NodeRef::new()))
            })
            .collect();
        Self {
            sections: Arc::new(sections.iter().map(|_| NodeRef::new()).collect()),
            cards: Arc::new(cards),
        }
    }

    /// Ref to attach to a section container. Positions outside the listing get a detached
    /// ref that lookups never see.
    pub fn section_ref(&self, section_index: usize) -> NodeRef<html::Section> {
        self.sections
            .get(section_index)
            .copied()
            .unwrap_or_else(NodeRef::new)
    }

    pub fn card_ref(&self, section_index: usize, card_index: usize) -> NodeRef<html::Article> {
        self.cards
            .get(&(section_index, card_index))
            .copied()
            .unwrap_or_else(NodeRef::new)
    }
}

impl PageSurface for ListingElements {
    type Handle = HtmlElement;

    fn section(&self, section_index: usize) -> Option<HtmlElement> {
        self.sections.get(section_index)?.get_untracked()
    }

    fn card(&self, section_index: usize, card_index: usize) -> Option<HtmlElement> {
        self.cards.get(&(section_index, card_index))?.get_untracked()
    }

    fn scroll_into_view(&self, element: &HtmlElement) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn add_highlight(&self, element: &HtmlElement, highlight: Highlight) {
        if let Err(e) = element.class_list().add_1(highlight.class_name()) {
            log::warn!("unable to add {} class {e:?}", highlight.class_name());
        }
    }

    fn remove_highlight(&self, element: &HtmlElement, highlight: Highlight) {
        if let Err(e) = element.class_list().remove_1(highlight.class_name()) {
            log::warn!("unable to remove {} class {e:?}", highlight.class_name());
        }
    }
}
