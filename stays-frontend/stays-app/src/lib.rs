pub mod components;
pub mod config;
pub mod error;
pub mod page_elements;
pub mod scroll;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use stays_api_types::{SearchRecord, Section};
use stays_gen::generate_listing;
use stays_search::build_index;
use tracing::info;

use crate::components::{
    error_banner::ErrorBanner, header::Header, listing_section::ListingSection,
};
use crate::config::PageConfig;
use crate::error::AppResult;
use crate::page_elements::ListingElements;

/// Everything derived from the configuration at startup. Built once and handed down to
/// the components that need it.
#[derive(Clone, Debug)]
pub struct PageData {
    pub sections: Arc<[Section]>,
    pub records: Arc<[SearchRecord]>,
}

impl PageData {
    pub fn load(config: &PageConfig) -> AppResult<Self> {
        let sections = generate_listing(&config.listing)?;
        let records = build_index(&sections);
        info!(
            sections = sections.len(),
            records = records.len(),
            "listing ready"
        );
        Ok(Self {
            sections: sections.into(),
            records: records.into(),
        })
    }
}

#[component]
pub fn App(#[prop(optional)] config: PageConfig) -> impl IntoView {
    provide_meta_context();

    let page = match PageData::load(&config) {
        Ok(page) => page,
        Err(error) => {
            log::error!("unable to build the page: {error}");
            return view! { <ErrorBanner error /> }.into_any();
        }
    };
    let elements = ListingElements::for_listing(&page.sections);
    let carousel = config.carousel;
    let sections = page
        .sections
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, section)| {
            view! {
                <ListingSection index section elements=elements.clone() carousel />
            }
        })
        .collect_view();

    view! {
        <Title text="Stays in Kerala, Goa and Bengaluru" />
        <Header
            widgets=config.widgets
            records=page.records
            elements
            collapse_offset=config.collapse_offset
        />
        <main class="listing-main">
            <div id="swiper-sections">{sections}</div>
        </main>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use stays_gen::GenError;

    #[test]
    fn page_data_indexes_listing() {
        let page = PageData::load(&PageConfig::default()).unwrap();
        assert_eq!(page.sections.len(), 9);
        assert_eq!(page.records.len(), 81);
        assert_eq!(page.records[0].title, page.sections[0].title);
    }

    #[test]
    fn invalid_listing_is_reported() {
        let mut config = PageConfig::default();
        config.listing.cards_per_section = 0;
        assert_eq!(
            PageData::load(&config).unwrap_err(),
            AppError::Listing(GenError::NoCards)
        );
    }
}
