use std::sync::Arc;

use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;
use leptos_use::use_window_scroll;
use stays_api_types::SearchRecord;

use crate::{
    components::location_search::LocationSearch, config::SearchWidgets,
    page_elements::ListingElements, scroll::header_collapsed,
};

/// Marker class on `<body>` while the header is collapsed, so page padding can follow.
const BODY_COLLAPSED_CLASS: &str = "header-collapsed";

#[component]
pub fn Header(
    widgets: SearchWidgets,
    records: Arc<[SearchRecord]>,
    elements: ListingElements,
    collapse_offset: f64,
) -> impl IntoView {
    let (_x, y) = use_window_scroll();
    let collapsed = Memo::new(move |_| header_collapsed(y.get(), collapse_offset));

    Effect::new(move |_| {
        let collapsed = collapsed.get();
        if let Some(body) = document().body() {
            if let Err(e) = body
                .class_list()
                .toggle_with_force(BODY_COLLAPSED_CLASS, collapsed)
            {
                log::warn!("unable to toggle {BODY_COLLAPSED_CLASS} {e:?}");
            }
        }
    });

    let SearchWidgets {
        compact,
        where_panel,
        mobile,
    } = widgets;

    view! {
        <header class="header" class:collapsed=move || collapsed.get()>
            <div class="header-top">
                <a class="logo" href="/">
                    <Icon icon=i::FaHouseSolid />
                    <span class="logo-text">"stays"</span>
                </a>
                <LocationSearch
                    config=compact
                    records=records.clone()
                    elements=elements.clone()
                />
                <nav class="header-tabs">
                    <span class="header-tab active">"Homes"</span>
                    <span class="header-tab">"Experiences"</span>
                </nav>
                <div class="header-actions">
                    <button class="avatar-btn" aria-label="Account">
                        <Icon icon=i::AiUserOutlined />
                    </button>
                </div>
            </div>
            <div class="search-bar">
                <LocationSearch
                    config=where_panel
                    records=records.clone()
                    elements=elements.clone()
                />
                <div class="search-field">
                    <span class="search-label">"Check in"</span>
                    <span class="search-value">"Add dates"</span>
                </div>
                <div class="search-field">
                    <span class="search-label">"Check out"</span>
                    <span class="search-value">"Add dates"</span>
                </div>
                <div class="search-field">
                    <span class="search-label">"Who"</span>
                    <span class="search-value">"Add guests"</span>
                </div>
            </div>
            <LocationSearch config=mobile records elements />
        </header>
    }
}
