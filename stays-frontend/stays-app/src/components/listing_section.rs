use icondata as i;
use leptos::{ev, html::Div, prelude::*};
use leptos_icons::*;
use leptos_use::{use_event_listener, use_window};
use stays_api_types::Section;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    components::listing_card::{ListingCard, SeeAllCard},
    config::CarouselConfig,
    page_elements::ListingElements,
    scroll::{carousel_edges, carousel_step, parse_css_length, CarouselEdges},
};

/// Width of one prev/next click, measured from the first tile and the track's gap.
fn measure_step(track: &web_sys::HtmlDivElement, carousel: &CarouselConfig) -> f64 {
    let tile_width = track
        .query_selector(".listing-card, .see-all-card")
        .ok()
        .flatten()
        .map(|tile| tile.get_bounding_client_rect().width());
    let gap = window()
        .get_computed_style(track)
        .ok()
        .flatten()
        .and_then(|style| {
            ["column-gap", "gap"]
                .into_iter()
                .filter_map(|property| style.get_property_value(property).ok())
                .find(|value| !value.is_empty())
        })
        .map(|value| parse_css_length(&value))
        .unwrap_or_default();
    carousel_step(tile_width, gap, carousel)
}

/// One titled carousel of stays with prev/next stepping.
#[component]
pub fn ListingSection(
    index: usize,
    section: Section,
    elements: ListingElements,
    carousel: CarouselConfig,
) -> impl IntoView {
    let viewport = NodeRef::<Div>::new();
    let track = NodeRef::<Div>::new();
    let (edges, set_edges) = signal(CarouselEdges::default());

    let update_buttons = move || {
        if let Some(viewport) = viewport.get_untracked() {
            set_edges.set(carousel_edges(
                f64::from(viewport.scroll_left()),
                f64::from(viewport.scroll_width()),
                f64::from(viewport.client_width()),
                carousel.edge_tolerance,
            ));
        }
    };

    // measure once the viewport is mounted
    Effect::new(move |_| {
        if viewport.get().is_some() {
            update_buttons();
        }
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| update_buttons());

    let step_by = move |direction: f64| {
        let (Some(viewport), Some(track)) = (viewport.get_untracked(), track.get_untracked())
        else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_left(direction * measure_step(&track, &carousel));
        options.set_behavior(ScrollBehavior::Smooth);
        viewport.scroll_by_with_scroll_to_options(&options);
    };

    let see_all = section
        .show_see_all
        .then(|| view! { <SeeAllCard section=section.clone() /> });
    let cards = section
        .cards
        .iter()
        .cloned()
        .enumerate()
        .map(|(card_index, card)| {
            view! {
                <ListingCard
                    card
                    section_index=index
                    card_index
                    card_ref=elements.card_ref(index, card_index)
                />
            }
        })
        .collect_view();

    view! {
        <section
            node_ref=elements.section_ref(index)
            class="listing-swiper"
            data-swiper-index=index.to_string()
        >
            <div class="swiper-head">
                <h2 class="swiper-title">
                    {section.title.clone()}
                    " "
                    <span class="title-arrow">"\u{2192}"</span>
                </h2>
                <div class="swiper-controls">
                    <button
                        class="swiper-btn swiper-prev"
                        aria-label="Previous listings"
                        prop:disabled=move || edges.get().at_start
                        on:click=move |_| step_by(-1.0)
                    >
                        <Icon icon=i::BsChevronLeft />
                    </button>
                    <button
                        class="swiper-btn swiper-next"
                        aria-label="Next listings"
                        prop:disabled=move || edges.get().at_end
                        on:click=move |_| step_by(1.0)
                    >
                        <Icon icon=i::BsChevronRight />
                    </button>
                </div>
            </div>
            <div node_ref=viewport class="swiper-viewport" on:scroll=move |_| update_buttons()>
                <div node_ref=track class="swiper-track">
                    {cards}
                    {see_all}
                </div>
            </div>
        </section>
    }
}
