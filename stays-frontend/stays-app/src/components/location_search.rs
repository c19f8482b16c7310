use std::sync::Arc;

use icondata as i;
use leptos::{
    ev,
    html::{Div, Input},
    prelude::*,
};
use leptos_icons::*;
use leptos_use::{use_document, use_event_listener};
use stays_api_types::SearchRecord;
use stays_search::{Rendered, SearchWidget};
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::{
    components::search_result::SearchResultItem, config::SearchWidgetConfig,
    page_elements::ListingElements,
};

/// Class of the trigger button inside a widget. Clicking it submits instead of focusing.
const SEARCH_TRIGGER_CLASS: &str = "search-btn";

/// Selector for the parts of a widget whose clicks must not pull focus back into the
/// input: the trigger and the results panel.
fn focus_exempt_selector(panel_class: &str) -> String {
    let panel = panel_class
        .split_whitespace()
        .map(|class| format!(".{class}"))
        .collect::<String>();
    if panel.is_empty() {
        format!(".{SEARCH_TRIGGER_CLASS}")
    } else {
        format!(".{SEARCH_TRIGGER_CLASS}, {panel}")
    }
}

fn clicked_within(ev: &MouseEvent, selector: &str) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// A search input with its own results panel and selection. Every instance shares the
/// records but nothing else.
#[component]
pub fn LocationSearch(
    config: SearchWidgetConfig,
    records: Arc<[SearchRecord]>,
    elements: ListingElements,
) -> impl IntoView {
    let root = NodeRef::<Div>::new();
    let panel = NodeRef::<Div>::new();
    let text_input = NodeRef::<Input>::new();
    let widget = RwSignal::new(SearchWidget::new(records));

    let on_input = {
        let elements = elements.clone();
        move |e: ev::Event| {
            let text = event_target_value(&e);
            widget.update(|widget| widget.on_input(&text, &elements));
        }
    };

    let submit = {
        let elements = elements.clone();
        move || {
            widget.update(|widget| {
                if !widget.on_submit(&elements) {
                    log::debug!("nothing to submit");
                }
            })
        }
    };

    let keydown = {
        let submit = submit.clone();
        move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit();
            }
        }
    };

    let on_select = Callback::new({
        let elements = elements.clone();
        move |record: SearchRecord| {
            widget.update(|widget| widget.activate(&record, &elements));
        }
    });

    let exempt_selector = focus_exempt_selector(&config.panel_class);
    let focus_input = move |e: MouseEvent| {
        if clicked_within(&e, &exempt_selector) {
            return;
        }
        if let Some(input) = text_input.get_untracked() {
            let _ = input.focus();
        }
    };

    // pointer interaction anywhere else on the page closes the panel
    let _ = use_event_listener(use_document(), ev::click, move |e| {
        let Some(target) = e
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        else {
            return;
        };
        let inside = |element: Option<web_sys::HtmlDivElement>| {
            element.is_some_and(|element| element.contains(Some(&target)))
        };
        if inside(root.get_untracked()) || inside(panel.get_untracked()) {
            return;
        }
        if widget.with_untracked(|widget| widget.panel_visible()) {
            widget.update(|widget| widget.dismiss());
        }
    });

    let SearchWidgetConfig {
        root_class,
        input_class,
        panel_class,
        item_class,
        empty_class,
        placeholder,
        label,
    } = config;

    let results = move || {
        widget.with(|widget| match widget.rendered() {
            Rendered::Nothing => ().into_any(),
            Rendered::NoMatches => {
                view! { <div class=empty_class.clone()>"No matches found"</div> }.into_any()
            }
            Rendered::Matches(records) => records
                .iter()
                .cloned()
                .map(|record| {
                    view! {
                        <SearchResultItem
                            record
                            item_class=item_class.clone()
                            on_select=on_select
                        />
                    }
                })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <div node_ref=root class=root_class on:click=focus_input>
            {label.map(|label| view! { <span class="search-label">{label}</span> })}
            <input
                node_ref=text_input
                class=input_class
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || widget.with(|widget| widget.input().to_string())
                on:input=on_input
                on:keydown=keydown
            />
            <button
                type="button"
                class=SEARCH_TRIGGER_CLASS
                aria-label="Search"
                on:click=move |_| submit()
            >
                <Icon icon=i::AiSearchOutlined />
            </button>
            <div
                node_ref=panel
                class=panel_class
                class:show=move || widget.with(|widget| widget.panel_visible())
            >
                {results}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_panel_clicks_keep_focus_where_it_is() {
        assert_eq!(
            focus_exempt_selector(&SearchWidgetConfig::compact().panel_class),
            ".search-btn, .compact-search-results"
        );
        assert_eq!(
            focus_exempt_selector(&SearchWidgetConfig::mobile().panel_class),
            ".search-btn, .mobile-search-results"
        );
    }

    #[test]
    fn multi_class_panels_use_a_compound_selector() {
        assert_eq!(
            focus_exempt_selector(" results  open "),
            ".search-btn, .results.open"
        );
        assert_eq!(focus_exempt_selector(""), ".search-btn");
    }
}
