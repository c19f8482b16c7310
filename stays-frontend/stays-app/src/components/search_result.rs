use leptos::prelude::*;
use stays_api_types::SearchRecord;

/// One suggestion in a results panel. The data attributes mirror the record so the entry
/// can be identified from the markup alone.
#[component]
pub fn SearchResultItem(
    record: SearchRecord,
    #[prop(into)] item_class: String,
    #[prop(into)] on_select: Callback<SearchRecord>,
) -> impl IntoView {
    let card_index = record
        .card_index
        .map(|card_index| card_index.to_string())
        .unwrap_or_default();
    let selected = record.clone();
    let data_title = record.title.clone();
    view! {
        <button
            type="button"
            class=item_class
            data-type=record.kind.as_str()
            data-section-index=record.section_index.to_string()
            data-card-index=card_index
            data-title=data_title
            on:click=move |_| on_select.run(selected.clone())
        >
            <span class="compact-result-main">{record.title}</span>
            <span class="compact-result-sub">{record.subtitle}</span>
        </button>
    }
}
