use icondata as i;
use leptos::{html::Article, prelude::*};
use leptos_icons::*;
use stays_api_types::{Card, Section};

/// The "See all" tile stacks the photos of cards 5, 6 and 7.
const SEE_ALL_FIRST: usize = 5;
const SEE_ALL_COUNT: usize = 3;

pub(crate) fn card_meta(card: &Card) -> String {
    format!(
        "\u{20B9}{} for {} nights \u{00B7} \u{2605} {}",
        card.price, card.nights, card.rating
    )
}

#[component]
pub fn ListingCard(
    card: Card,
    section_index: usize,
    card_index: usize,
    card_ref: NodeRef<Article>,
) -> impl IntoView {
    let meta = card_meta(&card);
    let Card {
        title,
        image,
        guest_favorite,
        ..
    } = card;
    view! {
        <article
            node_ref=card_ref
            class="listing-card"
            data-section-index=section_index.to_string()
            data-card-index=card_index.to_string()
        >
            <div class="listing-image-wrap">
                <img src=image alt=title.clone() class="listing-image" loading="lazy" />
                {guest_favorite.then(|| view! { <span class="listing-badge">"Guest favourite"</span> })}
                <button class="like-btn" aria-label=format!("Save {title}")>
                    <Icon icon=i::AiHeartOutlined />
                </button>
            </div>
            <h3 class="listing-title">{title.clone()}</h3>
            <p class="listing-meta">{meta}</p>
        </article>
    }
}

/// Trailing tile of a carousel, stacking a few of the section's photos.
#[component]
pub fn SeeAllCard(section: Section) -> impl IntoView {
    let previews = section
        .cards
        .iter()
        .skip(SEE_ALL_FIRST)
        .take(SEE_ALL_COUNT)
        .enumerate()
        .map(|(position, card)| {
            view! {
                <img
                    src=card.image.clone()
                    alt=""
                    class=format!("see-all-photo see-all-photo-{}", position + 1)
                    loading="lazy"
                    aria-hidden="true"
                />
            }
        })
        .collect_view();
    view! {
        <article
            class="see-all-card"
            role="button"
            tabindex="0"
            aria-label=format!("See all stays in {}", section.title)
        >
            <div class="see-all-stack" aria-hidden="true">
                {previews}
            </div>
            <h3 class="see-all-text">"See all"</h3>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_line() {
        let card = Card {
            title: "Home in Idukki".to_string(),
            price: "3,800".to_string(),
            nights: "2".to_string(),
            rating: "4.72".to_string(),
            image: "assets/images/img (1).jpeg".to_string(),
            guest_favorite: true,
        };
        assert_eq!(card_meta(&card), "₹3,800 for 2 nights · ★ 4.72");
    }
}
