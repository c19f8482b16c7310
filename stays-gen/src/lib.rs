//! Deterministic listing data for the stays page.
//!
//! The generator produces the same sections and cards on every call for a given
//! [`ListingConfig`]; nothing is random and nothing is fetched.

mod config;
mod format;

pub use config::{ListingConfig, SectionSpec};

use format::{format_price, format_rating, image_path, StayType};
use stays_api_types::{Card, Section};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("Section {0} has an empty title")]
    EmptyTitle(usize),
    #[error("Sections must contain at least one card")]
    NoCards,
    #[error("Image template {0:?} is missing the {{index}} placeholder")]
    MissingPlaceholder(String),
    #[error("Rating cycle must be at least 1")]
    ZeroRatingCycle,
    #[error("Price of card {card} in section {section} does not fit in a u32")]
    PriceOverflow { section: usize, card: usize },
    #[error("Rating of card {card} in section {section} does not fit in a u32")]
    RatingOverflow { section: usize, card: usize },
}

pub type GenResult<T> = Result<T, GenError>;

fn validate(config: &ListingConfig) -> GenResult<()> {
    if config.cards_per_section == 0 {
        return Err(GenError::NoCards);
    }
    if config.rating_cycle == 0 {
        return Err(GenError::ZeroRatingCycle);
    }
    if !config.image_template.contains("{index}") {
        return Err(GenError::MissingPlaceholder(config.image_template.clone()));
    }
    if let Some(position) = config
        .sections
        .iter()
        .position(|section| section.title.trim().is_empty())
    {
        return Err(GenError::EmptyTitle(position));
    }
    Ok(())
}

/// Builds every section of the page in display order.
pub fn generate_listing(config: &ListingConfig) -> GenResult<Vec<Section>> {
    validate(config)?;
    // image numbers run across the whole page, not per section
    let mut image_index = 1;
    let mut sections = Vec::with_capacity(config.sections.len());
    for (section_index, spec) in config.sections.iter().enumerate() {
        let cards = (0..config.cards_per_section)
            .map(|card_index| {
                let card = build_card(config, spec, section_index, card_index, image_index);
                image_index += 1;
                card
            })
            .collect::<GenResult<Vec<_>>>()?;
        sections.push(Section {
            title: spec.title.clone(),
            show_see_all: config.show_see_all,
            cards,
        });
    }
    debug!(
        sections = sections.len(),
        cards_per_section = config.cards_per_section,
        "generated listing"
    );
    Ok(sections)
}

/// `base + section * section_step + card * card_step`, or `None` past `u32::MAX`.
fn card_price(config: &ListingConfig, section_index: usize, card_index: usize) -> Option<u32> {
    let section = u32::try_from(section_index)
        .ok()?
        .checked_mul(config.section_price_step)?;
    let card = u32::try_from(card_index)
        .ok()?
        .checked_mul(config.card_price_step)?;
    config.base_price.checked_add(section)?.checked_add(card)
}

fn card_rating(config: &ListingConfig, section_index: usize, card_index: usize) -> Option<u32> {
    let cycle_position = section_index.checked_add(card_index)? % config.rating_cycle;
    u32::try_from(cycle_position)
        .ok()?
        .checked_mul(config.rating_step_hundredths)?
        .checked_add(config.rating_base_hundredths)
}

fn build_card(
    config: &ListingConfig,
    spec: &SectionSpec,
    section_index: usize,
    card_index: usize,
    image_index: usize,
) -> GenResult<Card> {
    let price = card_price(config, section_index, card_index).ok_or(GenError::PriceOverflow {
        section: section_index,
        card: card_index,
    })?;
    let rating = card_rating(config, section_index, card_index).ok_or(GenError::RatingOverflow {
        section: section_index,
        card: card_index,
    })?;
    let stay_type = StayType::for_position(card_index);
    Ok(Card {
        title: format!("{} in {}", stay_type.as_str(), spec.location),
        price: format_price(price),
        nights: config.nights.clone(),
        rating: format_rating(rating),
        image: image_path(&config.image_template, image_index),
        guest_favorite: image_index % 3 != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listing_shape() {
        let sections = generate_listing(&ListingConfig::default()).unwrap();
        assert_eq!(sections.len(), 9);
        assert!(sections.iter().all(|s| s.cards.len() == 8 && s.show_see_all));
        assert_eq!(sections[0].title, "Stay in Idukki");
        assert_eq!(
            sections[8].title,
            "Available in Thiruvananthapuram this weekend"
        );
    }

    #[test]
    fn cards_follow_generation_rules() {
        let sections = generate_listing(&ListingConfig::default()).unwrap();
        let first = &sections[0].cards[0];
        assert_eq!(first.title, "Home in Idukki");
        assert_eq!(first.price, "3,800");
        assert_eq!(first.rating, "4.72");
        assert_eq!(first.nights, "2");
        assert_eq!(first.image, "assets/images/img (1).jpeg");
        assert!(first.guest_favorite);

        let third = &sections[0].cards[2];
        assert_eq!(third.title, "Cottage in Idukki");
        assert_eq!(third.image, "assets/images/img (3).jpeg");
        assert!(!third.guest_favorite);

        let goa = &sections[4].cards[1];
        assert_eq!(goa.title, "Room in North Goa");
        // 3800 + 4 * 640 + 1 * 410
        assert_eq!(goa.price, "6,770");
        // (4 + 1) % 7 = 5 -> 4.72 + 0.20
        assert_eq!(goa.rating, "4.92");

        let last = sections.last().and_then(|s| s.cards.last()).unwrap();
        assert_eq!(last.image, "assets/images/img (72).jpeg");
        assert_eq!(last.price, "11,790");
    }

    #[test]
    fn generation_is_deterministic() {
        let config = ListingConfig::default();
        assert_eq!(
            generate_listing(&config).unwrap(),
            generate_listing(&config).unwrap()
        );
    }

    #[test]
    fn empty_section_list_is_valid() {
        let config = ListingConfig {
            sections: vec![],
            ..Default::default()
        };
        assert!(generate_listing(&config).unwrap().is_empty());
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let no_cards = ListingConfig {
            cards_per_section: 0,
            ..Default::default()
        };
        assert_eq!(generate_listing(&no_cards), Err(GenError::NoCards));

        let bad_template = ListingConfig {
            image_template: "img.jpeg".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            generate_listing(&bad_template),
            Err(GenError::MissingPlaceholder(_))
        ));

        let mut blank_title = ListingConfig::default();
        blank_title.sections[3].title = "  ".to_string();
        assert_eq!(generate_listing(&blank_title), Err(GenError::EmptyTitle(3)));
    }

    #[test]
    fn oversized_prices_are_rejected() {
        let config: ListingConfig =
            serde_json::from_str(r#"{ "base_price": 4294967000 }"#).unwrap();
        // the first card still fits, the second adds a card step past u32::MAX
        assert_eq!(
            generate_listing(&config),
            Err(GenError::PriceOverflow {
                section: 0,
                card: 1
            })
        );

        let steep = ListingConfig {
            section_price_step: u32::MAX,
            ..Default::default()
        };
        assert_eq!(
            generate_listing(&steep),
            Err(GenError::PriceOverflow {
                section: 1,
                card: 0
            })
        );
    }

    #[test]
    fn oversized_ratings_are_rejected() {
        let config = ListingConfig {
            rating_step_hundredths: u32::MAX,
            ..Default::default()
        };
        // card 0 of section 0 sits at the start of the cycle and adds no step
        assert_eq!(
            generate_listing(&config),
            Err(GenError::RatingOverflow {
                section: 0,
                card: 1
            })
        );
    }
}
