use serde::{Deserialize, Serialize};
use stays_gen::ListingConfig;

use crate::error::AppResult;

/// Class names and copy for one search widget. The same component is mounted once per
/// configuration, so these are the only thing distinguishing the three search surfaces.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchWidgetConfig {
    pub root_class: String,
    pub input_class: String,
    pub panel_class: String,
    pub item_class: String,
    pub empty_class: String,
    pub placeholder: String,
    pub label: Option<String>,
}

impl SearchWidgetConfig {
    /// The pill shown in the collapsed desktop header.
    pub fn compact() -> Self {
        Self {
            root_class: "search-compact".to_string(),
            input_class: "compact-location-input".to_string(),
            panel_class: "compact-search-results".to_string(),
            item_class: "compact-result-item".to_string(),
            empty_class: "compact-result-empty".to_string(),
            placeholder: "Anywhere".to_string(),
            label: None,
        }
    }

    /// The "Where" field of the expanded desktop search bar.
    pub fn where_panel() -> Self {
        Self {
            root_class: "search-item".to_string(),
            input_class: "where-search-input".to_string(),
            panel_class: "where-search-results".to_string(),
            item_class: "where-result-item".to_string(),
            empty_class: "where-result-empty".to_string(),
            placeholder: "Search destinations".to_string(),
            label: Some("Where".to_string()),
        }
    }

    pub fn mobile() -> Self {
        Self {
            root_class: "mobile-search-pill".to_string(),
            input_class: "mobile-search-input".to_string(),
            panel_class: "mobile-search-results".to_string(),
            item_class: "mobile-result-item".to_string(),
            empty_class: "mobile-result-empty".to_string(),
            placeholder: "Start your search".to_string(),
            label: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SearchWidgets {
    pub compact: SearchWidgetConfig,
    pub where_panel: SearchWidgetConfig,
    pub mobile: SearchWidgetConfig,
}

impl Default for SearchWidgets {
    fn default() -> Self {
        Self {
            compact: SearchWidgetConfig::compact(),
            where_panel: SearchWidgetConfig::where_panel(),
            mobile: SearchWidgetConfig::mobile(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    /// Tiles advanced per prev/next click.
    pub step_tiles: f64,
    /// Tile step used when the track has no tile to measure.
    pub fallback_step: f64,
    /// Distance from either end at which the matching control is disabled.
    pub edge_tolerance: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            step_tiles: 2.0,
            fallback_step: 280.0,
            edge_tolerance: 2.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub listing: ListingConfig,
    pub widgets: SearchWidgets,
    pub carousel: CarouselConfig,
    /// Vertical scroll offset past which the header collapses.
    pub collapse_offset: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            listing: ListingConfig::default(),
            widgets: SearchWidgets::default(),
            carousel: CarouselConfig::default(),
            collapse_offset: 50.0,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let config = PageConfig::from_json(
            r#"{
                "collapse_offset": 80,
                "carousel": { "step_tiles": 3 },
                "listing": { "cards_per_section": 5 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.collapse_offset, 80.0);
        assert_eq!(config.carousel.step_tiles, 3.0);
        assert_eq!(config.carousel.fallback_step, 280.0);
        assert_eq!(config.listing.cards_per_section, 5);
        assert_eq!(config.widgets.mobile.root_class, "mobile-search-pill");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            PageConfig::from_json("{ collapse_offset: }"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn widget_presets_are_distinct() {
        let widgets = SearchWidgets::default();
        assert_ne!(widgets.compact.item_class, widgets.where_panel.item_class);
        assert_ne!(widgets.where_panel.item_class, widgets.mobile.item_class);
        assert_eq!(widgets.where_panel.label.as_deref(), Some("Where"));
    }
}
