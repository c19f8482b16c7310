use serde::{Deserialize, Serialize};

/// One carousel to generate: the heading shown above it and the place every card in it
/// is located in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SectionSpec {
    pub title: String,
    pub location: String,
}

impl SectionSpec {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }
}

/// Knobs for the listing generator. Every field has a default so a partial document is
/// enough to override a single value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ListingConfig {
    pub sections: Vec<SectionSpec>,
    pub cards_per_section: usize,
    pub base_price: u32,
    pub section_price_step: u32,
    pub card_price_step: u32,
    /// Ratings are computed in hundredths to keep formatting exact.
    pub rating_base_hundredths: u32,
    pub rating_step_hundredths: u32,
    pub rating_cycle: usize,
    pub nights: String,
    /// Must contain `{index}`, replaced by the 1-based image number.
    pub image_template: String,
    pub show_see_all: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionSpec::new("Stay in Idukki", "Idukki"),
                SectionSpec::new("Popular homes in Alappuzha", "Alappuzha"),
                SectionSpec::new("Check out homes in Wayanad", "Wayanad"),
                SectionSpec::new("Available in Thrissur this weekend", "Thrissur"),
                SectionSpec::new("Homes in North Goa", "North Goa"),
                SectionSpec::new("Places to stay in South Goa", "South Goa"),
                SectionSpec::new("Popular homes in Bengaluru", "Bengaluru"),
                SectionSpec::new("Available in Kozhikode this weekend", "Kozhikode"),
                SectionSpec::new(
                    "Available in Thiruvananthapuram this weekend",
                    "Thiruvananthapuram",
                ),
            ],
            cards_per_section: 8,
            base_price: 3800,
            section_price_step: 640,
            card_price_step: 410,
            rating_base_hundredths: 472,
            rating_step_hundredths: 4,
            rating_cycle: 7,
            nights: "2".to_string(),
            image_template: "assets/images/img ({index}).jpeg".to_string(),
            show_see_all: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ListingConfig =
            serde_json::from_str(r#"{ "cards_per_section": 4, "nights": "3" }"#).unwrap();
        assert_eq!(config.cards_per_section, 4);
        assert_eq!(config.nights, "3");
        assert_eq!(config.sections.len(), 9);
        assert_eq!(config.base_price, 3800);
    }
}
