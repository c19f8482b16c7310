use thousands::{digits, Separable, SeparatorPolicy};

/// en-IN digit grouping: the last three digits, then groups of two (`1,23,456`).
const INDIAN_GROUPING: SeparatorPolicy = SeparatorPolicy {
    separator: ",",
    groups: &[3, 2],
    digits: digits::ASCII_DECIMAL,
};

pub(crate) fn format_price(amount: u32) -> String {
    amount.separate_by_policy(INDIAN_GROUPING)
}

/// Formats hundredths as a decimal with exactly two places, `478` -> `"4.78"`.
pub(crate) fn format_rating(hundredths: u32) -> String {
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

pub(crate) fn image_path(template: &str, index: usize) -> String {
    template.replace("{index}", &index.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StayType {
    Home,
    Room,
    Cottage,
}

impl StayType {
    pub(crate) fn for_position(card_index: usize) -> Self {
        match card_index % 3 {
            0 => StayType::Home,
            1 => StayType::Room,
            _ => StayType::Cottage,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            StayType::Home => "Home",
            StayType::Room => "Room",
            StayType::Cottage => "Cottage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping() {
        assert_eq!(format_price(950), "950");
        assert_eq!(format_price(3800), "3,800");
        assert_eq!(format_price(11790), "11,790");
        assert_eq!(format_price(123456), "1,23,456");
        assert_eq!(format_price(12345678), "1,23,45,678");
    }

    #[test]
    fn rating_has_two_places() {
        assert_eq!(format_rating(472), "4.72");
        assert_eq!(format_rating(496), "4.96");
        assert_eq!(format_rating(500), "5.00");
    }

    #[test]
    fn stay_type_cycles() {
        let types: Vec<_> = (0..4).map(StayType::for_position).collect();
        assert_eq!(
            types,
            vec![StayType::Home, StayType::Room, StayType::Cottage, StayType::Home]
        );
    }
}
