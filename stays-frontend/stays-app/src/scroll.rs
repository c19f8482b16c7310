//! Geometry for the header and the carousels, kept free of DOM types.

use crate::config::CarouselConfig;

pub fn header_collapsed(scroll_y: f64, collapse_offset: f64) -> bool {
    scroll_y > collapse_offset
}

/// Whether a carousel viewport sits at either end of its track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselEdges {
    pub at_start: bool,
    pub at_end: bool,
}

impl Default for CarouselEdges {
    fn default() -> Self {
        // nothing measured yet: the viewport starts scrolled to the left
        Self {
            at_start: true,
            at_end: false,
        }
    }
}

pub fn carousel_edges(
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
    tolerance: f64,
) -> CarouselEdges {
    let max_scroll = scroll_width - client_width;
    CarouselEdges {
        at_start: scroll_left <= tolerance,
        at_end: scroll_left >= max_scroll - tolerance,
    }
}

/// Distance one prev/next click scrolls: `step_tiles` tiles plus their gaps.
pub fn carousel_step(tile_width: Option<f64>, gap: f64, config: &CarouselConfig) -> f64 {
    let tile = match tile_width {
        Some(width) => width + gap,
        None => config.fallback_step,
    };
    tile * config.step_tiles
}

/// Reads the leading number of a computed CSS length (`"16px"` -> 16). Keywords such as
/// `normal` count as zero.
pub fn parse_css_length(value: &str) -> f64 {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_collapses_past_offset() {
        assert!(!header_collapsed(0.0, 50.0));
        assert!(!header_collapsed(50.0, 50.0));
        assert!(header_collapsed(50.5, 50.0));
    }

    #[test]
    fn edges_respect_tolerance() {
        // 1000px track in a 400px viewport: max scroll 600
        assert_eq!(
            carousel_edges(0.0, 1000.0, 400.0, 2.0),
            CarouselEdges {
                at_start: true,
                at_end: false
            }
        );
        assert!(carousel_edges(2.0, 1000.0, 400.0, 2.0).at_start);
        assert!(!carousel_edges(2.5, 1000.0, 400.0, 2.0).at_start);
        assert!(carousel_edges(598.0, 1000.0, 400.0, 2.0).at_end);
        assert!(!carousel_edges(597.0, 1000.0, 400.0, 2.0).at_end);
    }

    #[test]
    fn track_narrower_than_viewport_disables_both() {
        let edges = carousel_edges(0.0, 300.0, 400.0, 2.0);
        assert!(edges.at_start && edges.at_end);
    }

    #[test]
    fn step_is_two_tiles_with_gaps() {
        let config = CarouselConfig::default();
        assert_eq!(carousel_step(Some(250.0), 16.0, &config), 532.0);
        assert_eq!(carousel_step(None, 16.0, &config), 560.0);
    }

    #[test]
    fn css_lengths() {
        assert_eq!(parse_css_length("16px"), 16.0);
        assert_eq!(parse_css_length(" 12.5px "), 12.5);
        assert_eq!(parse_css_length("normal"), 0.0);
        assert_eq!(parse_css_length(""), 0.0);
        assert_eq!(parse_css_length("0"), 0.0);
    }
}
