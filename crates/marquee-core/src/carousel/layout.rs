//! Paging math for the carousel
//!
//! Pure functions over slide count, viewport width and measured slide width.

use serde::{Deserialize, Serialize};

/// Number of slides visible at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageSize {
    One,
    Two,
    Three,
}

impl PageSize {
    /// Pick the page size for a viewport width (breakpoints are inclusive)
    pub fn for_viewport(width: u32, breakpoints: &Breakpoints) -> Self {
        if width >= breakpoints.large_min_width {
            PageSize::Three
        } else if width >= breakpoints.medium_min_width {
            PageSize::Two
        } else {
            PageSize::One
        }
    }

    pub fn count(self) -> usize {
        match self {
            PageSize::One => 1,
            PageSize::Two => 2,
            PageSize::Three => 3,
        }
    }
}

/// Viewport widths at which the page size grows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub medium_min_width: u32,
    pub large_min_width: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium_min_width: 640,
            large_min_width: 1024,
        }
    }
}

/// Highest valid leftmost index
#[inline]
pub fn max_index(slide_count: usize, page: PageSize) -> usize {
    slide_count.saturating_sub(page.count())
}

/// One indicator per distinct scroll position, never fewer than one
#[inline]
pub fn indicator_count(slide_count: usize, page: PageSize) -> usize {
    max_index(slide_count, page) + 1
}

/// Horizontal translation of the track for a leftmost index
#[inline]
pub fn track_offset(index: usize, slide_width: f64, gap: f64) -> f64 {
    index as f64 * (slide_width + gap)
}

/// Label for the indicator at a 0-based position
pub fn indicator_label(template: &str, position: usize) -> String {
    template.replace("{n}", &(position + 1).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(PageSize::for_viewport(0, &bp), PageSize::One);
        assert_eq!(PageSize::for_viewport(639, &bp), PageSize::One);
        assert_eq!(PageSize::for_viewport(640, &bp), PageSize::Two);
        assert_eq!(PageSize::for_viewport(1023, &bp), PageSize::Two);
        assert_eq!(PageSize::for_viewport(1024, &bp), PageSize::Three);
        assert_eq!(PageSize::for_viewport(1920, &bp), PageSize::Three);
    }

    #[test]
    fn test_max_index_saturates() {
        assert_eq!(max_index(7, PageSize::Three), 4);
        assert_eq!(max_index(7, PageSize::One), 6);
        assert_eq!(max_index(2, PageSize::Three), 0);
        assert_eq!(max_index(0, PageSize::One), 0);
    }

    #[test]
    fn test_indicator_count() {
        assert_eq!(indicator_count(7, PageSize::Three), 5);
        assert_eq!(indicator_count(7, PageSize::Two), 6);
        assert_eq!(indicator_count(7, PageSize::One), 7);
        assert_eq!(indicator_count(3, PageSize::Three), 1);
        assert_eq!(indicator_count(1, PageSize::Three), 1);
        assert_eq!(indicator_count(0, PageSize::Two), 1);
    }

    #[test]
    fn test_track_offset() {
        assert_eq!(track_offset(0, 300.0, 24.0), 0.0);
        assert_eq!(track_offset(2, 300.0, 24.0), 648.0);
    }

    #[test]
    fn test_indicator_label() {
        assert_eq!(indicator_label("Slide {n}", 0), "Slide 1");
        assert_eq!(indicator_label("Слайд {n}", 4), "Слайд 5");
    }
}
