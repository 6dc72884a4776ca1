use marquee_core::carousel::{CarouselSurface, Indicator};

/// Carousel surface drawn into the terminal
///
/// Pixels are converted to columns with a fixed cell width. The slide width
/// is only known after the carousel widget has been laid out once; until
/// then the controller uses its fallback width.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    cell_width_px: u32,
    offset_px: f64,
    indicators: Vec<Indicator>,
    measured_width_px: Option<f64>,
    layout_dirty: bool,
}

impl TerminalSurface {
    pub fn new(cell_width_px: u32) -> Self {
        Self {
            cell_width_px: cell_width_px.max(1),
            offset_px: 0.0,
            indicators: Vec::new(),
            measured_width_px: None,
            layout_dirty: false,
        }
    }

    pub fn cell_width_px(&self) -> u32 {
        self.cell_width_px
    }

    /// Convert terminal columns to pixels
    pub fn cols_to_px(&self, cols: u16) -> f64 {
        f64::from(cols) * f64::from(self.cell_width_px)
    }

    /// Convert pixels to (possibly fractional) terminal columns
    pub fn px_to_cols(&self, px: f64) -> f64 {
        px / f64::from(self.cell_width_px)
    }

    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Label of the active indicator, if any
    pub fn active_label(&self) -> Option<&str> {
        self.indicators
            .iter()
            .find(|indicator| indicator.active)
            .map(|indicator| indicator.label.as_str())
    }

    /// Record the width the first slide was drawn with
    pub fn report_slide_width(&mut self, cols: u16) {
        let measured = (cols > 0).then(|| self.cols_to_px(cols));
        if measured != self.measured_width_px {
            self.measured_width_px = measured;
            self.layout_dirty = true;
        }
    }

    /// Whether a measurement changed since the last call
    pub fn take_layout_dirty(&mut self) -> bool {
        std::mem::take(&mut self.layout_dirty)
    }
}

impl CarouselSurface for TerminalSurface {
    fn slide_width(&self) -> Option<f64> {
        self.measured_width_px
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset_px = offset;
    }

    fn rebuild_indicators(&mut self, labels: &[String]) {
        self.indicators = labels
            .iter()
            .enumerate()
            .map(|(position, label)| Indicator {
                label: label.clone(),
                active: position == 0,
            })
            .collect();
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_indicator_active(&mut self, position: usize, active: bool) {
        if let Some(indicator) = self.indicators.get_mut(position) {
            indicator.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmeasured_until_reported() {
        let mut surface = TerminalSurface::new(8);
        assert_eq!(surface.slide_width(), None);
        assert!(!surface.take_layout_dirty());

        surface.report_slide_width(40);
        assert_eq!(surface.slide_width(), Some(320.0));
        assert!(surface.take_layout_dirty());
        assert!(!surface.take_layout_dirty());
    }

    #[test]
    fn test_same_measurement_is_not_dirty() {
        let mut surface = TerminalSurface::new(8);
        surface.report_slide_width(40);
        surface.take_layout_dirty();
        surface.report_slide_width(40);
        assert!(!surface.take_layout_dirty());
    }

    #[test]
    fn test_zero_width_clears_measurement() {
        let mut surface = TerminalSurface::new(8);
        surface.report_slide_width(40);
        surface.report_slide_width(0);
        assert_eq!(surface.slide_width(), None);
    }

    #[test]
    fn test_active_label() {
        let mut surface = TerminalSurface::new(8);
        surface.rebuild_indicators(&["Slide 1".to_string(), "Slide 2".to_string()]);
        surface.set_indicator_active(0, false);
        surface.set_indicator_active(1, true);
        assert_eq!(surface.active_label(), Some("Slide 2"));
    }
}
