//! Rendering target for the carousel
//!
//! The controller never touches widgets directly. It reads the first slide's
//! width and writes the track offset and indicator state through this trait,
//! so navigation can run without a real screen.

/// Capability set the controller needs from whatever draws the carousel
pub trait CarouselSurface {
    /// Rendered width of the first slide, `None` before anything is laid out
    fn slide_width(&self) -> Option<f64>;

    /// Move the track left by `offset` pixels
    fn set_offset(&mut self, offset: f64);

    /// Replace every indicator with one per label, the first marked active
    fn rebuild_indicators(&mut self, labels: &[String]);

    /// Number of indicators currently present
    fn indicator_count(&self) -> usize;

    /// Mark one indicator active or inactive; unknown positions are ignored
    fn set_indicator_active(&mut self, position: usize, active: bool);
}

/// A single position marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub label: String,
    pub active: bool,
}

/// In-memory surface for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    /// Width reported for the first slide
    pub measured_width: Option<f64>,
    /// Last written track offset
    pub offset: Option<f64>,
    /// Current indicator strip
    pub indicators: Vec<Indicator>,
    /// How many times the strip was rebuilt
    pub rebuilds: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface that reports a fixed first-slide width
    pub fn with_slide_width(width: f64) -> Self {
        Self {
            measured_width: Some(width),
            ..Self::default()
        }
    }

    /// Positions of all active indicators
    pub fn active_positions(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, indicator)| indicator.active)
            .map(|(position, _)| position)
            .collect()
    }
}

impl CarouselSurface for HeadlessSurface {
    fn slide_width(&self) -> Option<f64> {
        self.measured_width
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = Some(offset);
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
        self.rebuilds += 1;
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
