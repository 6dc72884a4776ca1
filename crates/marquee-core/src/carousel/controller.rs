//! Carousel state owner
//!
//! Owns the leftmost visible index, the viewport width and the auto-advance
//! timer. Every mutation goes through the operations below, each of which
//! leaves `0 <= current_index <= max_index` and writes the resulting offset
//! and indicator state to the surface before returning.

use std::time::Duration;

use tracing::{debug, info};

use super::layout::{self, Breakpoints, PageSize};
use super::surface::CarouselSurface;
use super::timer::AutoAdvanceTimer;
use crate::config::CarouselConfig;

/// Inputs the controller reacts to, in the order the environment delivers them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Previous control clicked
    Previous,
    /// Next control clicked
    Next,
    /// Indicator at a 0-based position clicked
    Indicator(usize),
    /// Viewport width changed (pixels)
    Resize(u32),
    /// Auto-advance timer fired
    AutoAdvance { generation: u64 },
}

/// Fixed parameters of a carousel
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    /// Auto-advance period, zero disables auto-advance
    pub auto_advance_period: Duration,
    /// Gap between slides in pixels
    pub gap: f64,
    /// Slide width used while the first slide cannot be measured
    pub fallback_slide_width: f64,
    pub breakpoints: Breakpoints,
    /// Indicator label template, `{n}` is the 1-based position
    pub indicator_label: String,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::from(&CarouselConfig::default())
    }
}

impl From<&CarouselConfig> for CarouselSettings {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            auto_advance_period: Duration::from_millis(config.auto_advance_ms),
            gap: config.gap_px,
            fallback_slide_width: config.fallback_slide_width_px,
            breakpoints: Breakpoints {
                medium_min_width: config.medium_min_width,
                large_min_width: config.large_min_width,
            },
            indicator_label: config.indicator_label.clone(),
        }
    }
}

#[derive(Debug)]
pub struct CarouselController<S, T> {
    settings: CarouselSettings,
    surface: S,
    timer: T,
    slide_count: usize,
    viewport_width: u32,
    current_index: usize,
    generation: u64,
}

impl<S: CarouselSurface, T: AutoAdvanceTimer> CarouselController<S, T> {
    /// Create a controller and run the initialization sequence:
    /// build indicators, lay out, start auto-advance
    pub fn new(
        slide_count: usize,
        viewport_width: u32,
        settings: CarouselSettings,
        surface: S,
        timer: T,
    ) -> Self {
        let mut controller = Self {
            settings,
            surface,
            timer,
            slide_count,
            viewport_width,
            current_index: 0,
            generation: 0,
        };

        controller.rebuild_indicators();
        controller.recompute_layout();
        controller.reset_auto_advance();

        info!(
            "Carousel started: slides={}, viewport={}px, page={}",
            slide_count,
            viewport_width,
            controller.page_size().count()
        );

        controller
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Generation of the current auto-advance schedule
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_size(&self) -> PageSize {
        PageSize::for_viewport(self.viewport_width, &self.settings.breakpoints)
    }

    pub fn max_index(&self) -> usize {
        layout::max_index(self.slide_count, self.page_size())
    }

    pub fn indicator_count(&self) -> usize {
        layout::indicator_count(self.slide_count, self.page_size())
    }

    /// Clamp the index to the current page size and push offset and
    /// indicator state to the surface
    pub fn recompute_layout(&mut self) {
        self.current_index = self.current_index.min(self.max_index());

        let slide_width = self
            .surface
            .slide_width()
            .filter(|width| width.is_finite() && *width > 0.0)
            .unwrap_or(self.settings.fallback_slide_width);
        let offset = layout::track_offset(self.current_index, slide_width, self.settings.gap);
        self.surface.set_offset(offset);

        for position in 0..self.surface.indicator_count() {
            self.surface
                .set_indicator_active(position, position == self.current_index);
        }
    }

    /// Recreate the indicator strip for the current page size
    pub fn rebuild_indicators(&mut self) {
        let labels: Vec<String> = (0..self.indicator_count())
            .map(|position| layout::indicator_label(&self.settings.indicator_label, position))
            .collect();

        debug!("Rebuilding {} carousel indicators", labels.len());
        self.surface.rebuild_indicators(&labels);
    }

    /// Step back one slide; stays at 0
    pub fn go_previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
        debug!("Carousel previous -> {}", self.current_index);
        self.recompute_layout();
        self.reset_auto_advance();
    }

    /// Step forward one slide; stays at the last position instead of wrapping
    pub fn go_next(&mut self) {
        self.current_index = (self.current_index + 1).min(self.max_index());
        debug!("Carousel next -> {}", self.current_index);
        self.recompute_layout();
        self.reset_auto_advance();
    }

    /// Jump to an indicator position, clamped into `[0, max_index]`
    pub fn go_to(&mut self, position: usize) {
        self.current_index = position.min(self.max_index());
        debug!("Carousel indicator {} -> {}", position, self.current_index);
        self.recompute_layout();
        self.reset_auto_advance();
    }

    /// Replace the pending auto-advance schedule with a fresh one
    pub fn reset_auto_advance(&mut self) {
        self.timer.cancel();
        self.generation += 1;

        if self.settings.auto_advance_period.is_zero() {
            return;
        }

        self.timer
            .restart(self.settings.auto_advance_period, self.generation);
    }

    /// One auto-advance step: forward by one, back to 0 after the last position
    pub fn advance_automatically(&mut self) {
        self.current_index = if self.current_index >= self.max_index() {
            0
        } else {
            self.current_index + 1
        };
        debug!("Carousel auto-advance -> {}", self.current_index);
        self.recompute_layout();
    }

    /// Handle a timer firing; ticks from replaced schedules are ignored
    pub fn on_auto_advance(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.timer.is_pending() {
            debug!(
                "Ignoring stale auto-advance tick (generation {}, current {})",
                generation, self.generation
            );
            return false;
        }

        self.advance_automatically();
        true
    }

    /// Re-page for a new viewport width; the auto-advance countdown keeps running
    pub fn on_viewport_resize(&mut self, width: u32) {
        self.viewport_width = width;
        self.rebuild_indicators();
        self.recompute_layout();
    }

    /// Dispatch one queued event
    pub fn handle(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Previous => self.go_previous(),
            CarouselEvent::Next => self.go_next(),
            CarouselEvent::Indicator(position) => self.go_to(position),
            CarouselEvent::Resize(width) => self.on_viewport_resize(width),
            CarouselEvent::AutoAdvance { generation } => {
                self.on_auto_advance(generation);
            }
        }
    }

    /// Stop auto-advance; ticks already queued become stale
    pub fn shutdown(&mut self) {
        self.timer.cancel();
        self.generation += 1;
        info!("Carousel stopped at index {}", self.current_index);
    }
}
