use std::sync::Arc;
use std::time::{Duration, Instant};

use marquee_core::carousel::{
    AutoAdvanceTimer, CarouselController, CarouselEvent, CarouselSettings, TokioTimer,
};
use marquee_core::{AppConfig, SlideDeck};
use tokio::sync::mpsc;
use tracing::debug;

use crate::input::{Action, HitAreas};
use crate::surface::TerminalSurface;
use crate::theme::Theme;

/// Status messages disappear after this long
const STATUS_TTL: Duration = Duration::from_secs(3);

pub struct App<T = TokioTimer> {
    pub config: Arc<AppConfig>,
    pub deck: SlideDeck,
    pub theme: Theme,
    pub carousel: CarouselController<TerminalSurface, T>,
    pub hit_areas: HitAreas,
    pub should_quit: bool,
    pub status_message: Option<String>,
    status_set_at: Option<Instant>,
}

impl App<TokioTimer> {
    /// Create the app with a tokio-backed auto-advance timer posting into `tx`
    pub fn new(
        config: Arc<AppConfig>,
        deck: SlideDeck,
        theme: Theme,
        terminal_cols: u16,
        tx: mpsc::UnboundedSender<CarouselEvent>,
    ) -> Self {
        Self::with_timer(config, deck, theme, terminal_cols, TokioTimer::new(tx))
    }
}

impl<T: AutoAdvanceTimer> App<T> {
    pub fn with_timer(
        config: Arc<AppConfig>,
        deck: SlideDeck,
        theme: Theme,
        terminal_cols: u16,
        timer: T,
    ) -> Self {
        let surface = TerminalSurface::new(config.ui.cell_width_px);
        let viewport = viewport_width(terminal_cols, surface.cell_width_px());
        let carousel = CarouselController::new(
            deck.len(),
            viewport,
            CarouselSettings::from(&config.carousel),
            surface,
            timer,
        );

        Self {
            config,
            deck,
            theme,
            carousel,
            hit_areas: HitAreas::default(),
            should_quit: false,
            status_message: None,
            status_set_at: None,
        }
    }

    /// Apply an input action to the carousel
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Previous => self.carousel.handle(CarouselEvent::Previous),
            Action::Next => self.carousel.handle(CarouselEvent::Next),
            Action::JumpTo(position) => {
                if position >= self.carousel.indicator_count() {
                    self.set_status(format!("No slide position {}", position + 1));
                }
                self.carousel.handle(CarouselEvent::Indicator(position));
            }
            Action::None => {}
        }
    }

    /// Terminal width changed
    pub fn on_resize(&mut self, cols: u16) {
        let width = viewport_width(cols, self.carousel.surface().cell_width_px());
        debug!("Terminal resized to {} cols ({}px)", cols, width);
        self.carousel.handle(CarouselEvent::Resize(width));
    }

    /// Re-run layout when the last draw measured a different slide width
    ///
    /// Returns true when the screen needs another draw.
    pub fn after_draw(&mut self) -> bool {
        if self.carousel.surface_mut().take_layout_dirty() {
            self.carousel.recompute_layout();
            return true;
        }
        false
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    /// Expire the status message
    pub fn tick(&mut self) {
        if self
            .status_set_at
            .is_some_and(|set_at| set_at.elapsed() >= STATUS_TTL)
        {
            self.status_message = None;
            self.status_set_at = None;
        }
    }

    /// Stop the carousel before exit
    pub fn shutdown(&mut self) {
        self.carousel.shutdown();
    }
}

/// Viewport width in pixels for a terminal width in columns
pub fn viewport_width(cols: u16, cell_width_px: u32) -> u32 {
    u32::from(cols).saturating_mul(cell_width_px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::carousel::{CarouselSurface, ManualTimer, PageSize};

    fn app(cols: u16) -> App<ManualTimer> {
        App::with_timer(
            Arc::new(AppConfig::default()),
            SlideDeck::demo(),
            Theme::default(),
            cols,
            ManualTimer::new(),
        )
    }

    #[test]
    fn test_viewport_width() {
        assert_eq!(viewport_width(160, 8), 1280);
        assert_eq!(viewport_width(80, 8), 640);
    }

    #[test]
    fn test_page_size_follows_terminal_width() {
        assert_eq!(app(160).carousel.page_size(), PageSize::Three);
        assert_eq!(app(100).carousel.page_size(), PageSize::Two);
        assert_eq!(app(60).carousel.page_size(), PageSize::One);
    }

    #[test]
    fn test_actions_drive_carousel() {
        let mut app = app(160);
        app.apply(Action::Next);
        app.apply(Action::Next);
        assert_eq!(app.carousel.current_index(), 2);
        app.apply(Action::Previous);
        assert_eq!(app.carousel.current_index(), 1);
        app.apply(Action::JumpTo(4));
        assert_eq!(app.carousel.current_index(), 4);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_jump_past_end_is_clamped_and_reported() {
        let mut app = app(160);
        app.apply(Action::JumpTo(8));
        assert_eq!(app.carousel.current_index(), 4);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_resize_rebuilds_indicators() {
        let mut app = app(160);
        assert_eq!(app.carousel.surface().indicator_count(), 5);
        app.on_resize(60);
        assert_eq!(app.carousel.surface().indicator_count(), 7);
    }

    #[test]
    fn test_measurement_triggers_relayout() {
        let mut app = app(160);
        app.apply(Action::Next);
        assert_eq!(app.carousel.surface().offset_px(), 300.0 + 24.0);

        app.carousel.surface_mut().report_slide_width(48);
        assert!(app.after_draw());
        assert_eq!(app.carousel.surface().offset_px(), 384.0 + 24.0);
        assert!(!app.after_draw());
    }

    #[test]
    fn test_shutdown_cancels_timer() {
        let mut app = app(160);
        app.shutdown();
        assert!(!app.carousel.timer().is_pending());
    }
}
