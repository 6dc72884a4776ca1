use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use marquee_core::carousel::CarouselEvent;
use marquee_core::{AppConfig, SlideDeck};
use marquee_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    keymap::Keymap,
    load_theme,
    widgets::{CarouselWidget, IndicatorsWidget, StatusBarWidget},
};

pub async fn run(config: Arc<AppConfig>, slides: Option<PathBuf>) -> Result<()> {
    let deck = match slides {
        Some(path) => SlideDeck::load(&path)?,
        None => SlideDeck::demo(),
    };
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Marquee"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, deck, theme, &keymap);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
    deck: SlideDeck,
    theme: marquee_tui::Theme,
    keymap: &Keymap,
) -> Result<()> {
    // Auto-advance ticks arrive from the timer task through this queue
    let (carousel_tx, mut carousel_rx) = mpsc::unbounded_channel::<CarouselEvent>();

    let cols = terminal.size()?.width;
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let mut app = App::new(config, deck, theme, cols, carousel_tx);
    info!("Showing {} slides", app.deck.len());

    loop {
        // Process pending timer firings (non-blocking)
        while let Ok(event) = carousel_rx.try_recv() {
            app.carousel.handle(event);
        }

        terminal.draw(|frame| draw(frame, &mut app))?;

        // The first draw measures the slides; lay out again before waiting
        if app.after_draw() {
            continue;
        }

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, keymap);
                    app.apply(action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app.hit_areas);
                    app.apply(action);
                }
                AppEvent::Resize(cols, _) => app.on_resize(cols),
                AppEvent::Tick => app.tick(),
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.shutdown();
    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    app.hit_areas.clear();

    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg0)), size);

    // Main layout: carousel + indicators + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    CarouselWidget::render(frame, main_layout[0], app);
    IndicatorsWidget::render(frame, main_layout[1], app);
    StatusBarWidget::render(frame, main_layout[2], app);
}
