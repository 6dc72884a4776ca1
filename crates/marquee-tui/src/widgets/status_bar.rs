use marquee_core::carousel::AutoAdvanceTimer;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render<T: AutoAdvanceTimer>(frame: &mut Frame, area: Rect, app: &App<T>) {
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let carousel = &app.carousel;
            let label = carousel.surface().active_label().unwrap_or("-");
            let auto = if carousel.timer().is_pending() {
                format!("auto {}s", carousel.settings().auto_advance_period.as_secs_f64())
            } else {
                "auto off".to_string()
            };
            format!(
                " {} | {}/{} | page {} | {}",
                label,
                carousel.current_index() + 1,
                carousel.indicator_count(),
                carousel.page_size().count(),
                auto
            )
        };

        let help_hint = " q:quit h/l:move 1-9:jump ";
        let used = status_text.chars().count() + help_hint.chars().count();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(app.theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
