use marquee_core::carousel::AutoAdvanceTimer;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Columns taken by one indicator (glyph plus spacing)
const INDICATOR_WIDTH: u16 = 2;

pub struct IndicatorsWidget;

impl IndicatorsWidget {
    pub fn render<T: AutoAdvanceTimer>(frame: &mut Frame, area: Rect, app: &mut App<T>) {
        app.hit_areas.indicators.clear();

        let indicators = app.carousel.surface().indicators();
        let total = indicators.len() as u16;
        let needed = total.saturating_mul(INDICATOR_WIDTH);

        // Too narrow for dots: show the position as text
        if needed > area.width {
            let position = indicators
                .iter()
                .position(|indicator| indicator.active)
                .map_or(0, |position| position + 1);
            let paragraph = Paragraph::new(format!("{}/{}", position, total))
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.fg1));
            frame.render_widget(paragraph, area);
            return;
        }

        let left = area.x + (area.width - needed) / 2;
        let spans: Vec<Span> = indicators
            .iter()
            .map(|indicator| {
                let (glyph, color) = if indicator.active {
                    ("● ", app.theme.indicator_active)
                } else {
                    ("○ ", app.theme.indicator_inactive)
                };
                Span::styled(glyph, Style::default().fg(color))
            })
            .collect();

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(left, area.y, needed, 1.min(area.height)),
        );
        app.hit_areas.indicators = indicator_rects(area, total);
    }
}

/// Click targets for `total` indicator dots centered in `area`
///
/// Empty when the row has no height or is too narrow for the dots.
fn indicator_rects(area: Rect, total: u16) -> Vec<Rect> {
    let needed = total.saturating_mul(INDICATOR_WIDTH);
    if area.height == 0 || needed > area.width {
        return Vec::new();
    }

    let left = area.x + (area.width - needed) / 2;
    (0..total)
        .map(|position| Rect::new(left + position * INDICATOR_WIDTH, area.y, INDICATOR_WIDTH, 1))
        .collect()
}
