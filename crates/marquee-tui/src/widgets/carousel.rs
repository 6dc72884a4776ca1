use marquee_core::carousel::{AutoAdvanceTimer, CarouselSurface};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Width of the previous/next controls in columns
const CONTROL_WIDTH: u16 = 3;

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render<T: AutoAdvanceTimer>(frame: &mut Frame, area: Rect, app: &mut App<T>) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CONTROL_WIDTH),
                Constraint::Min(1),
                Constraint::Length(CONTROL_WIDTH),
            ])
            .split(area);

        Self::render_control(frame, chunks[0], "‹", app);
        Self::render_control(frame, chunks[2], "›", app);
        app.hit_areas.previous = Some(chunks[0]);
        app.hit_areas.next = Some(chunks[2]);

        Self::render_track(frame, chunks[1], app);
    }

    fn render_control<T: AutoAdvanceTimer>(frame: &mut Frame, area: Rect, glyph: &str, app: &App<T>) {
        let top_padding = area.height.saturating_sub(1) / 2;
        let mut lines = vec![Line::default(); top_padding as usize];
        lines.push(Line::from(Span::styled(
            glyph,
            Style::default()
                .fg(app.theme.control)
                .add_modifier(Modifier::BOLD),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(app.theme.bg0));
        frame.render_widget(paragraph, area);
    }

    fn render_track<T: AutoAdvanceTimer>(frame: &mut Frame, area: Rect, app: &mut App<T>) {
        let page = app.carousel.page_size().count() as u16;
        let gap_px = app.carousel.settings().gap;
        let fallback_px = app.carousel.settings().fallback_slide_width;

        let surface = app.carousel.surface_mut();
        let gap_cols = surface.px_to_cols(gap_px).round() as u16;
        let slide_cols = slide_columns(area.width, page, gap_cols);
        surface.report_slide_width(slide_cols);

        if slide_cols == 0 {
            return;
        }

        let slide_px = surface.slide_width().unwrap_or(fallback_px);
        let offset_px = surface.offset_px();
        let track_width = i32::from(area.width);

        for (index, slide) in app.deck.iter().enumerate() {
            let left_px = index as f64 * (slide_px + gap_px) - offset_px;
            let left = app.carousel.surface().px_to_cols(left_px).round() as i32;
            let start = left.max(0);
            let end = (left + i32::from(slide_cols)).min(track_width);
            if end - start < 2 {
                continue;
            }

            let slide_area = Rect::new(
                area.x + start as u16,
                area.y,
                (end - start) as u16,
                area.height,
            );

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(app.theme.border))
                .title(Span::styled(
                    format!(" {} ", slide.title),
                    Style::default()
                        .fg(app.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(app.theme.bg1));

            let paragraph = Paragraph::new(slide.body.as_str())
                .style(Style::default().fg(app.theme.fg0))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, slide_area);
        }
    }
}

/// Columns available to one slide when `page` slides share `track_width`
pub fn slide_columns(track_width: u16, page: u16, gap_cols: u16) -> u16 {
    let page = page.max(1);
    track_width.saturating_sub(gap_cols.saturating_mul(page - 1)) / page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_columns() {
        assert_eq!(slide_columns(154, 3, 3), 49);
        assert_eq!(slide_columns(94, 2, 3), 45);
        assert_eq!(slide_columns(54, 1, 3), 54);
        assert_eq!(slide_columns(4, 3, 3), 0);
    }
}
