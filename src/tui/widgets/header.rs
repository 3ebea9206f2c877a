use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::calendar::DateLines;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, dates: &DateLines, location: &str) {
    let title_line = Line::from(vec![
        Span::styled("  نور  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("nur", theme::gold()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(location, theme::olive()),
    ]);

    let hijri = match &dates.hijri {
        Ok(h) => Span::styled(h.as_str(), theme::amber()),
        Err(e) => Span::styled(e.to_string(), theme::red()),
    };

    let date_line = Line::from(vec![
        hijri,
        Span::styled("  ·  ", theme::dim()),
        Span::styled(dates.bengali.as_str(), theme::olive()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(dates.gregorian.as_str(), theme::dim()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(vec![title_line, Line::from(""), date_line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
