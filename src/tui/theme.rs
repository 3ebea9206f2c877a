use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

pub const BG: Color = Color::Rgb(14, 17, 15);
pub const SURFACE: Color = Color::Rgb(22, 27, 23);
pub const BORDER: Color = Color::Rgb(48, 58, 46);
pub const TEXT: Color = Color::Rgb(226, 230, 220);
pub const TEXT_DIM: Color = Color::Rgb(122, 134, 118);
pub const OLIVE: Color = Color::Rgb(128, 148, 72);
pub const GOLD: Color = Color::Rgb(204, 170, 86);
pub const GREEN: Color = Color::Rgb(96, 168, 104);
pub const AMBER: Color = Color::Rgb(214, 146, 64);
pub const RED: Color = Color::Rgb(188, 84, 66);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn olive() -> Style {
    Style::default().fg(OLIVE)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

/// Rounded card with a title, highlighted when focused.
pub fn panel(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            olive().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(BORDER)
        })
        .style(surface())
}
