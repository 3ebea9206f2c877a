use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::content::Quote;
use crate::models::Language;
use crate::tui::theme;

fn quote_lines(heading: &str, quote: &Quote, language: Language) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            heading.to_string(),
            theme::olive().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("“{}”", quote.text.get(language)),
            theme::bold().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(format!("— {}", quote.source.get(language)), theme::dim())),
    ]
}

/// Verse of the day on top, the rotating hadith below it.
pub fn render(frame: &mut Frame, area: Rect, verse: &Quote, hadith: Option<&Quote>, language: Language) {
    let block = theme::panel(language.pick("Daily Reminder", "দৈনিক স্মরণ"), false);

    let mut lines = quote_lines(language.pick("Verse of the Day", "আজকের আয়াত"), verse, language);
    lines.push(Line::from(""));
    match hadith {
        Some(q) => lines.extend(quote_lines(language.pick("Daily Hadith", "আজকের হাদিস"), q, language)),
        None => lines.push(Line::from(Span::styled("—", theme::dim()))),
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{QUOTES, VERSE_OF_THE_DAY};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(language: Language) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 14)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &VERSE_OF_THE_DAY, QUOTES.first(), language);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_verse_and_hadith() {
        let screen = rendered(Language::En);
        assert!(screen.contains("Verse of the Day"));
        assert!(screen.contains("Al-Baqarah 2:152"));
        assert!(screen.contains("Daily Hadith"));
        assert!(screen.contains("Sahih Bukhari"));
    }
}
