use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::models::Language;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, language: Language, message: Option<&str>) {
    if let Some(message) = message {
        let paragraph = Paragraph::new(Line::from(Span::styled(message, theme::red())))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let hints = [
        ("[↑↓]", language.pick(" select  ", " বাছাই  ")),
        ("[m]", language.pick(" mark  ", " চিহ্ন  ")),
        ("[f]", language.pick(" fast  ", " রোজা  ")),
        ("[+/-]", language.pick(" pages  ", " পৃষ্ঠা  ")),
        ("[l]", language.pick(" বাংলা  ", " English  ")),
        ("[?]", language.pick(" help  ", " সাহায্য  ")),
        ("[Esc]", language.pick(" quit", " বের হন")),
    ];

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(key, theme::gold()));
        spans.push(Span::styled(label, theme::dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
