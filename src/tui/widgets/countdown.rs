use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::models::{Language, PrayerTimes};
use crate::prayer_times::PrayerEvent;
use crate::tui::theme;
use crate::utils::format::format_time;

pub struct CountdownView<'a> {
    pub event: Option<&'a PrayerEvent>,
    pub times: Option<&'a PrayerTimes>,
    pub now: NaiveDateTime,
    pub fasting_active: bool,
    pub language: Language,
    pub fetch_error: Option<&'a str>,
}

pub fn render(frame: &mut Frame, area: Rect, view: &CountdownView) {
    let language = view.language;
    let script = language.script();
    let title = if view.fasting_active {
        language.pick("Fasting", "রোজা")
    } else {
        language.pick("Next Prayer", "পরবর্তী নামাজ")
    };
    let block = theme::panel(title, false);

    let mut lines = vec![Line::from("")];
    match (view.event, view.fetch_error) {
        (_, Some(err)) => {
            lines.push(Line::from(Span::styled(
                language.pick("Could not load prayer times", "নামাজের সময় লোড করা যায়নি"),
                theme::red().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(err, theme::dim())));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("[r]", theme::gold()),
                Span::styled(language.pick(" retry", " আবার চেষ্টা"), theme::dim()),
            ]));
        }
        (None, None) => {
            lines.push(Line::from(Span::styled(
                language.pick("Loading…", "লোড হচ্ছে…"),
                theme::dim(),
            )));
        }
        (Some(event), None) => {
            lines.push(Line::from(Span::styled(
                event.label.to_uppercase(),
                theme::gold().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                event.countdown(view.now).format(script),
                theme::amber().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            if let Some(times) = view.times {
                lines.push(Line::from(vec![
                    Span::styled(language.pick("Suhoor ", "সেহরি "), theme::dim()),
                    Span::styled(format_time(times.fajr, script), theme::bold()),
                    Span::styled("   ·   ", theme::dim()),
                    Span::styled(language.pick("Iftar ", "ইফতার "), theme::dim()),
                    Span::styled(format_time(times.maghrib, script), theme::bold()),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
