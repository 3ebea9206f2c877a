use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::models::{Language, PrayerName, PrayerTimes};
use crate::prayer_times::EventKind;
use crate::tui::theme;
use crate::utils::format::{format_time, pad_display};

/// Which canonical prayer the countdown is pointing at, if any.
fn highlighted(next: Option<EventKind>) -> Option<PrayerName> {
    match next? {
        EventKind::Prayer(p) => Some(p),
        EventKind::Suhoor => Some(PrayerName::Fajr),
        EventKind::Iftar => Some(PrayerName::Maghrib),
        EventKind::FajrTomorrow | EventKind::SuhoorTomorrow => None,
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    times: Option<&PrayerTimes>,
    next: Option<EventKind>,
    language: Language,
) {
    let block = theme::panel(language.pick("Schedule", "সময়সূচি"), false);
    let script = language.script();
    let current = highlighted(next);

    let Some(times) = times else {
        let list = List::new(vec![ListItem::new(Span::styled("  --:--", theme::dim()))]).block(block);
        frame.render_widget(list, area);
        return;
    };

    let rows: [(&str, _, Option<PrayerName>); 7] = [
        (language.pick("Imsak", "ইমসাক"), times.imsak, None),
        (PrayerName::Fajr.display_name(language), times.fajr, Some(PrayerName::Fajr)),
        (language.pick("Sunrise", "সূর্যোদয়"), times.sunrise, None),
        (PrayerName::Dhuhr.display_name(language), times.dhuhr, Some(PrayerName::Dhuhr)),
        (PrayerName::Asr.display_name(language), times.asr, Some(PrayerName::Asr)),
        (PrayerName::Maghrib.display_name(language), times.maghrib, Some(PrayerName::Maghrib)),
        (PrayerName::Isha.display_name(language), times.isha, Some(PrayerName::Isha)),
    ];

    let items: Vec<ListItem> = rows
        .into_iter()
        .map(|(name, time, prayer)| {
            let is_next = prayer.is_some() && prayer == current;
            let (marker, name_style) = match (is_next, prayer) {
                (true, _) => ("▸ ", theme::gold().add_modifier(Modifier::BOLD)),
                (false, Some(_)) => ("  ", theme::bold()),
                (false, None) => ("  ", theme::dim()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, theme::gold()),
                Span::styled(pad_display(name, 12), name_style),
                Span::styled(format_time(time, script), if is_next { theme::amber() } else { theme::dim() }),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fasting_events_highlight_their_prayer() {
        assert_eq!(highlighted(Some(EventKind::Suhoor)), Some(PrayerName::Fajr));
        assert_eq!(highlighted(Some(EventKind::Iftar)), Some(PrayerName::Maghrib));
        assert_eq!(highlighted(Some(EventKind::Prayer(PrayerName::Asr))), Some(PrayerName::Asr));
        assert_eq!(highlighted(Some(EventKind::FajrTomorrow)), None);
        assert_eq!(highlighted(None), None);
    }
}
