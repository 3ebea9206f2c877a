use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::models::{DailyProgress, Language, PrayerName};
use crate::tui::theme;
use crate::utils::digits::localize;
use crate::utils::format::{pad_display, progress_bar};

/// Checklist rows: the five prayers, then the fast.
pub const ROWS: usize = PrayerName::ALL.len() + 1;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    progress: &DailyProgress,
    focus_idx: usize,
    language: Language,
) {
    let block = theme::panel(language.pick("Today", "আজকের আমল"), true);
    let script = language.script();

    let check = |done: bool| {
        if done {
            ("●", theme::green())
        } else {
            ("○", theme::dim())
        }
    };

    let labels = PrayerName::ALL
        .iter()
        .map(|p| (p.display_name(language), progress.prayers.get(*p)))
        .chain(std::iter::once((language.pick("Fasting", "রোজা"), progress.fasting)));

    let mut items: Vec<ListItem> = labels
        .enumerate()
        .map(|(i, (label, done))| {
            let (icon, icon_style) = check(done);
            let name_style = if i == focus_idx {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let cursor = if i == focus_idx { "▸ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(cursor, theme::gold()),
                Span::styled(pad_display(label, 12), name_style),
                Span::styled(icon, icon_style),
            ]))
        })
        .collect();

    let done = progress.completed_prayers();
    items.push(ListItem::new(Line::from("")));
    items.push(ListItem::new(Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(progress_bar(done as u32, 5, 10), theme::olive()),
        Span::styled(
            format!("  {}/{}", localize(done, script), localize(5, script)),
            theme::dim(),
        ),
    ])));
    items.push(ListItem::new(Line::from(vec![
        Span::styled(format!("  {}", language.pick("Quran pages: ", "কুরআন পৃষ্ঠা: ")), theme::dim()),
        Span::styled(localize(progress.quran_pages, script), theme::amber().add_modifier(Modifier::BOLD)),
    ])));

    frame.render_widget(List::new(items).block(block), area);
}
