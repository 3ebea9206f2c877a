use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::{info, warn};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use rusqlite::Connection;
use std::time::Duration;

use crate::calendar::{DateLines, TabularHijri};
use crate::config::AppConfig;
use crate::content::{QUOTES, Quote, VERSE_OF_THE_DAY, quote_for_today};
use crate::db::{MetaStore, ProgressStore};
use crate::models::{DailyProgress, PrayerName, PrayerTimes};
use crate::prayer_times::{PrayerEvent, TimingsService, next_event};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::countdown::CountdownView;
use crate::tui::widgets::{countdown, header, progress, quote, schedule, statusbar};

const TICK: Duration = Duration::from_secs(1);

pub struct App {
    pub config: AppConfig,
    pub should_quit: bool,
    pub show_help: bool,
    pub focus_idx: usize,
    config_dirty: bool,

    service: TimingsService,
    lunar: TabularHijri,

    // Day state, rebuilt on load and on date rollover
    pub today: NaiveDate,
    pub now: NaiveDateTime,
    pub dates: DateLines,
    pub times: Option<PrayerTimes>,
    pub fetch_error: Option<String>,
    pub event: Option<PrayerEvent>,
    pub progress: DailyProgress,
    pub quote: Option<Quote>,
    pub status: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, now: NaiveDateTime) -> Result<Self> {
        let service = TimingsService::from_config(&config)?;
        let lunar = TabularHijri::new(config.prayer.hijri_offset);
        let today = now.date();
        let dates = DateLines::for_date(today, config.display.language, &lunar);

        Ok(App {
            config,
            should_quit: false,
            show_help: false,
            focus_idx: 0,
            config_dirty: false,
            service,
            lunar,
            today,
            now,
            dates,
            times: None,
            fetch_error: None,
            event: None,
            progress: DailyProgress::new(today),
            quote: None,
            status: None,
        })
    }

    pub fn fasting_active(&self) -> bool {
        self.config.fasting.period().contains(self.today)
    }

    /// Rebuild everything that depends on the current date.
    pub fn load(&mut self, conn: &Connection, now: NaiveDateTime) -> Result<()> {
        self.now = now;
        self.today = now.date();
        self.dates = DateLines::for_date(self.today, self.config.display.language, &self.lunar);
        self.quote = quote_for_today(self.today, QUOTES).copied();
        self.progress = ProgressStore::new(MetaStore::new(conn)).load_for(self.today)?;
        self.fetch_times(conn);
        self.recompute_event();
        Ok(())
    }

    fn fetch_times(&mut self, conn: &Connection) {
        match self.service.times_for(conn, self.today) {
            Ok(times) => {
                self.times = Some(times);
                self.fetch_error = None;
            }
            Err(e) => {
                warn!("could not load prayer times: {e:#}");
                self.times = None;
                self.fetch_error = Some(format!("{e:#}"));
            }
        }
    }

    fn recompute_event(&mut self) {
        let fasting = self.fasting_active();
        self.event = self
            .times
            .as_ref()
            .map(|t| next_event(t, self.now, fasting, self.config.display.language));
    }

    pub fn tick(&mut self, conn: &Connection, now: NaiveDateTime) {
        if now.date() != self.today {
            info!("day rolled over to {}, reloading", now.date());
            if let Err(e) = self.load(conn, now) {
                warn!("reload after rollover failed: {e:#}");
                self.status = Some(format!("{e:#}"));
            }
            return;
        }
        self.now = now;
        self.recompute_event();
    }

    pub fn handle_key(&mut self, key: KeyEvent, conn: &Connection) {
        // Some terminals also report release and repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus_idx = self.focus_idx.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.focus_idx = (self.focus_idx + 1).min(progress::ROWS - 1);
            }
            KeyCode::Enter | KeyCode::Char('m') => self.toggle_focused(conn),
            KeyCode::Char('f') => self.update_progress(conn, |p| p.toggle_fasting()),
            KeyCode::Char('+') | KeyCode::Char('=') => self.update_progress(conn, |p| p.add_page()),
            KeyCode::Char('-') => self.update_progress(conn, |p| p.remove_page()),
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char('r') => {
                info!("retrying prayer times fetch");
                self.fetch_times(conn);
                self.recompute_event();
            }
            _ => {}
        }
    }

    fn toggle_focused(&mut self, conn: &Connection) {
        match PrayerName::ALL.get(self.focus_idx).copied() {
            Some(prayer) => self.update_progress(conn, |p| p.toggle_prayer(prayer)),
            None => self.update_progress(conn, |p| p.toggle_fasting()),
        }
    }

    fn update_progress<F>(&mut self, conn: &Connection, f: F)
    where
        F: FnOnce(&mut DailyProgress),
    {
        match ProgressStore::new(MetaStore::new(conn)).update(self.today, f) {
            Ok(progress) => {
                self.progress = progress;
                self.status = None;
            }
            Err(e) => {
                warn!("saving progress failed: {e:#}");
                self.status = Some(format!("{e:#}"));
            }
        }
    }

    fn toggle_language(&mut self) {
        let language = self.config.display.language.toggled();
        self.config.display.language = language;
        self.config_dirty = true;
        self.dates = DateLines::for_date(self.today, language, &self.lunar);
        self.recompute_event();
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);
        if self.show_help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        let language = self.config.display.language;

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], &self.dates, &self.config.location.name);
        statusbar::render(frame, outer_chunks[2], language, self.status.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer_chunks[1]);

        // Left column: countdown + schedule
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(9)])
            .split(columns[0]);

        countdown::render(
            frame,
            left[0],
            &CountdownView {
                event: self.event.as_ref(),
                times: self.times.as_ref(),
                now: self.now,
                fasting_active: self.fasting_active(),
                language,
                fetch_error: self.fetch_error.as_deref(),
            },
        );
        schedule::render(
            frame,
            left[1],
            self.times.as_ref(),
            self.event.as_ref().map(|e| e.kind),
            language,
        );

        // Right column: checklist + quote
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(progress::ROWS as u16 + 5), Constraint::Min(0)])
            .split(columns[1]);

        progress::render(frame, right[0], &self.progress, self.focus_idx, language);
        quote::render(frame, right[1], &VERSE_OF_THE_DAY, self.quote.as_ref(), language);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let language = self.config.display.language;

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).max(12),
        }
        .intersection(area);

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [↑ ↓]        ", language.pick("Move through the checklist", "তালিকায় উপরে/নিচে")),
            ("  [m] / Enter  ", language.pick("Toggle selected item", "নির্বাচিত আমল চিহ্নিত করুন")),
            ("  [f]          ", language.pick("Toggle today's fast", "আজকের রোজা")),
            ("  [+] / [-]    ", language.pick("Add / remove a Quran page", "কুরআন পৃষ্ঠা যোগ / বাদ")),
            ("  [l]          ", language.pick("Switch to Bangla", "ইংরেজিতে যান")),
            ("  [r]          ", language.pick("Retry loading prayer times", "আবার লোড করুন")),
            ("  [?]          ", language.pick("Toggle help", "সাহায্য")),
            ("  [Esc]        ", language.pick("Quit", "বের হন")),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                language.pick("  Keybindings", "  কী-বোর্ড"),
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        help_text.extend(bindings.into_iter().map(|(key, label)| {
            Line::from(vec![
                Span::styled(key, theme::gold()),
                Span::styled(label, theme::dim()),
            ])
        }));

        let block = Block::default()
            .title(Span::styled(language.pick(" Help ", " সাহায্য "), theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    events: &EventHandler,
    conn: &Connection,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, conn);
                if app.should_quit {
                    return Ok(());
                }
            }
            Event::Tick => app.tick(conn, Local::now().naive_local()),
        }
    }
}

pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let mut app = App::new(config, Local::now().naive_local())?;
    app.load(&conn, Local::now().naive_local())?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(TICK);
    let result = event_loop(&mut terminal, &mut app, &events, &conn);
    drop(events);
    ratatui::restore();

    if app.config_dirty {
        app.config.save()?;
    }
    result
}
