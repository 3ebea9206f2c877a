use anyhow::{Context, Result, anyhow, bail};
use chrono::{Datelike, Local, NaiveDate};
use rusqlite::Connection;
use std::str::FromStr;

use crate::assistant::GeminiClient;
use crate::calendar::{DateLines, TabularHijri};
use crate::cli::args::parse_page_delta;
use crate::config::AppConfig;
use crate::content::{QUOTES, VERSE_OF_THE_DAY, duas, quote_for_today};
use crate::db::{ChatStore, MetaStore, ProgressStore};
use crate::gateway::quran::filter_surahs;
use crate::gateway::{NominatimClient, PRAYER_METHODS, QuranClient, method_name};
use crate::models::{ChatMessage, DailyProgress, Language, PrayerName};
use crate::prayer_times::{TimingsService, next_event};
use crate::utils::digits::localize;
use crate::utils::format::{format_time, pad_display, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(conn: &Connection, config: &AppConfig) -> Result<()> {
    let now = Local::now().naive_local();
    let date = now.date();
    let language = config.display.language;
    let script = language.script();

    let service = TimingsService::from_config(config)?;
    let times = service.times_for(conn, date)?;
    let lunar = TabularHijri::new(config.prayer.hijri_offset);
    let dates = DateLines::for_date(date, language, &lunar);

    println!();
    println_colored!(GOLD, "  {} · {}", config.location.name, method_name(config.prayer.method));
    match &dates.hijri {
        Ok(hijri) => println_colored!(BOLD, "  {}", hijri),
        Err(e) => println_colored!(RED, "  {}", e),
    }
    println!("  {}", dates.bengali);
    println_colored!(DIM, "  {}", dates.gregorian);
    println!();

    let rows = [
        (language.pick("Imsak", "ইমসাক"), times.imsak),
        (PrayerName::Fajr.display_name(language), times.fajr),
        (language.pick("Sunrise", "সূর্যোদয়"), times.sunrise),
        (PrayerName::Dhuhr.display_name(language), times.dhuhr),
        (PrayerName::Asr.display_name(language), times.asr),
        (PrayerName::Maghrib.display_name(language), times.maghrib),
        (PrayerName::Isha.display_name(language), times.isha),
    ];
    for (name, time) in rows {
        let line = format!("  {}  {}", pad_display(name, 10), format_time(time, script));
        if time < now.time() {
            println_colored!(DIM, "{}", line);
        } else {
            println_colored!(BOLD, "{}", line);
        }
    }

    let fasting = config.fasting.period().contains(date);
    let event = next_event(&times, now, fasting, language);
    println!();
    println_colored!(
        AMBER,
        "  {}: {}  ({})",
        language.pick("Next", "পরবর্তী"),
        event.label,
        event.countdown(now).format(script)
    );
    println!();
    Ok(())
}

// ─── Calendar ────────────────────────────────────────────────────────────────

pub fn handle_calendar(config: &AppConfig, month: Option<u32>, year: Option<i32>) -> Result<()> {
    let today = today();
    let month = month.unwrap_or(today.month());
    let year = year.unwrap_or(today.year());
    if !(1..=12).contains(&month) {
        bail!("Month must be between 1 and 12");
    }

    let service = TimingsService::from_config(config)?;
    let days = service
        .client()
        .calendar(
            year,
            month,
            config.location.latitude,
            config.location.longitude,
            config.prayer.method,
        )
        .context("Fetching monthly calendar")?;

    let language = config.display.language;
    let script = language.script();

    println!();
    println_colored!(GOLD, "  {} — {}/{}", config.location.name, month, year);
    println_colored!(
        DIM,
        "  {}  {}  {}  {}",
        pad_display(language.pick("Date", "তারিখ"), 13),
        pad_display("Hijri", 26),
        pad_display(PrayerName::Fajr.display_name(language), 7),
        PrayerName::Maghrib.display_name(language)
    );
    for day in days {
        let line = format!(
            "  {}  {}  {}  {}",
            pad_display(&day.readable, 13),
            pad_display(&day.hijri, 26),
            pad_display(&format_time(day.times.fajr, script), 7),
            format_time(day.times.maghrib, script)
        );
        if day.day == today.day() && month == today.month() && year == today.year() {
            println_colored!(AMBER, "{}", line);
        } else {
            println!("{}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Location & method ───────────────────────────────────────────────────────

pub fn handle_location(
    conn: &Connection,
    config: &mut AppConfig,
    query: &[String],
    coords: Option<(f64, f64)>,
    pick: usize,
) -> Result<()> {
    let geocoder = NominatimClient::new(&config.endpoints.nominatim)?;

    let (name, lat, lng) = match coords {
        Some((lat, lng)) => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                bail!("Coordinates out of range: {lat}, {lng}");
            }
            (geocoder.reverse(lat, lng), lat, lng)
        }
        None if query.is_empty() => {
            println!();
            println_colored!(GOLD, "  {}", config.location.name);
            println_colored!(DIM, "  {:.4}, {:.4}", config.location.latitude, config.location.longitude);
            println!();
            return Ok(());
        }
        None => {
            let query = query.join(" ");
            let places = geocoder.search(&query)?;
            if places.is_empty() {
                if query.trim().chars().count() < 3 {
                    bail!("Enter at least 3 characters to search");
                }
                bail!("No city found for '{}'", query);
            }

            println!();
            for (i, place) in places.iter().enumerate() {
                let color = if i + 1 == pick { GREEN } else { DIM };
                println_colored!(color, "  {}. {}", i + 1, place.display_name);
            }
            let place = places
                .get(pick.saturating_sub(1))
                .ok_or_else(|| anyhow!("No result number {} (found {})", pick, places.len()))?;
            (place.short_name().to_string(), place.lat, place.lng)
        }
    };

    config.location.name = name;
    config.location.latitude = lat;
    config.location.longitude = lng;
    config.save()?;
    TimingsService::invalidate(conn)?;

    println!();
    println_colored!(GREEN, "  ✓ Location set to {} ({:.4}, {:.4})", config.location.name, lat, lng);
    println!();
    Ok(())
}

pub fn handle_method(conn: &Connection, config: &mut AppConfig, id: Option<u32>) -> Result<()> {
    let Some(id) = id else {
        println!();
        for (method, name) in PRAYER_METHODS {
            let line = format!("  {:>2}  {}", method, name);
            if *method == config.prayer.method {
                println_colored!(GREEN, "{}  ◀", line);
            } else {
                println!("{}", line);
            }
        }
        println!();
        return Ok(());
    };

    if !PRAYER_METHODS.iter().any(|(m, _)| *m == id) {
        bail!("Unknown method {}. Run `nur method` to list them", id);
    }
    config.prayer.method = id;
    config.save()?;
    TimingsService::invalidate(conn)?;
    println_colored!(GREEN, "  ✓ Calculation method set to {}", method_name(id));
    Ok(())
}

pub fn handle_lang(config: &mut AppConfig, raw: &str) -> Result<()> {
    let language = Language::from_str(raw)?;
    config.display.language = language;
    config.save()?;
    println_colored!(GREEN, "  ✓ {}", language.pick("Language set to English", "ভাষা বাংলা করা হয়েছে"));
    Ok(())
}

// ─── Daily progress ──────────────────────────────────────────────────────────

fn update_progress<F>(conn: &Connection, f: F) -> Result<DailyProgress>
where
    F: FnOnce(&mut DailyProgress),
{
    ProgressStore::new(MetaStore::new(conn)).update(today(), f)
}

pub fn handle_mark(conn: &Connection, config: &AppConfig, prayer_str: &str) -> Result<()> {
    let prayer = PrayerName::from_str(prayer_str)?;
    let progress = update_progress(conn, |p| p.toggle_prayer(prayer))?;
    let name = prayer.display_name(config.display.language);
    if progress.prayers.get(prayer) {
        println_colored!(GREEN, "  ✓ {} done", name);
    } else {
        println_colored!(DIM, "  ○ {} unmarked", name);
    }
    Ok(())
}

pub fn handle_fast(conn: &Connection) -> Result<()> {
    let progress = update_progress(conn, |p| p.toggle_fasting())?;
    if progress.fasting {
        println_colored!(GREEN, "  ✓ Fasting today");
    } else {
        println_colored!(DIM, "  ○ Not fasting today");
    }
    Ok(())
}

pub fn handle_pages(conn: &Connection, raw: &str) -> Result<()> {
    let delta = parse_page_delta(raw).ok_or_else(|| anyhow!("Expected a page delta like +2 or -1, got '{}'", raw))?;
    let progress = update_progress(conn, |p| p.adjust_pages(delta))?;
    println_colored!(GREEN, "  ✓ Quran pages today: {}", progress.quran_pages);
    Ok(())
}

pub fn handle_progress(conn: &Connection, config: &AppConfig) -> Result<()> {
    let progress = ProgressStore::new(MetaStore::new(conn)).load_for(today())?;
    let language = config.display.language;
    let script = language.script();
    let done = progress.completed_prayers();

    println!();
    println_colored!(
        GOLD,
        "  {}  {} {}/{}",
        language.pick("Prayers", "নামাজ"),
        progress_bar(done as u32, 5, 10),
        localize(done, script),
        localize(5, script)
    );
    for prayer in PrayerName::ALL {
        if progress.prayers.get(prayer) {
            println_colored!(GREEN, "    ✓ {}", prayer.display_name(language));
        } else {
            println_colored!(DIM, "    ○ {}", prayer.display_name(language));
        }
    }
    println!();
    let fast = if progress.fasting { "✓" } else { "○" };
    println!("  {} {}", fast, language.pick("Fasting", "রোজা"));
    println!(
        "  {} {}",
        language.pick("Quran pages:", "কুরআন পৃষ্ঠা:"),
        localize(progress.quran_pages, script)
    );
    println!();
    Ok(())
}

// ─── Quran ───────────────────────────────────────────────────────────────────

pub fn handle_quran(config: &AppConfig, number: Option<u32>, search: Option<&str>) -> Result<()> {
    let client = QuranClient::new(&config.endpoints.quran)?;
    let language = config.display.language;

    let Some(number) = number else {
        let surahs = client.surahs().context("Loading surah list")?;
        let shown = filter_surahs(&surahs, search.unwrap_or(""));
        println!();
        for s in shown {
            println!(
                "  {:>3}  {}  {}  {}",
                s.number,
                pad_display(&s.english_name, 20),
                pad_display(&s.english_name_translation, 28),
                s.name
            );
        }
        println!();
        return Ok(());
    };

    if !(1..=114).contains(&number) {
        bail!("Surah number must be between 1 and 114");
    }
    let detail = client.surah(number).context("Loading surah")?;
    println!();
    println_colored!(
        GOLD,
        "  {} · {} · {} {}",
        detail.surah.english_name,
        detail.surah.name,
        localize(detail.surah.number_of_ayahs, language.script()),
        language.pick("Ayahs", "আয়াত")
    );
    println!();
    for verse in &detail.verses {
        println_colored!(BOLD, "  {}", verse.arabic);
        let translation = match language {
            Language::En => &verse.english,
            Language::Bn => &verse.bengali,
        };
        println!("  {}. {}", localize(verse.number_in_surah, language.script()), translation);
        println!();
    }
    Ok(())
}

// ─── Duas & quote ────────────────────────────────────────────────────────────

pub fn handle_dua(config: &AppConfig, category: Option<&str>, search: Option<&str>) -> Result<()> {
    let language = config.display.language;
    let hits = duas::filter(category, search.unwrap_or(""));

    println!();
    if hits.is_empty() {
        println_colored!(DIM, "  No supplications match. Categories: {}", duas::categories().join(", "));
        println!();
        return Ok(());
    }
    for dua in hits {
        println_colored!(GOLD, "  {} ({})", dua.title.get(language), dua.category);
        println_colored!(BOLD, "  {}", dua.arabic);
        println_colored!(DIM, "  {}", dua.transliteration);
        println!("  {}", dua.translation.get(language));
        if let Some(reference) = dua.reference {
            println_colored!(DIM, "  {}: {}", language.pick("Ref", "সূত্র"), reference);
        }
        println!();
    }
    Ok(())
}

pub fn handle_quote(config: &AppConfig) -> Result<()> {
    let language = config.display.language;
    let quote = quote_for_today(today(), QUOTES).ok_or_else(|| anyhow!("No quotes available"))?;
    let sections = [
        (language.pick("Verse of the Day", "আজকের আয়াত"), &VERSE_OF_THE_DAY),
        (language.pick("Daily Hadith", "আজকের হাদিস"), quote),
    ];
    println!();
    for (heading, quote) in sections {
        println_colored!(GOLD, "  {}", heading);
        println_colored!(BOLD, "  “{}”", quote.text.get(language));
        println_colored!(DIM, "  — {}", quote.source.get(language));
        println!();
    }
    Ok(())
}

// ─── Assistant ───────────────────────────────────────────────────────────────

pub fn handle_ask(conn: &Connection, config: &AppConfig, message: &[String], reset: bool) -> Result<()> {
    let mut chat = ChatStore::new(MetaStore::new(conn));
    if reset {
        chat.clear()?;
        println_colored!(DIM, "  Conversation cleared");
    }

    let message = message.join(" ");
    if message.trim().is_empty() {
        if reset {
            return Ok(());
        }
        bail!("Ask a question, e.g. `nur ask How do I calculate Zakat?`");
    }

    let client = GeminiClient::from_config(&config.assistant, &config.endpoints.gemini)?;
    let history = chat.history()?;
    let reply = client.chat(&history, &message)?;
    chat.append(&[ChatMessage::user(message), ChatMessage::model(reply.clone())])?;

    println!();
    println_colored!(GOLD, "  Nur");
    for line in reply.lines() {
        println!("  {}", line);
    }
    println!();
    Ok(())
}
