use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, params};

use crate::models::{ChatMessage, DailyProgress, PrayerTimes};

pub const PROGRESS_KEY: &str = "deen_progress";
pub const CHAT_KEY: &str = "chat_history";
pub const CHAT_HISTORY_LIMIT: usize = 50;

// ─── Cached prayer times ────────────────────────────────────────────────────

fn fmt_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub struct CacheRepo;

impl CacheRepo {
    pub fn get(conn: &Connection, date: NaiveDate) -> Result<Option<PrayerTimes>> {
        let row = conn
            .query_row(
                "SELECT imsak, fajr, sunrise, dhuhr, asr, maghrib, isha
                 FROM prayer_times_cache WHERE date = ?1",
                params![date.to_string()],
                |row| {
                    Ok([
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                        row.get::<_, String>(6)?,
                    ])
                },
            )
            .optional()?;

        let Some([imsak, fajr, sunrise, dhuhr, asr, maghrib, isha]) = row else {
            return Ok(None);
        };
        Ok(Some(PrayerTimes {
            imsak: PrayerTimes::parse_hhmm(&imsak)?,
            fajr: PrayerTimes::parse_hhmm(&fajr)?,
            sunrise: PrayerTimes::parse_hhmm(&sunrise)?,
            dhuhr: PrayerTimes::parse_hhmm(&dhuhr)?,
            asr: PrayerTimes::parse_hhmm(&asr)?,
            maghrib: PrayerTimes::parse_hhmm(&maghrib)?,
            isha: PrayerTimes::parse_hhmm(&isha)?,
        }))
    }

    pub fn store(conn: &Connection, date: NaiveDate, times: &PrayerTimes) -> Result<()> {
        conn.execute(
            "INSERT OR REPLACE INTO prayer_times_cache
                (date, imsak, fajr, sunrise, dhuhr, asr, maghrib, isha)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                date.to_string(),
                fmt_time(times.imsak),
                fmt_time(times.fajr),
                fmt_time(times.sunrise),
                fmt_time(times.dhuhr),
                fmt_time(times.asr),
                fmt_time(times.maghrib),
                fmt_time(times.isha),
            ],
        )?;
        Ok(())
    }

    pub fn clear_all(conn: &Connection) -> Result<()> {
        conn.execute("DELETE FROM prayer_times_cache", [])?;
        Ok(())
    }
}

// ─── Meta / key-value ───────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Persistent string storage keyed by name.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// [`KeyValueStore`] over the `app_meta` table.
pub struct MetaStore<'a> {
    conn: &'a Connection,
}

impl<'a> MetaStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for MetaStore<'_> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        MetaRepo::get(self.conn, key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        MetaRepo::set(self.conn, key, value)
    }
}

// ─── Daily progress ─────────────────────────────────────────────────────────

pub struct ProgressStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The record for `today`. A stored record from another day, a missing
    /// one, or one that fails to parse all yield a fresh record.
    pub fn load_for(&self, today: NaiveDate) -> Result<DailyProgress> {
        let stored = self
            .store
            .load(PROGRESS_KEY)?
            .and_then(|raw| match serde_json::from_str::<DailyProgress>(&raw) {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("discarding unreadable progress record: {e}");
                    None
                }
            });

        Ok(match stored {
            Some(p) if p.is_for(today) => p,
            _ => DailyProgress::new(today),
        })
    }

    /// Apply `f` to today's record and persist the result.
    pub fn update<F>(&mut self, today: NaiveDate, f: F) -> Result<DailyProgress>
    where
        F: FnOnce(&mut DailyProgress),
    {
        let mut progress = self.load_for(today)?;
        f(&mut progress);
        let raw = serde_json::to_string(&progress).context("Serializing progress")?;
        self.store.save(PROGRESS_KEY, &raw)?;
        Ok(progress)
    }
}

// ─── Chat transcript ────────────────────────────────────────────────────────

pub struct ChatStore<S> {
    store: S,
}

impl<S: KeyValueStore> ChatStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn history(&self) -> Result<Vec<ChatMessage>> {
        match self.store.load(CHAT_KEY)? {
            Some(raw) => serde_json::from_str(&raw).context("Parsing chat history"),
            None => Ok(Vec::new()),
        }
    }

    /// Append messages, keeping only the most recent [`CHAT_HISTORY_LIMIT`].
    pub fn append(&mut self, messages: &[ChatMessage]) -> Result<()> {
        let mut history = self.history()?;
        history.extend_from_slice(messages);
        let excess = history.len().saturating_sub(CHAT_HISTORY_LIMIT);
        history.drain(..excess);
        self.write(&history)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.write(&[])
    }

    fn write(&mut self, history: &[ChatMessage]) -> Result<()> {
        let raw = serde_json::to_string(history).context("Serializing chat history")?;
        self.store.save(CHAT_KEY, &raw)
    }
}
