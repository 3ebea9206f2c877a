use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PrayerName;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerChecklist {
    pub fajr: bool,
    pub dhuhr: bool,
    pub asr: bool,
    pub maghrib: bool,
    pub isha: bool,
}

impl PrayerChecklist {
    pub fn get(&self, prayer: PrayerName) -> bool {
        match prayer {
            PrayerName::Fajr => self.fajr,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }

    fn slot(&mut self, prayer: PrayerName) -> &mut bool {
        match prayer {
            PrayerName::Fajr => &mut self.fajr,
            PrayerName::Dhuhr => &mut self.dhuhr,
            PrayerName::Asr => &mut self.asr,
            PrayerName::Maghrib => &mut self.maghrib,
            PrayerName::Isha => &mut self.isha,
        }
    }
}

/// Self-reported devotional checklist for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    /// ISO date (`YYYY-MM-DD`) the record belongs to.
    pub date: String,
    pub fasting: bool,
    pub prayers: PrayerChecklist,
    pub quran_pages: u32,
}

impl DailyProgress {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            fasting: false,
            prayers: PrayerChecklist::default(),
            quran_pages: 0,
        }
    }

    pub fn is_for(&self, date: NaiveDate) -> bool {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map(|d| d == date)
            .unwrap_or(false)
    }

    pub fn toggle_prayer(&mut self, prayer: PrayerName) {
        let slot = self.prayers.slot(prayer);
        *slot = !*slot;
    }

    pub fn toggle_fasting(&mut self) {
        self.fasting = !self.fasting;
    }

    pub fn add_page(&mut self) {
        self.quran_pages = self.quran_pages.saturating_add(1);
    }

    pub fn remove_page(&mut self) {
        self.quran_pages = self.quran_pages.saturating_sub(1);
    }

    /// Apply a signed page delta, clamped to `0..=u32::MAX`.
    pub fn adjust_pages(&mut self, delta: i32) {
        self.quran_pages = self.quran_pages.saturating_add_signed(delta);
    }

    pub fn completed_prayers(&self) -> usize {
        PrayerName::ALL
            .iter()
            .filter(|p| self.prayers.get(**p))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn fresh_record_is_empty() {
        let p = DailyProgress::new(day());
        assert_eq!(p.date, "2026-03-01");
        assert_eq!(p.completed_prayers(), 0);
        assert!(!p.fasting);
        assert!(p.is_for(day()));
        assert!(!p.is_for(day().succ_opt().unwrap()));
    }

    #[test]
    fn toggles_and_page_counter() {
        let mut p = DailyProgress::new(day());
        p.toggle_prayer(PrayerName::Asr);
        p.toggle_prayer(PrayerName::Isha);
        p.toggle_prayer(PrayerName::Isha);
        assert_eq!(p.completed_prayers(), 1);
        assert!(p.prayers.asr);

        p.remove_page();
        assert_eq!(p.quran_pages, 0);
        p.add_page();
        p.add_page();
        p.remove_page();
        assert_eq!(p.quran_pages, 1);
    }

    #[test]
    fn page_delta_applies_in_one_step() {
        let mut p = DailyProgress::new(day());
        p.adjust_pages(3);
        p.adjust_pages(-1);
        assert_eq!(p.quran_pages, 2);
        p.adjust_pages(-5);
        assert_eq!(p.quran_pages, 0);
        p.adjust_pages(i32::MAX);
        p.adjust_pages(i32::MAX);
        p.adjust_pages(i32::MAX);
        assert_eq!(p.quran_pages, u32::MAX);
    }

    #[test]
    fn json_shape_uses_camel_case() {
        let mut p = DailyProgress::new(day());
        p.toggle_fasting();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["quranPages"], 0);
        assert_eq!(json["fasting"], true);
        assert_eq!(json["prayers"]["maghrib"], false);
    }
}
