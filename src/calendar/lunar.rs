use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

use crate::models::Language;
use crate::utils::digits::{Script, localize};

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Gregorian years the tabular conversion is valid for.
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1938..=2076;

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("{0} is outside the supported Hijri conversion range")]
    OutOfRange(NaiveDate),
    #[error("lunar calendar provider unavailable: {0}")]
    Unavailable(String),
}

/// Raw output of a lunar calendar provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarParts {
    pub day: u32,
    pub month_name: String,
    pub year: u32,
}

/// Anything that can turn a Gregorian date into a Hijri one.
pub trait LunarCalendar {
    fn convert(&self, date: NaiveDate) -> Result<LunarParts, CalendarError>;
}

/// Table-based Umm al-Qura conversion backed by the `hijri_date` crate.
#[derive(Debug, Clone, Default)]
pub struct TabularHijri {
    /// Days to add before converting, for local moon sighting.
    pub offset_days: i32,
}

impl TabularHijri {
    pub fn new(offset_days: i32) -> Self {
        Self { offset_days }
    }
}

fn hijri_month_name(month: usize) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| HIJRI_MONTH_NAMES.get(i))
        .copied()
}

impl LunarCalendar for TabularHijri {
    fn convert(&self, date: NaiveDate) -> Result<LunarParts, CalendarError> {
        let adjusted = date
            .checked_add_signed(Duration::days(self.offset_days as i64))
            .ok_or(CalendarError::OutOfRange(date))?;
        if !SUPPORTED_YEARS.contains(&adjusted.year()) {
            return Err(CalendarError::OutOfRange(adjusted));
        }

        let hd = HijriDate::from_gr(
            adjusted.year() as usize,
            adjusted.month() as usize,
            adjusted.day() as usize,
        )
        .map_err(|e| CalendarError::Unavailable(e.to_string()))?;

        let month_name = hijri_month_name(hd.month())
            .ok_or_else(|| CalendarError::Unavailable(format!("month {}", hd.month())))?;

        Ok(LunarParts {
            day: hd.day() as u32,
            month_name: month_name.to_string(),
            year: hd.year() as u32,
        })
    }
}

/// A Hijri date with its numbers already rendered in the target script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl LunarDate {
    /// `"Ramadan 5, 1447 AH"`
    pub fn format(&self, language: Language) -> String {
        format!(
            "{} {}, {} {}",
            self.month,
            self.day,
            self.year,
            language.pick("AH", "হিজরি")
        )
    }
}

pub fn to_lunar_date(
    provider: &dyn LunarCalendar,
    date: NaiveDate,
    script: Script,
) -> Result<LunarDate, CalendarError> {
    let parts = provider.convert(date)?;
    Ok(LunarDate {
        day: localize(parts.day, script),
        month: parts.month_name,
        year: localize(parts.year, script),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl LunarCalendar for Fixed {
        fn convert(&self, _date: NaiveDate) -> Result<LunarParts, CalendarError> {
            Ok(LunarParts {
                day: 5,
                month_name: "Ramadan".to_string(),
                year: 1447,
            })
        }
    }

    struct Offline;

    impl LunarCalendar for Offline {
        fn convert(&self, _date: NaiveDate) -> Result<LunarParts, CalendarError> {
            Err(CalendarError::Unavailable("no locale data".to_string()))
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_with_localized_digits() {
        let date = to_lunar_date(&Fixed, ymd(2026, 2, 22), Script::Bengali).unwrap();
        assert_eq!(date.format(Language::Bn), "Ramadan ৫, ১৪৪৭ হিজরি");
        let date = to_lunar_date(&Fixed, ymd(2026, 2, 22), Script::Latin).unwrap();
        assert_eq!(date.format(Language::En), "Ramadan 5, 1447 AH");
    }

    #[test]
    fn provider_failure_is_surfaced() {
        let err = to_lunar_date(&Offline, ymd(2026, 2, 22), Script::Latin).unwrap_err();
        assert!(matches!(err, CalendarError::Unavailable(_)));
    }

    #[test]
    fn tabular_provider_converts_within_range() {
        let parts = TabularHijri::default().convert(ymd(2024, 3, 11)).unwrap();
        assert_eq!(parts.year, 1445);
        assert!((1..=30).contains(&parts.day));
        assert!(HIJRI_MONTH_NAMES.contains(&parts.month_name.as_str()));
    }

    #[test]
    fn offset_shifts_the_day() {
        let date = ymd(2024, 3, 20);
        let base = TabularHijri::new(0).convert(date).unwrap();
        let ahead = TabularHijri::new(1).convert(date).unwrap();
        assert_ne!(base, ahead);
    }

    #[test]
    fn tabular_provider_rejects_out_of_range() {
        let err = TabularHijri::default().convert(ymd(1900, 1, 1)).unwrap_err();
        assert!(matches!(err, CalendarError::OutOfRange(_)));
        assert!(TabularHijri::default().convert(ymd(2100, 1, 1)).is_err());
    }

    #[test]
    fn huge_offset_is_an_error_not_a_panic() {
        let date = ymd(2026, 10, 16);
        let err = TabularHijri::new(i32::MAX).convert(date).unwrap_err();
        assert!(matches!(err, CalendarError::OutOfRange(d) if d == date));
        assert!(TabularHijri::new(i32::MIN).convert(date).is_err());
    }
}
