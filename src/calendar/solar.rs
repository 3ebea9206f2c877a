//! Bengali solar calendar (Bangabda) derived from a Gregorian date.
//!
//! The solar year starts on 14 April. Month lengths come from a fixed table
//! whose last month gains a day when the Gregorian year the solar year began
//! in is a leap year.

use chrono::{Datelike, NaiveDate};

use crate::models::Language;
use crate::utils::digits::localize;

const MONTH_NAMES: [&str; 12] = [
    "বৈশাখ",
    "জ্যৈষ্ঠ",
    "আষাঢ়",
    "শ্রাবণ",
    "ভাদ্র",
    "আশ্বিন",
    "কার্তিক",
    "অগ্রহায়ণ",
    "পৌষ",
    "মাঘ",
    "ফাল্গুন",
    "চৈত্র",
];

const NEW_YEAR_MONTH: u32 = 4;
const NEW_YEAR_DAY: u32 = 14;
/// Gregorian year minus this gives the solar year, once the new year has passed.
const ERA_OFFSET: i32 = 593;
const VARIABLE_MONTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarDate {
    pub day: u32,
    /// Zero-based index into the month table; 0 is Boishakh.
    pub month_index: usize,
    pub year: i32,
    pub ordinal_suffix: &'static str,
}

impl SolarDate {
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month_index]
    }

    /// `"১লা বৈশাখ, ১৪৩৩ বঙ্গাব্দ"` in Bengali, Latin digits otherwise.
    pub fn format(&self, language: Language) -> String {
        let script = language.script();
        format!(
            "{}{} {}, {} {}",
            localize(self.day, script),
            self.ordinal_suffix,
            self.month_name(),
            localize(self.year, script),
            language.pick("Bengali Era", "বঙ্গাব্দ"),
        )
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn month_lengths(epoch_year: i32) -> [u32; 12] {
    let mut lengths = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 30];
    if is_leap_year(epoch_year) {
        lengths[VARIABLE_MONTH] = 31;
    }
    lengths
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 => "লা",
        2 | 3 => "রা",
        4 => "ঠা",
        5..=18 => "ই",
        _ => "শে",
    }
}

/// The most recent solar new year on or before `date`, with its Gregorian year.
fn epoch_for(date: NaiveDate) -> (NaiveDate, i32) {
    let year = date.year();
    match NaiveDate::from_ymd_opt(year, NEW_YEAR_MONTH, NEW_YEAR_DAY) {
        Some(epoch) if epoch <= date => (epoch, year),
        _ => {
            let epoch = NaiveDate::from_ymd_opt(year - 1, NEW_YEAR_MONTH, NEW_YEAR_DAY)
                .unwrap_or(NaiveDate::MIN);
            (epoch, year - 1)
        }
    }
}

pub fn to_solar_date(date: NaiveDate) -> SolarDate {
    let (epoch, epoch_year) = epoch_for(date);
    // epoch <= date, so this is never negative
    let days = u32::try_from((date - epoch).num_days()).unwrap_or(0);
    let lengths = month_lengths(epoch_year);

    let (month_index, offset) = lengths
        .iter()
        .enumerate()
        .try_fold(days, |left, (i, &len)| {
            if left < len { Err((i, left)) } else { Ok(left - len) }
        })
        .err()
        .unwrap_or((VARIABLE_MONTH, lengths[VARIABLE_MONTH] - 1));

    let day = offset + 1;
    SolarDate {
        day,
        month_index,
        year: epoch_year - ERA_OFFSET,
        ordinal_suffix: ordinal_suffix(day),
    }
}
