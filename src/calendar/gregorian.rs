use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::Language;
use crate::utils::digits::localize;

const BN_MONTHS: [&str; 12] = [
    "জানুয়ারী",
    "ফেব্রুয়ারী",
    "মার্চ",
    "এপ্রিল",
    "মে",
    "জুন",
    "জুলাই",
    "আগস্ট",
    "সেপ্টেম্বর",
    "অক্টোবর",
    "নভেম্বর",
    "ডিসেম্বর",
];

fn bn_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "সোমবার",
        Weekday::Tue => "মঙ্গলবার",
        Weekday::Wed => "বুধবার",
        Weekday::Thu => "বৃহস্পতিবার",
        Weekday::Fri => "শুক্রবার",
        Weekday::Sat => "শনিবার",
        Weekday::Sun => "রবিবার",
    }
}

/// Long civil date: `"Friday 16 October 2026"` or `"শুক্রবার, ১৬ অক্টোবর, ২০২৬"`.
pub fn format_gregorian(date: NaiveDate, language: Language) -> String {
    match language {
        Language::En => date.format("%A %-d %B %Y").to_string(),
        Language::Bn => {
            let month = BN_MONTHS[date.month0() as usize];
            let script = language.script();
            format!(
                "{}, {} {}, {}",
                bn_weekday(date.weekday()),
                localize(date.day(), script),
                month,
                localize(date.year(), script)
            )
        }
    }
}
