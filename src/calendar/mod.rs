pub mod gregorian;
pub mod lunar;
pub mod solar;

use chrono::NaiveDate;

use crate::models::Language;

pub use gregorian::format_gregorian;
pub use lunar::{CalendarError, LunarCalendar, TabularHijri, to_lunar_date};
pub use solar::to_solar_date;

/// The three date lines shown above the countdown.
#[derive(Debug)]
pub struct DateLines {
    pub hijri: Result<String, CalendarError>,
    pub bengali: String,
    pub gregorian: String,
}

impl DateLines {
    pub fn for_date(date: NaiveDate, language: Language, lunar: &dyn LunarCalendar) -> Self {
        Self {
            hijri: to_lunar_date(lunar, date, language.script()).map(|d| d.format(language)),
            bengali: to_solar_date(date).format(language),
            gregorian: format_gregorian(date, language),
        }
    }
}
