use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::Language;

/// One of the five canonical daily prayers, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub const ALL: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    pub fn display_name(&self, language: Language) -> &'static str {
        match (self, language) {
            (PrayerName::Fajr, Language::En) => "Fajr",
            (PrayerName::Dhuhr, Language::En) => "Dhuhr",
            (PrayerName::Asr, Language::En) => "Asr",
            (PrayerName::Maghrib, Language::En) => "Maghrib",
            (PrayerName::Isha, Language::En) => "Isha",
            (PrayerName::Fajr, Language::Bn) => "ফজর",
            (PrayerName::Dhuhr, Language::Bn) => "যোহর",
            (PrayerName::Asr, Language::Bn) => "আসর",
            (PrayerName::Maghrib, Language::Bn) => "মাগরিব",
            (PrayerName::Isha, Language::Bn) => "এশা",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name(Language::En))
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed clock time '{0}', expected HH:MM")]
pub struct MalformedTime(pub String);

/// One day's timings at a location, as local wall-clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerTimes {
    pub imsak: NaiveTime,
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

impl PrayerTimes {
    /// Parse `"HH:MM"`; a trailing zone note such as `"05:12 (+06)"` is ignored.
    pub fn parse_hhmm(s: &str) -> Result<NaiveTime, MalformedTime> {
        let clock = s.split_whitespace().next().unwrap_or("");
        NaiveTime::parse_from_str(clock, "%H:%M").map_err(|_| MalformedTime(s.to_string()))
    }

    pub fn time_of(&self, prayer: PrayerName) -> NaiveTime {
        match prayer {
            PrayerName::Fajr => self.fajr,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }

    /// The five canonical prayers paired with their times, Fajr first.
    pub fn canonical(&self) -> [(PrayerName, NaiveTime); 5] {
        PrayerName::ALL.map(|p| (p, self.time_of(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_annotated_times() {
        let t = PrayerTimes::parse_hhmm("05:07").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(5, 7, 0).unwrap());
        let t = PrayerTimes::parse_hhmm("18:21 (+06)").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(18, 21, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(PrayerTimes::parse_hhmm("").is_err());
        assert!(PrayerTimes::parse_hhmm("25:00").is_err());
        assert!(PrayerTimes::parse_hhmm("noon").is_err());
    }

    #[test]
    fn prayer_aliases() {
        assert_eq!("Zuhr".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert!("tahajjud".parse::<PrayerName>().is_err());
        assert_eq!(PrayerName::Isha.display_name(Language::Bn), "এশা");
    }
}
