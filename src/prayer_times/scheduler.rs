use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Language, PrayerName, PrayerTimes};
use crate::utils::digits::{Script, localize};

/// Inclusive date range during which the day is tracked as a fasting day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FastingPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Prayer(PrayerName),
    /// Fajr the following day, once Isha has passed.
    FajrTomorrow,
    Suhoor,
    Iftar,
    SuhoorTomorrow,
}

impl EventKind {
    pub fn label(&self, language: Language) -> String {
        let text = match self {
            EventKind::Prayer(p) => p.display_name(language),
            EventKind::FajrTomorrow => language.pick("Fajr (Tomorrow)", "ফজর (আগামীকাল)"),
            EventKind::Suhoor => language.pick("Suhoor (Fajr)", "সেহরি (ফজর)"),
            EventKind::Iftar => language.pick("Iftar (Maghrib)", "ইফতার (মাগরিব)"),
            EventKind::SuhoorTomorrow => language.pick("Suhoor (Tomorrow)", "সেহরি (আগামীকাল)"),
        };
        text.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerEvent {
    pub kind: EventKind,
    pub label: String,
    pub target: NaiveDateTime,
}

impl PrayerEvent {
    pub fn countdown(&self, now: NaiveDateTime) -> Countdown {
        Countdown::between(now, self.target)
    }
}

/// Pick the next devotional event after `now`.
///
/// Outside a fasting period this is the first canonical prayer later than
/// `now` today, or tomorrow's Fajr once Isha has passed. Inside one, only the
/// Suhoor cut-off (Fajr) and Iftar (Maghrib) are tracked.
pub fn next_event(
    times: &PrayerTimes,
    now: NaiveDateTime,
    fasting_active: bool,
    language: Language,
) -> PrayerEvent {
    let today = now.date();
    let tomorrow = today.succ_opt().unwrap_or(today);
    let tomorrow_fajr = tomorrow.and_time(times.fajr);

    let (kind, target) = if fasting_active {
        let fajr = today.and_time(times.fajr);
        let maghrib = today.and_time(times.maghrib);
        if fajr > now {
            (EventKind::Suhoor, fajr)
        } else if maghrib > now {
            (EventKind::Iftar, maghrib)
        } else {
            (EventKind::SuhoorTomorrow, tomorrow_fajr)
        }
    } else {
        times
            .canonical()
            .iter()
            .map(|(prayer, time)| (EventKind::Prayer(*prayer), today.and_time(*time)))
            .find(|(_, at)| *at > now)
            .unwrap_or((EventKind::FajrTomorrow, tomorrow_fajr))
    };

    PrayerEvent {
        kind,
        label: kind.label(language),
        target,
    }
}

/// Remaining time until an event, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub fn between(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        let total = (target - now).num_seconds().max(0) as u64;
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    #[cfg(test)]
    fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Zero-padded `HH:MM:SS`, digits in `script`.
    pub fn format(&self, script: Script) -> String {
        localize(
            format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds),
            script,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime};

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn times() -> PrayerTimes {
        PrayerTimes {
            imsak: hm(4, 50),
            fajr: hm(5, 0),
            sunrise: hm(6, 15),
            dhuhr: hm(12, 0),
            asr: hm(15, 30),
            maghrib: hm(18, 0),
            isha: hm(19, 30),
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn ordinary_day_picks_next_prayer() {
        let now = at(17, 0, 0);
        let event = next_event(&times(), now, false, Language::En);
        assert_eq!(event.kind, EventKind::Prayer(PrayerName::Maghrib));
        assert_eq!(event.label, "Maghrib");
        assert_eq!(event.countdown(now).format(Script::Latin), "01:00:00");
    }

    #[test]
    fn before_fajr_targets_todays_fajr() {
        let event = next_event(&times(), at(3, 0, 0), false, Language::En);
        assert_eq!(event.kind, EventKind::Prayer(PrayerName::Fajr));
        assert_eq!(event.target, at(5, 0, 0));
    }

    #[test]
    fn after_isha_wraps_to_tomorrows_fajr() {
        let now = at(20, 0, 0);
        let event = next_event(&times(), now, false, Language::En);
        assert_eq!(event.kind, EventKind::FajrTomorrow);
        assert_eq!(event.label, "Fajr (Tomorrow)");
        assert_eq!(event.target, at(5, 0, 0) + Duration::days(1));
        assert_eq!(event.countdown(now).format(Script::Latin), "09:00:00");
    }

    #[test]
    fn exact_prayer_time_rolls_to_following_event() {
        let event = next_event(&times(), at(12, 0, 0), false, Language::En);
        assert_eq!(event.kind, EventKind::Prayer(PrayerName::Asr));
        let event = next_event(&times(), at(19, 30, 0), false, Language::En);
        assert_eq!(event.kind, EventKind::FajrTomorrow);
    }

    #[test]
    fn fasting_day_tracks_suhoor_and_iftar() {
        let t = times();
        let event = next_event(&t, at(4, 0, 0), true, Language::En);
        assert_eq!((event.kind, event.target), (EventKind::Suhoor, at(5, 0, 0)));

        let event = next_event(&t, at(13, 0, 0), true, Language::En);
        assert_eq!(event.kind, EventKind::Iftar);
        assert_eq!(event.label, "Iftar (Maghrib)");
        assert_eq!(event.target, at(18, 0, 0));

        let event = next_event(&t, at(18, 0, 0), true, Language::Bn);
        assert_eq!(event.kind, EventKind::SuhoorTomorrow);
        assert_eq!(event.label, "সেহরি (আগামীকাল)");
        assert_eq!(event.target, at(5, 0, 0) + Duration::days(1));
    }

    #[test]
    fn out_of_order_timings_fall_back_to_tomorrows_fajr() {
        let mut t = times();
        t.isha = hm(1, 0);
        t.maghrib = hm(0, 30);
        let event = next_event(&t, at(16, 0, 0), false, Language::En);
        assert_eq!(event.kind, EventKind::FajrTomorrow);
    }

    #[test]
    fn countdown_is_never_negative() {
        let target = at(12, 0, 0);
        let one_before = target - Duration::seconds(1);
        assert_eq!(
            Countdown::between(one_before, target).format(Script::Latin),
            "00:00:01"
        );
        assert_eq!(Countdown::between(at(13, 0, 0), target), Countdown::default());
        for secs in [1, 59, 61, 3599, 3601, 86_399] {
            let c = Countdown::between(target - Duration::seconds(secs), target);
            assert_eq!(c.total_seconds(), secs as u64);
            assert!(c.minutes < 60 && c.seconds < 60);
        }
    }

    #[test]
    fn countdown_truncates_sub_second_remainder() {
        let now = at(11, 59, 58) + Duration::milliseconds(500);
        let c = Countdown::between(now, at(12, 0, 0));
        assert_eq!(c.format(Script::Bengali), "০০:০০:০১");
    }

    #[test]
    fn fasting_period_is_inclusive() {
        let period = FastingPeriod {
            start: NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
        };
        assert!(period.contains(period.start));
        assert!(period.contains(period.end));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 3, 21).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 2, 17).unwrap()));
    }
}
