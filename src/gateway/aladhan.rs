use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{GatewayError, get_json, http_client, trim_base};
use crate::models::PrayerTimes;

pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com";
const SERVICE: &str = "aladhan";

/// Calculation methods offered by the timings API, as `(id, short name)`.
pub const PRAYER_METHODS: &[(u32, &str)] = &[
    (1, "Karachi"),
    (2, "ISNA"),
    (3, "MWL"),
    (4, "Makkah"),
    (5, "Egypt"),
    (8, "Gulf"),
    (9, "Kuwait"),
    (10, "Qatar"),
    (11, "Singapore"),
    (12, "France"),
    (13, "Turkey"),
    (14, "Russia"),
];

pub fn method_name(id: u32) -> &'static str {
    PRAYER_METHODS
        .iter()
        .find(|(m, _)| *m == id)
        .map(|(_, name)| *name)
        .unwrap_or("Standard")
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct TimingsData {
    timings: RawTimings,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawTimings {
    imsak: String,
    fajr: String,
    sunrise: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

impl TryFrom<RawTimings> for PrayerTimes {
    type Error = GatewayError;

    fn try_from(raw: RawTimings) -> Result<Self, Self::Error> {
        Ok(PrayerTimes {
            imsak: PrayerTimes::parse_hhmm(&raw.imsak)?,
            fajr: PrayerTimes::parse_hhmm(&raw.fajr)?,
            sunrise: PrayerTimes::parse_hhmm(&raw.sunrise)?,
            dhuhr: PrayerTimes::parse_hhmm(&raw.dhuhr)?,
            asr: PrayerTimes::parse_hhmm(&raw.asr)?,
            maghrib: PrayerTimes::parse_hhmm(&raw.maghrib)?,
            isha: PrayerTimes::parse_hhmm(&raw.isha)?,
        })
    }
}

#[derive(Deserialize)]
struct RawCalendarDay {
    timings: RawTimings,
    date: RawDate,
}

#[derive(Deserialize)]
struct RawDate {
    readable: String,
    hijri: RawHijri,
}

#[derive(Deserialize)]
struct RawHijri {
    day: String,
    month: RawHijriMonth,
    year: String,
}

#[derive(Deserialize)]
struct RawHijriMonth {
    en: String,
}

/// One row of the monthly calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    /// 1-based day of the Gregorian month.
    pub day: u32,
    /// Human-readable Gregorian date, e.g. `"01 Oct 2026"`.
    pub readable: String,
    /// Hijri date as `"{day} {month} {year}"`.
    pub hijri: String,
    pub times: PrayerTimes,
}

pub struct AladhanClient {
    base_url: String,
    http: Client,
}

impl AladhanClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Ok(Self {
            base_url: trim_base(base_url),
            http: http_client()?,
        })
    }

    fn location_query(lat: f64, lng: f64, method: u32) -> [(&'static str, String); 3] {
        [
            ("latitude", lat.to_string()),
            ("longitude", lng.to_string()),
            ("method", method.to_string()),
        ]
    }

    pub fn timings(
        &self,
        date: NaiveDate,
        lat: f64,
        lng: f64,
        method: u32,
    ) -> Result<PrayerTimes, GatewayError> {
        let url = format!("{}/v1/timings/{}", self.base_url, date.format("%d-%m-%Y"));
        let body: Envelope<TimingsData> = get_json(
            &self.http,
            SERVICE,
            &url,
            &Self::location_query(lat, lng, method),
        )?;
        body.data.timings.try_into()
    }

    pub fn calendar(
        &self,
        year: i32,
        month: u32,
        lat: f64,
        lng: f64,
        method: u32,
    ) -> Result<Vec<CalendarDay>, GatewayError> {
        let url = format!("{}/v1/calendar/{}/{}", self.base_url, year, month);
        let body: Envelope<Vec<RawCalendarDay>> = get_json(
            &self.http,
            SERVICE,
            &url,
            &Self::location_query(lat, lng, method),
        )?;

        body.data
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                let hijri = format!(
                    "{} {} {}",
                    raw.date.hijri.day, raw.date.hijri.month.en, raw.date.hijri.year
                );
                Ok(CalendarDay {
                    day: i as u32 + 1,
                    readable: raw.date.readable,
                    hijri,
                    times: raw.timings.try_into()?,
                })
            })
            .collect()
    }
}
