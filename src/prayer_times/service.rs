use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info};
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::CacheRepo;
use crate::gateway::AladhanClient;
use crate::models::PrayerTimes;

/// Cache-first access to daily timings for one location and method.
pub struct TimingsService {
    client: AladhanClient,
    latitude: f64,
    longitude: f64,
    method: u32,
}

impl TimingsService {
    pub fn new(client: AladhanClient, latitude: f64, longitude: f64, method: u32) -> Self {
        Self {
            client,
            latitude,
            longitude,
            method,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = AladhanClient::new(&config.endpoints.aladhan)
            .context("Building timings client")?;
        Ok(Self::new(
            client,
            config.location.latitude,
            config.location.longitude,
            config.prayer.method,
        ))
    }

    pub fn client(&self) -> &AladhanClient {
        &self.client
    }

    pub fn times_for(&self, conn: &Connection, date: NaiveDate) -> Result<PrayerTimes> {
        if let Some(times) = CacheRepo::get(conn, date)? {
            debug!("prayer times cache hit for {date}");
            return Ok(times);
        }

        debug!("prayer times cache miss for {date}, fetching");
        let times = self
            .client
            .timings(date, self.latitude, self.longitude, self.method)
            .with_context(|| format!("Fetching prayer times for {date}"))?;
        CacheRepo::store(conn, date, &times)?;
        Ok(times)
    }

    /// Drop every cached day. Call after the location or method changes.
    pub fn invalidate(conn: &Connection) -> Result<()> {
        CacheRepo::clear_all(conn)?;
        info!("prayer times cache cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;
    use chrono::NaiveTime;
    use mockito::Matcher;

    const BODY: &str = r#"{"data": {"timings": {
        "Imsak": "04:31", "Fajr": "04:41", "Sunrise": "05:57", "Dhuhr": "11:45",
        "Asr": "15:05", "Maghrib": "17:33", "Isha": "18:47"
    }}}"#;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn second_lookup_is_served_from_cache() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1/timings/16-10-2026")
            .match_query(Matcher::Any)
            .with_body(BODY)
            .expect(1)
            .create();

        let conn = open_in_memory();
        let service = TimingsService::new(AladhanClient::new(&server.url()).unwrap(), 23.8, 90.4, 1);

        let first = service.times_for(&conn, day()).unwrap();
        let second = service.times_for(&conn, day()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.asr, NaiveTime::from_hms_opt(15, 5, 0).unwrap());
        mock.assert();
    }

    #[test]
    fn invalidate_forces_refetch() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1/timings/16-10-2026")
            .match_query(Matcher::Any)
            .with_body(BODY)
            .expect(2)
            .create();

        let conn = open_in_memory();
        let service = TimingsService::new(AladhanClient::new(&server.url()).unwrap(), 0.0, 0.0, 2);

        service.times_for(&conn, day()).unwrap();
        TimingsService::invalidate(&conn).unwrap();
        service.times_for(&conn, day()).unwrap();
        mock.assert();
    }

    #[test]
    fn fetch_failure_leaves_cache_empty() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/v1/timings/16-10-2026")
            .match_query(Matcher::Any)
            .with_status(500)
            .create();

        let conn = open_in_memory();
        let service = TimingsService::new(AladhanClient::new(&server.url()).unwrap(), 0.0, 0.0, 2);

        assert!(service.times_for(&conn, day()).is_err());
        assert!(CacheRepo::get(&conn, day()).unwrap().is_none());
    }
}
