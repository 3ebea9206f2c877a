use log::warn;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{GatewayError, get_json, http_client, trim_base};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const SERVICE: &str = "nominatim";

pub const FALLBACK_PLACE_NAME: &str = "Your Location";
pub const MIN_QUERY_CHARS: usize = 3;
pub const MAX_RESULTS: usize = 5;

#[derive(Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Address,
}

#[derive(Deserialize, Default)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

#[derive(Deserialize)]
struct RawPlace {
    display_name: String,
    lat: String,
    lon: String,
}

/// A geocoding search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub display_name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    /// First comma-separated component, usually the city.
    pub fn short_name(&self) -> &str {
        self.display_name
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or(&self.display_name)
    }
}

impl TryFrom<RawPlace> for Place {
    type Error = GatewayError;

    fn try_from(raw: RawPlace) -> Result<Self, Self::Error> {
        let coord = |s: &str| {
            s.trim().parse::<f64>().map_err(|_| GatewayError::Payload {
                service: SERVICE,
                detail: format!("bad coordinate {s:?}"),
            })
        };
        Ok(Place {
            lat: coord(&raw.lat)?,
            lng: coord(&raw.lon)?,
            display_name: raw.display_name,
        })
    }
}

pub struct NominatimClient {
    base_url: String,
    http: Client,
}

impl NominatimClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Ok(Self {
            base_url: trim_base(base_url),
            http: http_client()?,
        })
    }

    /// Human place name for a coordinate. Never fails; any error yields
    /// [`FALLBACK_PLACE_NAME`].
    pub fn reverse(&self, lat: f64, lng: f64) -> String {
        match self.try_reverse(lat, lng) {
            Ok(Some(name)) => name,
            Ok(None) => FALLBACK_PLACE_NAME.to_string(),
            Err(e) => {
                warn!("reverse geocoding failed: {e}");
                FALLBACK_PLACE_NAME.to_string()
            }
        }
    }

    fn try_reverse(&self, lat: f64, lng: f64) -> Result<Option<String>, GatewayError> {
        let url = format!("{}/reverse", self.base_url);
        let query = [
            ("format", "json".to_string()),
            ("lat", lat.to_string()),
            ("lon", lng.to_string()),
        ];
        let body: ReverseResponse = get_json(&self.http, SERVICE, &url, &query)?;
        let Address {
            city,
            town,
            village,
        } = body.address;
        Ok(city.or(town).or(village).filter(|n| !n.trim().is_empty()))
    }

    /// Forward search. Queries shorter than three characters return nothing
    /// without touching the network.
    pub fn search(&self, query: &str) -> Result<Vec<Place>, GatewayError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }

        let url = format!("{}/search", self.base_url);
        let params = [
            ("format", "json".to_string()),
            ("q", query.to_string()),
            ("limit", MAX_RESULTS.to_string()),
        ];
        let raw: Vec<RawPlace> = get_json(&self.http, SERVICE, &url, &params)?;
        raw.into_iter()
            .take(MAX_RESULTS)
            .map(Place::try_from)
            .collect()
    }
}
