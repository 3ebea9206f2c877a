use reqwest::blocking::Client;
use serde::Deserialize;

use super::{GatewayError, get_json, http_client, trim_base};

pub const DEFAULT_BASE_URL: &str = "https://api.alquran.cloud";
const SERVICE: &str = "alquran";

/// Arabic text, English (Sahih International), Bengali.
const EDITIONS: &str = "quran-uthmani,en.sahih,bn.bengali";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u32,
    pub revelation_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub number_in_surah: u32,
    pub arabic: String,
    pub english: String,
    pub bengali: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahDetail {
    pub surah: Surah,
    pub verses: Vec<Verse>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct Edition {
    #[serde(flatten)]
    surah: Surah,
    #[serde(default)]
    ayahs: Vec<Ayah>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ayah {
    number_in_surah: u32,
    text: String,
}

pub struct QuranClient {
    base_url: String,
    http: Client,
}

impl QuranClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Ok(Self {
            base_url: trim_base(base_url),
            http: http_client()?,
        })
    }

    pub fn surahs(&self) -> Result<Vec<Surah>, GatewayError> {
        let url = format!("{}/v1/surah", self.base_url);
        let body: Envelope<Vec<Surah>> = get_json(&self.http, SERVICE, &url, &[] as &[(&str, &str)])?;
        Ok(body.data)
    }

    /// One surah with the Arabic text and both translations side by side.
    pub fn surah(&self, number: u32) -> Result<SurahDetail, GatewayError> {
        let url = format!("{}/v1/surah/{}/editions/{}", self.base_url, number, EDITIONS);
        let body: Envelope<Vec<Edition>> = get_json(&self.http, SERVICE, &url, &[] as &[(&str, &str)])?;

        let mut editions = body.data.into_iter();
        let (Some(arabic), Some(english), Some(bengali)) =
            (editions.next(), editions.next(), editions.next())
        else {
            return Err(GatewayError::Payload {
                service: SERVICE,
                detail: format!("surah {number} returned fewer than 3 editions"),
            });
        };

        let counts = [arabic.ayahs.len(), english.ayahs.len(), bengali.ayahs.len()];
        if counts.iter().any(|&n| n != counts[0]) {
            return Err(GatewayError::Payload {
                service: SERVICE,
                detail: format!("surah {number} editions disagree on ayah count {counts:?}"),
            });
        }

        let verses = arabic
            .ayahs
            .into_iter()
            .zip(english.ayahs)
            .zip(bengali.ayahs)
            .map(|((ar, en), bn)| Verse {
                number_in_surah: ar.number_in_surah,
                arabic: ar.text,
                english: en.text,
                bengali: bn.text,
            })
            .collect();

        Ok(SurahDetail {
            surah: arabic.surah,
            verses,
        })
    }
}

/// Match by English name (case-insensitive), exact number, or Arabic name.
pub fn filter_surahs<'a>(list: &'a [Surah], query: &str) -> Vec<&'a Surah> {
    let query = query.trim();
    let needle = query.to_lowercase();
    list.iter()
        .filter(|s| {
            s.english_name.to_lowercase().contains(&needle)
                || s.number.to_string() == query
                || s.name.contains(query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edition(text: &[&str]) -> String {
        let ayahs: Vec<String> = text
            .iter()
            .enumerate()
            .map(|(i, t)| format!(r#"{{"number": {}, "numberInSurah": {}, "text": "{}"}}"#, 6222 + i, i + 1, t))
            .collect();
        format!(
            r#"{{
                "number": 112, "name": "سُورَةُ الإِخۡلَاصِ", "englishName": "Al-Ikhlaas",
                "englishNameTranslation": "Sincerity", "numberOfAyahs": 4, "revelationType": "Meccan",
                "ayahs": [{}]
            }}"#,
            ayahs.join(",")
        )
    }

    fn sample() -> Vec<Surah> {
        let s = |number, name: &str, english_name: &str| Surah {
            number,
            name: name.to_string(),
            english_name: english_name.to_string(),
            english_name_translation: String::new(),
            number_of_ayahs: 0,
            revelation_type: "Meccan".to_string(),
        };
        vec![
            s(1, "سُورَةُ ٱلْفَاتِحَةِ", "Al-Faatiha"),
            s(12, "سُورَةُ يُوسُفَ", "Yusuf"),
            s(112, "سُورَةُ الإِخۡلَاصِ", "Al-Ikhlaas"),
        ]
    }

    #[test]
    fn lists_surahs() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/v1/surah")
            .with_body(
                r#"{"code": 200, "data": [{
                    "number": 1, "name": "سُورَةُ ٱلْفَاتِحَةِ", "englishName": "Al-Faatiha",
                    "englishNameTranslation": "The Opening", "numberOfAyahs": 7, "revelationType": "Meccan"
                }]}"#,
            )
            .create();

        let client = QuranClient::new(&server.url()).unwrap();
        let list = client.surahs().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].english_name_translation, "The Opening");
        assert_eq!(list[0].number_of_ayahs, 7);
    }

    #[test]
    fn zips_three_editions() {
        let mut server = mockito::Server::new();
        let body = format!(
            r#"{{"data": [{}, {}, {}]}}"#,
            edition(&["قُلۡ هُوَ ٱللَّهُ أَحَدٌ", "ٱللَّهُ ٱلصَّمَدُ"]),
            edition(&["Say, He is Allah, One", "Allah, the Eternal Refuge"]),
            edition(&["বলুন, তিনি আল্লাহ, এক", "আল্লাহ অমুখাপেক্ষী"]),
        );
        let mock = server
            .mock("GET", "/v1/surah/112/editions/quran-uthmani,en.sahih,bn.bengali")
            .with_body(body)
            .create();

        let client = QuranClient::new(&server.url()).unwrap();
        let detail = client.surah(112).unwrap();
        mock.assert();
        assert_eq!(detail.surah.english_name, "Al-Ikhlaas");
        assert_eq!(detail.verses.len(), 2);
        assert_eq!(detail.verses[1].number_in_surah, 2);
        assert_eq!(detail.verses[0].english, "Say, He is Allah, One");
        assert_eq!(detail.verses[1].bengali, "আল্লাহ অমুখাপেক্ষী");
    }

    #[test]
    fn missing_edition_is_an_error() {
        let mut server = mockito::Server::new();
        let body = format!(r#"{{"data": [{}, {}]}}"#, edition(&["a"]), edition(&["b"]));
        let _mock = server
            .mock("GET", "/v1/surah/112/editions/quran-uthmani,en.sahih,bn.bengali")
            .with_body(body)
            .create();

        let client = QuranClient::new(&server.url()).unwrap();
        assert!(matches!(
            client.surah(112).unwrap_err(),
            GatewayError::Payload { .. }
        ));
    }

    #[test]
    fn short_translation_is_an_error() {
        let mut server = mockito::Server::new();
        let body = format!(
            r#"{{"data": [{}, {}, {}]}}"#,
            edition(&["qul", "allahu"]),
            edition(&["Say", "Allah"]),
            edition(&["বলুন"])
        );
        let _mock = server
            .mock("GET", "/v1/surah/112/editions/quran-uthmani,en.sahih,bn.bengali")
            .with_body(body)
            .create();

        let client = QuranClient::new(&server.url()).unwrap();
        match client.surah(112).unwrap_err() {
            GatewayError::Payload { detail, .. } => assert!(detail.contains("ayah count")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn filters_by_name_number_or_arabic() {
        let list = sample();
        let names = |q: &str| -> Vec<u32> { filter_surahs(&list, q).iter().map(|s| s.number).collect() };

        assert_eq!(names("yusuf"), vec![12]);
        assert_eq!(names("al-"), vec![1, 112]);
        assert_eq!(names("12"), vec![12]);
        assert_eq!(names("يُوسُفَ"), vec![12]);
        assert_eq!(names("").len(), 3);
        assert!(names("Baqara").is_empty());
    }
}
