use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nur", version, author, about = "Prayer times, fasting countdowns and daily Deen tracking in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer times, dates and countdown to the next event
    Times,
    /// Show this month's prayer calendar
    Calendar {
        /// Month number (1-12), defaults to the current month
        #[arg(long)]
        month: Option<u32>,
        /// Year, defaults to the current year
        #[arg(long)]
        year: Option<i32>,
    },
    /// Search for a city, or set coordinates directly
    Location {
        /// City name to search for (at least 3 characters)
        query: Vec<String>,
        /// Latitude, used with --lng
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude, used with --lat
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
        /// Which search result to save (1-based)
        #[arg(long, default_value = "1")]
        pick: usize,
    },
    /// List calculation methods, or select one by id
    Method {
        /// Method id
        id: Option<u32>,
    },
    /// Switch display language (en, bn)
    Lang {
        language: String,
    },
    /// Toggle a prayer in today's checklist
    Mark {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
    },
    /// Toggle today's fast
    Fast,
    /// Add or remove Quran pages read today, e.g. +2 or -1
    Pages {
        #[arg(allow_hyphen_values = true)]
        delta: String,
    },
    /// Show today's progress
    Progress,
    /// List surahs, or read one by number
    Quran {
        /// Surah number (1-114)
        number: Option<u32>,
        /// Filter surahs by name or number
        #[arg(long)]
        search: Option<String>,
    },
    /// Browse Hisnul Muslim supplications
    Dua {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,
        /// Search titles, translations and transliteration
        #[arg(long)]
        search: Option<String>,
    },
    /// Show today's hadith
    Quote,
    /// Ask Nur, the assistant
    Ask {
        /// Your question
        message: Vec<String>,
        /// Forget the saved conversation first
        #[arg(long)]
        reset: bool,
    },
}

/// Parse a page delta like `+2`, `-1` or `3`.
pub fn parse_page_delta(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    digits.parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_opens_dashboard() {
        let cli = Cli::try_parse_from(["nur"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn location_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["nur", "location", "--lat", "-33.86", "--lng", "151.2"]).unwrap();
        match cli.command {
            Some(Commands::Location { lat, lng, query, .. }) => {
                assert_eq!(lat, Some(-33.86));
                assert_eq!(lng, Some(151.2));
                assert!(query.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn lat_requires_lng() {
        assert!(Cli::try_parse_from(["nur", "location", "--lat", "10"]).is_err());
    }

    #[test]
    fn pages_takes_signed_delta() {
        let cli = Cli::try_parse_from(["nur", "pages", "-2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Pages { ref delta }) if delta == "-2"));
    }

    #[test]
    fn page_delta_parsing() {
        assert_eq!(parse_page_delta("+2"), Some(2));
        assert_eq!(parse_page_delta("-1"), Some(-1));
        assert_eq!(parse_page_delta("3"), Some(3));
        assert_eq!(parse_page_delta("two"), None);
    }
}
