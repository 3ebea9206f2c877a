use chrono::{Datelike, NaiveDate};

use crate::models::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: Bilingual,
    pub source: Bilingual,
}

const BUKHARI: Bilingual = Bilingual::new("Sahih Bukhari", "সহীহ বুখারী");
const MUSLIM: Bilingual = Bilingual::new("Sahih Muslim", "সহীহ মুসলিম");

pub const QUOTES: &[Quote] = &[
    Quote {
        text: Bilingual::new(
            "The most beloved of deeds to Allah are those that are most consistent, even if they are small.",
            "আল্লাহর কাছে সবচেয়ে প্রিয় আমল হলো তা যা নিয়মিত করা হয়, যদিও তা অল্প হয়।",
        ),
        source: BUKHARI,
    },
    Quote {
        text: Bilingual::new(
            "Fasting is a shield; so when one of you is fasting, he should not use foul language or behave foolishly.",
            "রোজা একটি ঢাল; তাই তোমাদের মধ্যে যখন কেউ রোজা রাখে, সে যেন অশ্লীল কথা না বলে বা মূর্খতা না করে।",
        ),
        source: MUSLIM,
    },
    Quote {
        text: Bilingual::new(
            "The best among you are those who have the best manners and character.",
            "তোমাদের মধ্যে সর্বোত্তম ব্যক্তি সেই যার আচার-আচরণ ও চরিত্র সবচেয়ে ভালো।",
        ),
        source: BUKHARI,
    },
    Quote {
        text: Bilingual::new(
            "Wealth does not decrease by giving in charity.",
            "দান করলে কখনো সম্পদ কমে না।",
        ),
        source: MUSLIM,
    },
    Quote {
        text: Bilingual::new(
            "A Muslim is the one from whose tongue and hands the Muslims are safe.",
            "প্রকৃত মুসলিম সেই ব্যক্তি যার জবান ও হাত থেকে অন্য মুসলিমরা নিরাপদ থাকে।",
        ),
        source: BUKHARI,
    },
    Quote {
        text: Bilingual::new(
            "The best of you are those who learn the Quran and teach it.",
            "তোমাদের মধ্যে সর্বোত্তম সে যে নিজে কুরআন শেখে এবং অন্যকে শেখায়।",
        ),
        source: BUKHARI,
    },
    Quote {
        text: Bilingual::new(
            "Take advantage of five matters before five others: your youth before your old age, your health before your sickness, your wealth before your poverty, your free time before your preoccupation, and your life before your death.",
            "পাঁচটি জিনিসের পূর্বে পাঁচটি জিনিসের মূল্যায়ন করো: বার্ধক্যের পূর্বে যৌবনের, অসুস্থতার পূর্বে সুস্থতার, দারিদ্র্যের পূর্বে সচ্ছলতার, ব্যস্ততার পূর্বে অবসরের এবং মৃত্যুর পূর্বে জীবনের।",
        ),
        source: Bilingual::new("Mustadrak Al-Hakim", "মুস্তাদরাক আল-হাকিম"),
    },
];

/// Shown every day above the rotating hadith.
pub const VERSE_OF_THE_DAY: Quote = Quote {
    text: Bilingual::new(
        "So remember Me; I will remember you. And be grateful to Me and do not deny Me.",
        "অতএব তোমরা আমাকে স্মরণ কর, আমি তোমাদেরকে স্মরণ করব। আর আমার প্রতি কৃতজ্ঞ হও এবং অকৃতজ্ঞ হয়ো না।",
    ),
    source: Bilingual::new("Al-Baqarah 2:152", "আল-বাকারা ২:১৫২"),
};

/// January 1 is day 1.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// The quote for `date`, rotating through `pool` once per day.
pub fn quote_for_today<T>(date: NaiveDate, pool: &[T]) -> Option<&T> {
    if pool.is_empty() {
        return None;
    }
    pool.get(day_of_year(date) as usize % pool.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use chrono::Duration;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_of_year_starts_at_one() {
        assert_eq!(day_of_year(ymd(2026, 1, 1)), 1);
        assert_eq!(day_of_year(ymd(2026, 12, 31)), 365);
        assert_eq!(day_of_year(ymd(2024, 12, 31)), 366);
    }

    #[test]
    fn january_first_picks_second_entry() {
        let pool = [10, 11, 12];
        assert_eq!(quote_for_today(ymd(2026, 1, 1), &pool), Some(&11));
    }

    #[test]
    fn selection_is_stable_within_a_day() {
        let date = ymd(2026, 10, 16);
        assert_eq!(
            quote_for_today(date, QUOTES),
            quote_for_today(date, QUOTES)
        );
    }

    #[test]
    fn rotates_with_period_of_pool_length() {
        assert_eq!(QUOTES.len(), 7);
        let start = ymd(2026, 3, 1);
        let week_later = start + Duration::days(7);
        let next_day = start + Duration::days(1);
        assert_eq!(quote_for_today(start, QUOTES), quote_for_today(week_later, QUOTES));
        assert_ne!(quote_for_today(start, QUOTES), quote_for_today(next_day, QUOTES));
    }

    #[test]
    fn verse_of_the_day_is_bilingual() {
        assert_eq!(VERSE_OF_THE_DAY.source.get(Language::En), "Al-Baqarah 2:152");
        assert!(VERSE_OF_THE_DAY.source.get(Language::Bn).contains("২:১৫২"));
        assert!(!QUOTES.contains(&VERSE_OF_THE_DAY));
    }

    #[test]
    fn empty_pool_has_no_quote() {
        let empty: [Quote; 0] = [];
        assert!(quote_for_today(ymd(2026, 1, 1), &empty).is_none());
    }
}
