//! A small Hisnul Muslim (Fortress of the Muslim) selection.

use crate::models::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dua {
    pub category: &'static str,
    pub title: Bilingual,
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub translation: Bilingual,
    pub reference: Option<&'static str>,
}

pub const DUAS: &[Dua] = &[
    Dua {
        category: "Morning & Evening",
        title: Bilingual::new("Morning/Evening Protection", "সকাল-সন্ধ্যার আমল"),
        arabic: "بِسْمِ اللَّهِ الَّذِي لَا يَضُرُّ مَعَ اسْمِهِ شَيْءٌ فِي الْأَرْضِ وَلَا فِي السَّمَاءِ وَهُوَ السَّمِيعُ الْعَلِيمُ",
        transliteration: "Bismillahil-ladhi la yadurru ma'as-mihi shay'un fil-ardi wa la fis-sama'i wa Huwas-Sami'ul-'Alim",
        translation: Bilingual::new(
            "In the name of Allah, with whose name nothing can cause harm in the earth or in the heavens, and He is the All-Hearing, the All-Knowing.",
            "আল্লাহর নামে, যাঁর নামের বরকতে আসমান ও যমীনে কোনো কিছুই কোনো ক্ষতি করতে পারে না, আর তিনি সর্বশ্রোতা ও সর্বজ্ঞ।",
        ),
        reference: Some("Abu Dawud & Tirmidhi"),
    },
    Dua {
        category: "Ramadan",
        title: Bilingual::new("Dua for Opening Fast (Iftar)", "ইফতারের দোয়া"),
        arabic: "ذَهَبَ الظَّمَأُ وَابْتَلَّتِ الْعُرُوقُ وَثَبَتَ الأَجْرُ إِنْ شَاءَ اللَّهُ",
        transliteration: "Dhahaba adh-dhama'u wabtallat al-'uruqu wa thabata al-ajru in sha' Allah",
        translation: Bilingual::new(
            "The thirst has gone, the veins are moistened, and the reward is confirmed, if Allah wills.",
            "পিপাসা দূর হয়েছে, শিরাগুলো সিক্ত হয়েছে এবং আল্লাহ চাহেন তো পুরস্কারও নির্ধারিত হয়েছে।",
        ),
        reference: None,
    },
    Dua {
        category: "Mosque",
        title: Bilingual::new("Entering the Mosque", "মসজিদে প্রবেশের দোয়া"),
        arabic: "اللَّهُمَّ افْتَحْ لِي أَبْوَابَ رَحْمَتِكَ",
        transliteration: "Allahum-maftah li abwaba rahmatik",
        translation: Bilingual::new(
            "O Allah, open the gates of Your mercy for me.",
            "হে আল্লাহ! আমার জন্য তোমার রহমতের দরজাগুলো খুলে দাও।",
        ),
        reference: None,
    },
    Dua {
        category: "Sleep",
        title: Bilingual::new("Before Sleeping", "ঘুমানোর পূর্বে দোয়া"),
        arabic: "بِاسْمِكَ اللَّهُمَّ أَمُوتُ وَأَحْيَا",
        transliteration: "Bismika Allahumma amutu wa ahya",
        translation: Bilingual::new(
            "In Your name, O Allah, I die and I live.",
            "হে আল্লাহ! তোমার নামেই আমি মরি এবং তোমার নামেই জীবিত হই।",
        ),
        reference: None,
    },
    Dua {
        category: "Waking Up",
        title: Bilingual::new("Upon Waking Up", "ঘুম থেকে উঠে দোয়া"),
        arabic: "الْحَمْدُ للهِ الَّذِي أَحْيَانَا بَعْدَ مَا أَمَاتَنَا وَإِلَيْهِ النُّشُورُ",
        transliteration: "Alhamdu lillahil-ladhi ahyana ba'da ma amatana wa ilaihin-nushur",
        translation: Bilingual::new(
            "Praise is to Allah Who gives us life after He has caused us to die and to Him is the return.",
            "সমস্ত প্রশংসা আল্লাহর জন্য, যিনি আমাদেরকে মারার পর পুনরায় জীবিত করেছেন এবং তাঁর দিকেই ফিরে যেতে হবে।",
        ),
        reference: None,
    },
    Dua {
        category: "Difficulties",
        title: Bilingual::new("During Distress", "বিপদ-আপদে দোয়া"),
        arabic: "حَسْبِيَ اللَّهُ لَا إِلَهَ إِلَّا هُوَ عَلَيْهِ تَوَكَّلْتُ وَهُوَ رَبُّ الْعَرْشِ الْعَظِيمِ",
        transliteration: "Hasbiyallahu la ilaha illa Huwa 'alayhi tawakkaltu wa Huwa Rabbul-'Arshil-'Azim",
        translation: Bilingual::new(
            "Allah is sufficient for me. There is none worthy of worship but Him. I have placed my trust in Him, He is Lord of the Majestic Throne.",
            "আমার জন্য আল্লাহই যথেষ্ট, তিনি ছাড়া আর কোনো ইলাহ নেই। আমি তাঁরই উপর ভরসা করেছি আর তিনি সুমহান আরশের অধিপতি।",
        ),
        reference: Some("Surah At-Tawbah 9:129"),
    },
    Dua {
        category: "Character",
        title: Bilingual::new("Guidance to Good Character", "উত্তম চরিত্রের দোয়া"),
        arabic: "اللَّهُمَّ اهْدِنِي لِأَحْسَنِ الْأَعْمَالِ وَأَحْسَنِ الْأَخْلَاقِ لَا يَهْدِي لِأَحْسَنِهَا إِلَّا أَنْتَ",
        transliteration: "Allahumma-hdini li-ahsanil-a'mali wa ahsanil-akhlaqi la yahdi li-ahsaniha illa Anta",
        translation: Bilingual::new(
            "O Allah, guide me to the best of deeds and the best of manners, for none can guide to the best of them but You.",
            "হে আল্লাহ! আমাকে সর্বোত্তম আমল ও সর্বোত্তম চরিত্রের দিকে পরিচালিত কর, তুমি ছাড়া আর কেউ উত্তম চরিত্রের দিকে পরিচালিত করতে পারে না।",
        ),
        reference: None,
    },
];

/// Distinct categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for dua in DUAS {
        if !seen.contains(&dua.category) {
            seen.push(dua.category);
        }
    }
    seen
}

impl Dua {
    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        [
            self.title.en,
            self.title.bn,
            self.translation.en,
            self.translation.bn,
            self.transliteration,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Supplications in `category` (all when `None`) whose titles, translations
/// or transliteration contain `query`, ignoring case.
pub fn filter(category: Option<&str>, query: &str) -> Vec<&'static Dua> {
    let query = query.trim();
    DUAS.iter()
        .filter(|d| category.is_none_or(|c| d.category.eq_ignore_ascii_case(c)))
        .filter(|d| d.matches(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_distinct_and_ordered() {
        let cats = categories();
        assert_eq!(cats.len(), DUAS.len());
        assert_eq!(cats[0], "Morning & Evening");
        assert_eq!(cats[1], "Ramadan");
    }

    #[test]
    fn no_filters_returns_everything() {
        assert_eq!(filter(None, "").len(), 7);
    }

    #[test]
    fn category_filter_ignores_case() {
        let hits = filter(Some("ramadan"), "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title.en, "Dua for Opening Fast (Iftar)");
        assert!(filter(Some("Travel"), "").is_empty());
    }

    #[test]
    fn search_covers_both_languages() {
        assert_eq!(filter(None, "MOSQUE").len(), 1);
        assert_eq!(filter(None, "ইফতারের").len(), 1);
        assert_eq!(filter(None, "hasbiyallahu").len(), 1);
        assert_eq!(filter(Some("Sleep"), "mosque").len(), 0);
    }
}
