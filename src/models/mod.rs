pub mod chat;
pub mod language;
pub mod prayer;
pub mod progress;

pub use chat::ChatMessage;
pub use language::{Bilingual, Language};
pub use prayer::{MalformedTime, PrayerName, PrayerTimes};
pub use progress::DailyProgress;
