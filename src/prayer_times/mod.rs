pub mod scheduler;
pub mod service;

pub use scheduler::{EventKind, FastingPeriod, PrayerEvent, next_event};
pub use service::TimingsService;
