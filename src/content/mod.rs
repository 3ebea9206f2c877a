pub mod duas;
pub mod quotes;

pub use quotes::{QUOTES, Quote, VERSE_OF_THE_DAY, quote_for_today};
