pub mod countdown;
pub mod header;
pub mod progress;
pub mod quote;
pub mod schedule;
pub mod statusbar;
