pub mod digits;
pub mod format;
