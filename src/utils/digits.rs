use std::fmt::Display;

/// Bengali digits, indexed by the ASCII digit they replace.
const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Numeral script used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    Latin,
    Bengali,
}

impl Script {
    fn glyph(self, digit: char) -> char {
        match self {
            Script::Latin => digit,
            Script::Bengali => digit
                .to_digit(10)
                .map(|d| BENGALI_DIGITS[d as usize])
                .unwrap_or(digit),
        }
    }
}

/// Render `value` with its ASCII digits swapped for `script`'s glyphs.
///
/// Separators, letters and padding are left where they are, so `"04:32:08"`
/// keeps its shape in every script.
pub fn localize(value: impl Display, script: Script) -> String {
    let text = value.to_string();
    match script {
        Script::Latin => text,
        Script::Bengali => text
            .chars()
            .map(|c| if c.is_ascii_digit() { script.glyph(c) } else { c })
            .collect(),
    }
}
