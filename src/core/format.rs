//! Locale-aware digit grouping for population figures.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Digit-grouping convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NumberLocale {
    /// 12,345,678
    #[default]
    En,
    /// 12 345 678 (narrow no-break space)
    Fr,
    /// 12.345.678
    De,
    /// 12345678
    Plain,
}

impl NumberLocale {
    fn separator(self) -> Option<char> {
        match self {
            NumberLocale::En => Some(','),
            NumberLocale::Fr => Some('\u{202F}'),
            NumberLocale::De => Some('.'),
            NumberLocale::Plain => None,
        }
    }

    /// Parses a locale tag such as `"en"`, `"fr-FR"` or `"de_CH"`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(NumberLocale::En),
            "fr" => Some(NumberLocale::Fr),
            "de" => Some(NumberLocale::De),
            "plain" => Some(NumberLocale::Plain),
            _ => None,
        }
    }
}

/// Formats `value` with thousands grouping for `locale`.
pub fn group_digits(value: u64, locale: NumberLocale) -> String {
    let digits = value.to_string();
    let Some(sep) = locale.separator() else {
        return digits;
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
