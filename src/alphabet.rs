//! Ordered candidate character sets.
//!
//! Order is significant: when two characters are equally close to a query the
//! one listed first wins.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const HIRAGANA: &str = concat!(
    "あいうえお",
    "かがきぎくぐけげこご",
    "さざしじすずせぜそぞ",
    "ただちぢつづてでとど",
    "なにぬねの",
    "はばぱひびぴふぶぷへべぺほぼぽ",
    "まみむめも",
    "やゆよ",
    "らりるれろ",
    "わゐゑをん",
);

pub const KATAKANA: &str = concat!(
    "アイウエオ",
    "カガキギクグケゲコゴ",
    "サザシジスズセゼソゾ",
    "タダチヂツヅテデトド",
    "ナニヌネノ",
    "ハバパヒビピフブプヘベペホボポ",
    "マミムメモ",
    "ヤユヨ",
    "ラリルレロ",
    "ワヰヱヲン",
);

/// How an alphabet is named in configuration files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlphabetSpec {
    Hiragana,
    Katakana,
    /// Hiragana followed by katakana.
    Kana,
    Custom(String),
}

impl AlphabetSpec {
    pub fn resolve(&self) -> Result<Alphabet> {
        match self {
            AlphabetSpec::Hiragana => Alphabet::new(HIRAGANA),
            AlphabetSpec::Katakana => Alphabet::new(KATAKANA),
            AlphabetSpec::Kana => Alphabet::new(&format!("{HIRAGANA}{KATAKANA}")),
            AlphabetSpec::Custom(chars) => Alphabet::new(chars),
        }
    }
}

/// Non-empty ordered set of distinct characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build from the characters of `text`, keeping their order.
    pub fn new(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Err(Error::Config("alphabet is empty".to_string()));
        }
        let mut seen = HashSet::with_capacity(chars.len());
        for &c in &chars {
            if !seen.insert(c) {
                return Err(Error::Construction {
                    character: c,
                    reason: "duplicate character in alphabet".to_string(),
                });
            }
        }
        Ok(Self { chars })
    }

    pub fn hiragana() -> Self {
        Self {
            chars: HIRAGANA.chars().collect(),
        }
    }

    pub fn katakana() -> Self {
        Self {
            chars: KATAKANA.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn position(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&x| x == c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.position(c).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kana_presets_are_distinct_and_sized() {
        assert_eq!(Alphabet::hiragana().len(), 73);
        assert_eq!(Alphabet::katakana().len(), 73);
        assert!(Alphabet::new(HIRAGANA).is_ok());
        assert!(Alphabet::new(KATAKANA).is_ok());
        assert_eq!(AlphabetSpec::Kana.resolve().unwrap().len(), 146);
    }

    #[test]
    fn order_is_preserved() {
        let a = Alphabet::new("ねこ").unwrap();
        assert_eq!(a.chars(), &['ね', 'こ']);
        assert_eq!(a.position('こ'), Some(1));
        assert!(!a.contains('い'));
    }

    #[test]
    fn empty_and_duplicate_alphabets_are_rejected() {
        assert!(matches!(Alphabet::new(""), Err(Error::Config(_))));
        match Alphabet::new("あいあ") {
            Err(Error::Construction { character, .. }) => assert_eq!(character, 'あ'),
            other => panic!("expected construction error, got {other:?}"),
        }
    }

    #[test]
    fn spec_parses_from_json() {
        let spec: AlphabetSpec = serde_json::from_str("\"katakana\"").unwrap();
        assert_eq!(spec, AlphabetSpec::Katakana);
        let spec: AlphabetSpec = serde_json::from_str(r#"{"custom":"アイ"}"#).unwrap();
        assert_eq!(spec.resolve().unwrap().len(), 2);
    }
}
