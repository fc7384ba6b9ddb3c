use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub type LanguageDb = HashMap<&'static str, &'static str>;

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  Ms,
  En,
}

impl Language {
  pub fn code(&self) -> &'static str {
    match self {
      Language::Ms => "ms",
      Language::En => "en",
    }
  }

  /// Translation key for the language's own name in the language selector.
  pub fn label_key(&self) -> &'static str {
    match self {
      Language::Ms => "selection_language_malay",
      Language::En => "selection_language_english",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl FromStr for Language {
  type Err = Error;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "ms" | "0" => Ok(Language::Ms),
      "en" | "1" => Ok(Language::En),
      other => Err(Error::UnknownLanguage(other.to_string())),
    }
  }
}

const MS: &[(&str, &str)] = &[
  ("app_description", "Quran baca bersama"),
  ("language_select_text", "Pilih bahasa"),
  ("select_reader", "Pilih bilangan pembaca"),
  ("selection_reader_none", "Tiada"),
  ("reader_label_text", "Pembaca"),
  ("reader_placeholder", "Nama"),
  ("calculate_button", "Kira"),
  ("readers_table_title", "Senarai pembaca dan mukasurat yg perlu dibaca mengikut juzuk"),
  ("juzuk_selector_label", "Pilih Juzuk"),
  ("name_header", "Nama"),
  ("page_header", "Mukasurat"),
  ("share_title", "Bacaan untuk hari ini"),
  ("section_label", "Juzuk"),
  ("pages_label", "Mukasurat"),
  ("selection_language_malay", "Melayu"),
  ("selection_language_english", "Inggeris"),
  ("copy_data_button", "Klik sini untuk copy maklumat ke Whatsapp"),
  ("copy_note", "Nota: Sila paste dimana-mana message didalam Whatsapp"),
];

const EN: &[(&str, &str)] = &[
  ("app_description", "Read the Quran together"),
  ("language_select_text", "Choose language"),
  ("select_reader", "Choose number of readers"),
  ("selection_reader_none", "None"),
  ("reader_label_text", "Reader"),
  ("reader_placeholder", "Name"),
  ("calculate_button", "Calculate"),
  ("readers_table_title", "Readers and the pages to read for each juz"),
  ("juzuk_selector_label", "Choose Juz"),
  ("name_header", "Name"),
  ("page_header", "Pages"),
  ("share_title", "Today's reading"),
  ("section_label", "Section"),
  ("pages_label", "Pages"),
  ("selection_language_malay", "Malay"),
  ("selection_language_english", "English"),
  ("copy_data_button", "Copy the readings to share on Whatsapp"),
  ("copy_note", "Note: paste into any chat message"),
];

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct I18n {
  pub default_locale: Language,
  pub strings: HashMap<Language, LanguageDb>,
}

impl Default for I18n {
  fn default() -> Self {
    let mut strings = HashMap::new();
    strings.insert(Language::Ms, MS.iter().copied().collect());
    strings.insert(Language::En, EN.iter().copied().collect());
    Self {
      default_locale: Language::Ms,
      strings,
    }
  }
}

impl I18n {
  pub fn get_translation(&self, locale: Language, text: &str) -> String {
    match self.strings.get(&locale) {
      Some(strings) => match strings.get(text) {
        Some(t) => t.to_string(),
        None => format!("MISSING TRANSLATION `{}` in locale `{}`", text, locale),
      },
      None => format!("MISSING LOCALE `{}`", locale),
    }
  }
}
