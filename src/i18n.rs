//! Localized prompt strings and number formatting.

use crate::config::ConfigError;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
    De,
    It,
    Es,
}

/// Supported languages in preference order.
pub const SUPPORTED_LANGUAGES: [Language; 5] = [
    Language::Fr,
    Language::En,
    Language::De,
    Language::It,
    Language::Es,
];

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::De => "de",
            Language::It => "it",
            Language::Es => "es",
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Language::En => '.',
            _ => ',',
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    /// Accepts full locale tags: only the primary subtag is considered.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag.split('-').next().unwrap_or_default().trim();
        if primary.is_empty() {
            return Err(ConfigError::EmptyLanguageTag);
        }
        let primary = primary.to_lowercase();
        SUPPORTED_LANGUAGES
            .into_iter()
            .find(|lang| lang.code() == primary)
            .ok_or_else(|| ConfigError::UnsupportedLanguage(primary))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub prompt_touch: &'static str,
    pub chosen: &'static str,
    /// Contains a `{seconds}` placeholder.
    pub countdown: &'static str,
}

static MESSAGES: Lazy<HashMap<Language, Messages>> = Lazy::new(|| {
    HashMap::from([
        (
            Language::Fr,
            Messages {
                prompt_touch: "Posez un doigt sur l'écran.",
                chosen: "Choisi. Relevez pour rejouer.",
                countdown: "Compte à rebours: {seconds}s",
            },
        ),
        (
            Language::En,
            Messages {
                prompt_touch: "Place a finger on the screen.",
                chosen: "Chosen. Lift to play again.",
                countdown: "Countdown: {seconds}s",
            },
        ),
        (
            Language::De,
            Messages {
                prompt_touch: "Lege einen Finger auf den Bildschirm.",
                chosen: "Gewählt. Zum erneuten Spielen loslassen.",
                countdown: "Countdown: {seconds}s",
            },
        ),
        (
            Language::It,
            Messages {
                prompt_touch: "Appoggia un dito sullo schermo.",
                chosen: "Scelto. Solleva per rigiocare.",
                countdown: "Conto alla rovescia: {seconds}s",
            },
        ),
        (
            Language::Es,
            Messages {
                prompt_touch: "Pon un dedo en la pantalla.",
                chosen: "Elegido. Suelta para jugar de nuevo.",
                countdown: "Cuenta regresiva: {seconds}s",
            },
        ),
    ])
});

impl Messages {
    pub fn for_language(language: Language) -> &'static Messages {
        &MESSAGES[&language]
    }

    pub fn countdown_label(&self, remaining_ms: f64, language: Language) -> String {
        self.countdown
            .replace("{seconds}", &format_seconds(remaining_ms, language))
    }
}

/// Seconds with exactly one fractional digit, e.g. `2,5` or `2.5`.
pub fn format_seconds(remaining_ms: f64, language: Language) -> String {
    let tenths = (remaining_ms.max(0.0) / 100.0).round() as u64;
    format!("{}{}{}", tenths / 10, language.decimal_separator(), tenths % 10)
}
