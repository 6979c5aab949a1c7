use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone)]
pub struct LanguageOption {
    pub id: &'static str,       // Lowercase identifier used as the deck key
    pub name: &'static str,     // Display name fed into prompts
    pub flag: &'static str,
    pub greeting: &'static str,
}

pub const POPULAR_LANGUAGES: &[LanguageOption] = &[
    LanguageOption { id: "spanish", name: "Spanish", flag: "🇪🇸", greeting: "Hola!" },
    LanguageOption { id: "french", name: "French", flag: "🇫🇷", greeting: "Bonjour!" },
    LanguageOption { id: "japanese", name: "Japanese", flag: "🇯🇵", greeting: "Konnichiwa!" },
    LanguageOption { id: "german", name: "German", flag: "🇩🇪", greeting: "Hallo!" },
    LanguageOption { id: "italian", name: "Italian", flag: "🇮🇹", greeting: "Ciao!" },
    LanguageOption { id: "korean", name: "Korean", flag: "🇰🇷", greeting: "Annyeong!" },
    LanguageOption { id: "mandarin", name: "Mandarin", flag: "🇨🇳", greeting: "Ni Hao!" },
    LanguageOption { id: "portuguese", name: "Portuguese", flag: "🇧🇷", greeting: "Olá!" },
];

pub fn find_language(id: &str) -> Option<&'static LanguageOption> {
    POPULAR_LANGUAGES.iter().find(|l| l.id.eq_ignore_ascii_case(id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardSource {
    #[default]
    Preset,
    GeneratedFromDocument,
    GeneratedFromChat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,                    // Unique within the deck for its language
    pub word: String,                  // Target-language term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>, // Optional phonetic guide
    pub meaning: String,
    pub example: String,
    pub language: String,              // Normalized lowercase deck key
    #[serde(default)]
    pub source: CardSource,
}

/// One candidate entry as returned by the generation oracle, before any
/// validation. Required fields may come back empty or missing entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCard {
    pub word: String,
    pub meaning: String,
    pub example: String,
    pub pronunciation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenedCard {
    Valid { word: String, meaning: String, example: String, pronunciation: Option<String> },
    Rejected,
}

impl RawCard {
    /// A candidate is usable only when all required fields carry
    /// non-whitespace content. Pronunciation is optional and an empty
    /// string collapses to absent.
    pub fn screen(self) -> ScreenedCard {
        let word = self.word.trim();
        let meaning = self.meaning.trim();
        let example = self.example.trim();

        if word.is_empty() || meaning.is_empty() || example.is_empty() {
            return ScreenedCard::Rejected;
        }

        let pronunciation =
            self.pronunciation.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());

        ScreenedCard::Valid {
            word: word.to_string(),
            meaning: meaning.to_string(),
            example: example.to_string(),
            pronunciation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub languages: Vec<String>, // Language ids picked during onboarding
    pub joined_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    pub streak: u32,
    pub cards_known: u32,
    pub last_study_date: chrono::DateTime<chrono::Utc>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self { streak: 0, cards_known: 0, last_study_date: chrono::Utc::now() }
    }
}

impl UserProgress {
    /// Streak bookkeeping: same calendar day is a no-op, the day after the
    /// last study extends the streak, anything else restarts it at 1.
    pub fn record_study(&mut self, now: chrono::DateTime<chrono::Utc>) {
        let last = self.last_study_date.date_naive();
        let today = now.date_naive();

        if today == last {
            self.last_study_date = now;
            return;
        }

        if (today - last).num_days() == 1 {
            self.streak += 1;
        } else {
            self.streak = 1;
        }
        self.last_study_date = now;
    }

    pub fn add_known_cards(&mut self, count: u32) {
        self.cards_known += count;
    }
}
