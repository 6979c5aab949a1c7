use super::presets;
use crate::{
    core::{
        Flashcard,
        LexiloopError,
    },
    persistence::Storage,
};

/// All generated cards live under one key as a single serialized array;
/// per-language views are produced by filtering at read time.
pub const CUSTOM_DECK_KEY: &str = "lexiloop_custom_deck";

/// Deck id that matches generated cards of every language.
pub const WILDCARD_LANGUAGE: &str = "other";

/// Sole owner of persisted generated cards. The pipeline produces batches;
/// this store appends them and serves merged per-language decks.
pub struct DeckStore<S: Storage> {
    storage: S,
}

impl<S: Storage> DeckStore<S> {
    pub fn new(storage: S) -> Self {
        DeckStore { storage }
    }

    /// The full deck for a language: presets first, then every stored
    /// generated card whose language matches (case-insensitive), in the
    /// order the cards were appended. The wildcard id returns generated
    /// cards of all languages.
    pub fn get_deck(&self, language_id: &str) -> Result<Vec<Flashcard>, LexiloopError> {
        let mut deck = presets::preset_cards(language_id);

        let generated = self.load_generated()?;
        deck.extend(generated.into_iter().filter(|c| {
            c.language.eq_ignore_ascii_case(language_id) || language_id == WILDCARD_LANGUAGE
        }));

        Ok(deck)
    }

    /// Appends a batch to the persisted array. Order is preserved and no
    /// deduplication happens; importing the same document twice stores the
    /// cards twice.
    pub fn add_cards(&self, new_cards: &[Flashcard]) -> Result<(), LexiloopError> {
        let mut generated = self.load_generated()?;
        generated.extend(new_cards.iter().cloned());

        let json = serde_json::to_string(&generated)?;
        self.storage.write(CUSTOM_DECK_KEY, &json)
    }

    /// Deck reset: drops every generated card. Presets are untouched since
    /// they are code, not storage.
    pub fn clear_generated(&self) -> Result<(), LexiloopError> {
        self.storage.remove(CUSTOM_DECK_KEY)
    }

    fn load_generated(&self) -> Result<Vec<Flashcard>, LexiloopError> {
        match self.storage.read(CUSTOM_DECK_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }
}
