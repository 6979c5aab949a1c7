#[cfg(test)]
mod tests {
    use crate::{
        core::{
            CardSource,
            Flashcard,
        },
        deck::{
            presets,
            DeckStore,
        },
        persistence::{
            FileStorage,
            MemoryStorage,
            Storage,
        },
    };

    fn generated(id: &str, word: &str, language: &str) -> Flashcard {
        Flashcard {
            id: id.to_string(),
            word: word.to_string(),
            pronunciation: None,
            meaning: format!("{} (meaning)", word),
            example: format!("{} in a sentence.", word),
            language: language.to_string(),
            source: CardSource::GeneratedFromDocument,
        }
    }

    #[test]
    fn deck_is_presets_then_generated_in_storage_order() {
        let store = DeckStore::new(MemoryStorage::new());
        let preset_count = presets::preset_cards("spanish").len();
        assert!(preset_count > 0);

        store.add_cards(&[generated("gen-1-0", "biblioteca", "spanish")]).unwrap();

        let deck = store.get_deck("spanish").unwrap();
        assert_eq!(deck.len(), preset_count + 1);

        for card in &deck[..preset_count] {
            assert_eq!(card.source, CardSource::Preset);
            assert_eq!(card.language, "spanish");
        }
        assert_eq!(deck[preset_count].word, "biblioteca");
    }

    #[test]
    fn language_filter_is_case_insensitive() {
        let store = DeckStore::new(MemoryStorage::new());
        store.add_cards(&[generated("gen-1-0", "fenêtre", "French")]).unwrap();

        let deck = store.get_deck("french").unwrap();
        assert!(deck.iter().any(|c| c.word == "fenêtre"));

        let other_deck = store.get_deck("german").unwrap();
        assert!(!other_deck.iter().any(|c| c.word == "fenêtre"));
    }

    #[test]
    fn wildcard_deck_sees_every_generated_card() {
        let store = DeckStore::new(MemoryStorage::new());
        store.add_cards(&[
            generated("gen-1-0", "fenêtre", "french"),
            generated("gen-1-1", "Fenster", "german"),
        ]).unwrap();

        let deck = store.get_deck("other").unwrap();
        let words: Vec<&str> = deck.iter().map(|c| c.word.as_str()).collect();

        // The wildcard preset pair comes first, then everything generated.
        assert!(words.ends_with(&["fenêtre", "Fenster"]));
        assert!(deck.iter().take(2).all(|c| c.source == CardSource::Preset));
    }

    #[test]
    fn repeated_imports_accumulate_duplicates() {
        let store = DeckStore::new(MemoryStorage::new());
        let batch = vec![generated("gen-1-0", "fête", "french")];

        store.add_cards(&batch).unwrap();
        store.add_cards(&batch).unwrap();

        let deck = store.get_deck("french").unwrap();
        let count = deck.iter().filter(|c| c.word == "fête").count();
        assert_eq!(count, 2);
    }

    #[test]
    fn append_preserves_existing_order() {
        let store = DeckStore::new(MemoryStorage::new());
        store.add_cards(&[generated("gen-1-0", "uno", "spanish")]).unwrap();
        store.add_cards(&[generated("gen-2-0", "dos", "spanish")]).unwrap();
        store.add_cards(&[generated("gen-3-0", "tres", "spanish")]).unwrap();

        let deck = store.get_deck("spanish").unwrap();
        let generated_words: Vec<&str> = deck
            .iter()
            .filter(|c| c.source == CardSource::GeneratedFromDocument)
            .map(|c| c.word.as_str())
            .collect();

        assert_eq!(generated_words, vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn clear_generated_keeps_presets() {
        let store = DeckStore::new(MemoryStorage::new());
        store.add_cards(&[generated("gen-1-0", "uno", "spanish")]).unwrap();
        store.clear_generated().unwrap();

        let deck = store.get_deck("spanish").unwrap();
        assert!(deck.iter().all(|c| c.source == CardSource::Preset));
        assert!(!deck.is_empty());
    }

    #[test]
    fn unknown_language_deck_is_generated_only() {
        let store = DeckStore::new(MemoryStorage::new());
        store.add_cards(&[generated("gen-1-0", "sawubona", "zulu")]).unwrap();

        let deck = store.get_deck("zulu").unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck[0].word, "sawubona");
    }

    #[test]
    fn presets_are_retagged_with_the_requested_language() {
        for preset in presets::preset_cards("SPANISH") {
            assert_eq!(preset.language, "spanish");
        }
    }

    #[test]
    fn file_storage_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "lexiloop-test-{}-{}",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let storage = FileStorage::with_dir(dir.clone());

        storage.write("deck_probe", "[1, 2, 3]").unwrap();
        assert_eq!(storage.read("deck_probe").unwrap().as_deref(), Some("[1, 2, 3]"));

        let store = DeckStore::new(storage);
        store.add_cards(&[generated("gen-1-0", "uno", "spanish")]).unwrap();
        let deck = store.get_deck("spanish").unwrap();
        assert!(deck.iter().any(|c| c.word == "uno"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
