use crate::core::{
    CardSource,
    Flashcard,
};

fn card(id: &str, word: &str, pronunciation: &str, meaning: &str, example: &str, language: &str) -> Flashcard {
    Flashcard {
        id: id.to_string(),
        word: word.to_string(),
        pronunciation: Some(pronunciation.to_string()),
        meaning: meaning.to_string(),
        example: example.to_string(),
        language: language.to_string(),
        source: CardSource::Preset,
    }
}

/// Preset cards shipped with the app for a language, re-tagged with the
/// requested id so the deck key is always consistent with how the deck was
/// asked for. Unknown languages get no presets.
pub fn preset_cards(language_id: &str) -> Vec<Flashcard> {
    let key = language_id.to_lowercase();

    let mut cards = match key.as_str() {
        "spanish" => vec![
            card("1", "La playa", "la plah-yah", "The beach", "Vamos a la playa este fin de semana. 🏖️", "spanish"),
            card("2", "Amigo", "ah-mee-goh", "Friend", "Eres mi mejor amigo. 🤝", "spanish"),
            card("3", "Comida", "koh-mee-dah", "Food", "¡Esta comida es deliciosa! 🌮", "spanish"),
            card("4", "Escuela", "es-kweh-lah", "School", "No quiero ir a la escuela hoy. 📚", "spanish"),
        ],
        "french" => vec![
            card("1", "Le chat", "luh shah", "The cat", "Le chat dort sur le lit. 🐱", "french"),
            card("2", "Merci", "mehr-see", "Thank you", "Merci beaucoup pour le cadeau! 🎁", "french"),
            card("3", "Fête", "fet", "Party", "On va à une fête ce soir! 🎉", "french"),
        ],
        "german" => vec![
            card("1", "Genau", "geh-now", "Exactly / Precisely", "Ja, genau! Du hast recht. 👍", "german"),
            card("2", "Freunde", "froyn-duh", "Friends", "Ich treffe meine Freunde im Park. 🌳", "german"),
            card("3", "Lecker", "lek-er", "Delicious / Yummy", "Das Eis ist super lecker. 🍦", "german"),
        ],
        "japanese" => vec![
            card("1", "Oishii", "oh-ee-shee", "Delicious", "Kono sushi wa oishii desu! 🍣", "japanese"),
            card("2", "Tomodachi", "toh-moh-dah-chi", "Friend", "Kare wa watashi no tomodachi desu. 👫", "japanese"),
            card("3", "Kawaii", "kah-wah-ee", "Cute", "Ano inu wa totemo kawaii! 🐕", "japanese"),
        ],
        "italian" => vec![
            card("1", "Ciao", "chow", "Hello / Goodbye", "Ciao! Come stai? 👋", "italian"),
            card("2", "Pizza", "peet-zah", "Pizza", "Voglio mangiare una pizza. 🍕", "italian"),
        ],
        "korean" => vec![
            card("1", "Daebak", "dae-bak", "Awesome / Big hit", "Wow, that performance was daebak! 🤩", "korean"),
            card("2", "Chingu", "chin-goo", "Friend", "We are best chingus. 👯", "korean"),
        ],
        "mandarin" => vec![
            card("1", "Péngyǒu", "pung-yo", "Friend", "Tā shì wǒ de péngyǒu. 🧑‍🤝‍🧑", "mandarin"),
            card("2", "Hǎochī", "how-chir", "Delicious", "Zhège hěn hǎochī. 🍜", "mandarin"),
        ],
        "portuguese" => vec![
            card("1", "Saudade", "saw-dah-jee", "Missing someone/something", "Tenho saudade de você. 💔", "portuguese"),
            card("2", "Legal", "lay-gow", "Cool / Nice", "Esse jogo é muito legal! 🎮", "portuguese"),
        ],
        "other" => vec![
            card("1", "Hello", "-", "Greeting", "Universal greeting.", "other"),
            card("2", "World", "-", "Planet Earth", "Hello World!", "other"),
        ],
        _ => Vec::new(),
    };

    for preset in &mut cards {
        preset.language = key.clone();
    }

    cards
}
