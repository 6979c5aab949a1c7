use std::sync::OnceLock;

use regex::Regex;
use serde_json::json;

use super::api::{
    Content,
    GeminiClient,
    GenerateRequest,
    GenerationConfig,
    Part,
};
use crate::core::{
    pipeline::CardOracle,
    LexiloopError,
    RawCard,
};

/// Response schema sent with every chunk request: an array of candidate
/// entries with required word/meaning/example and optional pronunciation.
fn flashcard_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "word": { "type": "STRING", "description": "The word in the target language" },
                "meaning": { "type": "STRING", "description": "English translation" },
                "example": { "type": "STRING", "description": "A simple example sentence in the target language" },
                "pronunciation": { "type": "STRING", "description": "Simple phonetic pronunciation guide" }
            },
            "required": ["word", "meaning", "example"]
        }
    })
}

fn flashcard_prompt(language: &str, chunk: &str) -> String {
    format!(
        r#"You are a rigorous Flashcard Generator for students learning {language}.

INPUT TEXT CHUNK:
"""
{chunk}
"""

TASK:
Convert the input text into flashcards.

CRITICAL RULES:
1. LIST MODE: If the input looks like a list of words (e.g. "Word - Meaning" or just a column of words):
   - You MUST create a flashcard for EVERY SINGLE LINE/ITEM in this chunk.
   - Do not skip any entries.
   - Do not summarize or group them.
   - If a line is just a word, generate the meaning and example yourself.
2. TEXT MODE: If the input is a paragraph/story:
   - Extract at least 15 distinct vocabulary words from this text chunk.
   - Choose words that are useful for learners (nouns, verbs, adjectives).

Output JSON only."#
    )
}

/// Models sometimes wrap structured output in a markdown fence even when
/// asked for raw JSON. Unwrap it before parsing.
fn strip_code_fence(text: &str) -> &str {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let re = FENCE
        .get_or_init(|| Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").unwrap());

    match re.captures(text) {
        Some(captures) => captures.get(1).map_or(text, |m| m.as_str()),
        None => text.trim(),
    }
}

impl CardOracle for GeminiClient {
    async fn generate_cards(
        &self,
        chunk: &str,
        language: &str,
    ) -> Result<Vec<RawCard>, LexiloopError> {
        let request = GenerateRequest {
            system_instruction: None,
            contents: vec![Content::user(vec![Part::text(flashcard_prompt(language, chunk))])],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(flashcard_schema()),
                ..Default::default()
            }),
        };

        let response = self.generate(&request).await?;

        let text = response.text().ok_or_else(|| {
            LexiloopError::Custom("Generation response contained no text".to_string())
        })?;

        let cards: Vec<RawCard> = serde_json::from_str(strip_code_fence(&text))?;
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_payloads_are_unwrapped() {
        let fenced = "```json\n[{\"word\": \"chien\"}]\n```";
        assert_eq!(strip_code_fence(fenced), "[{\"word\": \"chien\"}]");

        let bare = " [1, 2] ";
        assert_eq!(strip_code_fence(bare), "[1, 2]");
    }

    #[test]
    fn prompt_names_the_language_and_embeds_the_chunk() {
        let prompt = flashcard_prompt("French", "Bonjour - Hello");
        assert!(prompt.contains("students learning French"));
        assert!(prompt.contains("Bonjour - Hello"));
    }
}
