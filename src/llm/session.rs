use uuid::Uuid;

use super::api::{
    Content,
    GeminiClient,
    GenerateRequest,
    GenerationConfig,
    InlineData,
    Part,
};
use crate::core::{
    LanguageOption,
    LexiloopError,
    UserProfile,
};

pub const SYSTEM_INSTRUCTION: &str = r#"
You are "LexiLoop", a cool, encouraging, and witty vocabulary tutor for teenagers.
Your goal is to teach foreign language vocabulary in bite-sized pieces.

BEHAVIOR GUIDELINES:
1. **Tone**: Casual, friendly, using appropriate emojis. Not cringey, but fun.
2. **Structure**:
   - IF the user hasn't selected a language, ask them what they want to learn.
   - ONCE a language is known, follow this "Loop":
     a. **Teach**: Introduce ONE new word. Format clearly:
        - **Word**: [Target Word]
        - **Pronunciation**: [Simple phonetic guide if needed]
        - **Meaning**: Simple definition.
        - **Vibe check**: A relatable example sentence (e.g., about school, friends, gaming, food, music).
     b. **Quiz**: Immediately ask a mini-quiz question about THAT word (e.g., "How would you say...?" or a multiple choice).
     c. **Wait**: Stop generating and wait for the user's answer.
     d. **Feedback**: Verify the answer. If correct, celebrate (🎉). If wrong, gently correct.
     e. **Next**: Ask if they are ready for the next word.

3. **Constraint**:
   - TEACH ONLY ONE WORD AT A TIME.
   - Keep responses short (under 150 words).
   - Do NOT give long lists.

4. **Interaction**:
   - If the user asks a specific question, answer it briefly, then return to the "Loop".
   - If the user wants to change topics, adapt but keep the focus on vocabulary.
"#;

fn personalized_instruction(profile: &UserProfile, language_name: &str) -> String {
    format!(
        r#"{SYSTEM_INSTRUCTION}

USER CONTEXT:
- Name: {name}
- Age: {age}
- Learning: {language_name}

MULTIMODAL INSTRUCTIONS (IMAGE ANALYSIS):
When the user sends an image, analyze it closely.

1. **Text Extraction**: If there is visible text, extract it first.
   Format it clearly like this:
   > **Extracted Text:**
   > "..."

2. **Translation & Explanation**: Translate the extracted text to English (and {language_name} if different).
   Break down difficult vocabulary.

3. **Scene Description**: If it's a photo of an object/scene, describe it in {language_name}.
   Teach 3-5 relevant words from the image.

4. **Tone**: Keep it helpful and beginner-friendly."#,
        name = profile.name,
        age = profile.age,
    )
}

/// One tutoring conversation. The session owns its client and its history;
/// there is no shared chat state anywhere else, so lifetime is exactly the
/// lifetime of this value.
pub struct TutorSession {
    id: Uuid,
    client: GeminiClient,
    system_instruction: Content,
    history: Vec<Content>,
    user_name: String,
    language_name: String,
}

impl TutorSession {
    pub fn new(client: GeminiClient, profile: &UserProfile, language: &LanguageOption) -> Self {
        let id = Uuid::new_v4();
        println!("Tutor session {} opened for '{}'", id, language.name);

        TutorSession {
            id,
            client,
            system_instruction: Content::system(personalized_instruction(profile, language.name)),
            history: Vec::new(),
            user_name: profile.name.clone(),
            language_name: language.name.to_string(),
        }
    }

    /// Kicks the conversation off with the canned opener and returns the
    /// tutor's first message.
    pub async fn start(&mut self) -> Result<String, LexiloopError> {
        let opener = format!(
            "Hello! I'm {}. Let's start learning {}! Teach me a cool word.",
            self.user_name, self.language_name
        );
        self.send_message(&opener, None).await
    }

    /// Sends one user turn, optionally with an inline image, and appends
    /// both the user turn and the model reply to the running history.
    pub async fn send_message(
        &mut self,
        text: &str,
        image: Option<InlineData>,
    ) -> Result<String, LexiloopError> {
        let mut parts = Vec::new();

        if let Some(image) = image {
            let text = if text.is_empty() {
                "Analyze this image and extract any text."
            } else {
                text
            };
            parts.push(Part::text(text));
            parts.push(Part::inline_data(image));
        } else {
            parts.push(Part::text(text));
        }

        self.history.push(Content::user(parts));

        let request = GenerateRequest {
            system_instruction: Some(self.system_instruction.clone()),
            contents: self.history.clone(),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                ..Default::default()
            }),
        };

        let response = self.client.generate(&request).await?;
        let reply = response.text().unwrap_or_else(|| "Sorry, I missed that.".to_string());

        self.history.push(Content::model(vec![Part::text(reply.clone())]));
        Ok(reply)
    }

    /// Forgets the conversation so far. The personalized instruction stays.
    pub fn reset(&mut self) {
        println!("Tutor session {} reset", self.id);
        self.history.clear();
    }

    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}

/// One-shot dashboard blurb. Never fails: generation problems fall back to a
/// fixed line so the dashboard always has something to show.
pub async fn dashboard_motivation(
    client: &GeminiClient,
    profile: &UserProfile,
    streak: u32,
) -> String {
    let prompt = format!(
        "Generate a very short, punchy, 1-sentence motivation for {} (Age: {}) who is learning {}. Current streak: {} days. Mention one of the languages.",
        profile.name,
        profile.age,
        profile.languages.join(", "),
        streak
    );

    let request = GenerateRequest {
        system_instruction: None,
        contents: vec![Content::user(vec![Part::text(prompt)])],
        generation_config: Some(GenerationConfig {
            temperature: Some(0.8),
            max_output_tokens: Some(50),
            ..Default::default()
        }),
    };

    match client.generate(&request).await {
        Ok(response) => {
            response.text().unwrap_or_else(|| "Keep up the great work! 🔥".to_string())
        }
        Err(e) => {
            eprintln!("Motivation request failed: {}", e);
            "Time to learn something new today! 🚀".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> UserProfile {
        UserProfile {
            name: "Mina".to_string(),
            age: 16,
            languages: vec!["french".to_string()],
            joined_date: chrono::Utc::now(),
        }
    }

    #[test]
    fn instruction_carries_user_context() {
        let instruction = personalized_instruction(&test_profile(), "French");
        assert!(instruction.contains("- Name: Mina"));
        assert!(instruction.contains("- Age: 16"));
        assert!(instruction.contains("- Learning: French"));
    }

    #[test]
    fn reset_clears_history() {
        let language = crate::core::models::find_language("french").unwrap();
        let mut session =
            TutorSession::new(GeminiClient::new("test-key".to_string()), &test_profile(), language);

        session.history.push(Content::user(vec![Part::text("hi")]));
        session.history.push(Content::model(vec![Part::text("hello")]));
        assert_eq!(session.turn_count(), 2);

        session.reset();
        assert_eq!(session.turn_count(), 0);
    }

    #[test]
    fn data_url_parsing() {
        let parsed = InlineData::from_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(parsed.mime_type, "image/png");
        assert_eq!(parsed.data, "aGVsbG8=");

        assert!(InlineData::from_data_url("not a data url").is_none());
    }
}
