use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::LexiloopError;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part { text: Some(text.into()), inline_data: None }
    }

    pub fn inline_data(data: InlineData) -> Self {
        Part { text: None, inline_data: Some(data) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String, // Raw base64 payload, without the data URL prefix
}

impl InlineData {
    /// Parses a `data:image/png;base64,...` style URL into its mime type and
    /// base64 payload. Returns None if the string isn't shaped like one.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let colon = url.find(':')?;
        let semicolon = url.find(';')?;
        let comma = url.find(',')?;
        if colon >= semicolon || semicolon >= comma {
            return None;
        }

        Some(InlineData {
            mime_type: url[colon + 1..semicolon].to_string(),
            data: url[comma + 1..].to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Content { role: Some("user".to_string()), parts }
    }

    pub fn model(parts: Vec<Part>) -> Self {
        Content { role: Some("model".to_string()), parts }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Content { role: None, parts: vec![Part::text(text)] }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if the model returned any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String =
            content.parts.iter().filter_map(|p| p.text.as_deref()).collect::<Vec<_>>().join("");

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        GeminiClient { client: Client::new(), api_key, model }
    }

    pub fn from_env() -> Result<Self, LexiloopError> {
        let api_key =
            std::env::var("GEMINI_API_KEY").map_err(|_| LexiloopError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(LexiloopError::MissingApiKey);
        }
        Ok(Self::new(api_key))
    }

    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, LexiloopError> {
        let url = format!("{}/models/{}:generateContent", API_BASE, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LexiloopError::GenerationStatus(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }
}
