use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use reqwest::blocking::Client;
use serde_json::json;

use crate::foundation::error::{QuizError, QuizResult};
use crate::quiz::model::Quiz;
use crate::quiz::parse::parse_quiz_text;
use crate::services::prompt::{SYSTEM_PROMPT, build_prompt, pick_category, time_seed};
use crate::services::{QuizSource, SpeechSynthesizer};

/// Endpoint, model and voice settings for an OpenAI-compatible API.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    /// Base URL without the `/v1/...` suffix.
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub chat_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub tts_model: String,
    pub voice: String,
    /// `mp3` or `wav`.
    pub tts_format: String,
    pub speed: f32,
    pub timeout_secs: u64,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            chat_model: "gpt-4".to_string(),
            max_tokens: 1000,
            temperature: 0.8,
            tts_model: "tts-1".to_string(),
            voice: "nova".to_string(),
            tts_format: "mp3".to_string(),
            speed: 1.0,
            timeout_secs: 120,
        }
    }
}

impl OpenAiSettings {
    pub fn validate(&self) -> QuizResult<()> {
        if !matches!(self.tts_format.as_str(), "mp3" | "wav") {
            return Err(QuizError::config(format!(
                "unsupported openai.tts_format '{}' (expected mp3|wav)",
                self.tts_format
            )));
        }
        if !(0.25..=4.0).contains(&self.speed) {
            return Err(QuizError::config("openai.speed must be within 0.25..=4.0"));
        }
        if self.timeout_secs == 0 {
            return Err(QuizError::config("openai.timeout_secs must be non-zero"));
        }
        Ok(())
    }
}

/// Authenticated blocking HTTP client for one API base URL.
#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(serde::Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(settings: &OpenAiSettings, api_key: impl Into<String>) -> QuizResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| QuizError::service(format!("build http client: {e}")))?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Client keyed from the environment variable named by `settings.api_key_env`.
    pub fn from_env(settings: &OpenAiSettings) -> QuizResult<Self> {
        let key = std::env::var(&settings.api_key_env).map_err(|_| {
            QuizError::config(format!(
                "{} is not set (needed for OpenAI requests)",
                settings.api_key_env
            ))
        })?;
        Self::new(settings, key)
    }

    fn post(
        &self,
        route: &str,
        body: &serde_json::Value,
    ) -> QuizResult<reqwest::blocking::Response> {
        let url = format!("{}{route}", self.base_url);
        let res = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .map_err(|e| QuizError::service(format!("POST {route}: {e}")))?;
        let status = res.status();
        if !status.is_success() {
            let text = res.text().unwrap_or_default();
            return Err(QuizError::service(format!(
                "POST {route} failed: {status}: {text}"
            )));
        }
        Ok(res)
    }

    /// Single-turn chat completion; returns the first choice's text.
    pub fn chat(&self, settings: &OpenAiSettings, system: &str, user: &str) -> QuizResult<String> {
        let body = json!({
            "model": settings.chat_model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "max_tokens": settings.max_tokens,
            "temperature": settings.temperature,
        });
        let res: ChatResponse = self
            .post("/v1/chat/completions", &body)?
            .json()
            .map_err(|e| QuizError::service(format!("decode chat response: {e}")))?;
        res.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| QuizError::service("chat response has no content"))
    }

    /// Speech audio bytes for `text`.
    pub fn speech(&self, settings: &OpenAiSettings, text: &str) -> QuizResult<Vec<u8>> {
        let body = json!({
            "model": settings.tts_model,
            "input": text,
            "voice": settings.voice,
            "response_format": settings.tts_format,
            "speed": settings.speed,
        });
        let bytes = self
            .post("/v1/audio/speech", &body)?
            .bytes()
            .map_err(|e| QuizError::service(format!("read speech response: {e}")))?;
        if bytes.is_empty() {
            return Err(QuizError::service("speech response is empty"));
        }
        Ok(bytes.to_vec())
    }
}

/// [`QuizSource`] asking a chat model for a quiz in a random category.
#[derive(Clone, Debug)]
pub struct OpenAiQuizSource {
    client: OpenAiClient,
    settings: OpenAiSettings,
    category: Option<String>,
}

impl OpenAiQuizSource {
    pub fn new(client: OpenAiClient, settings: OpenAiSettings) -> Self {
        Self {
            client,
            settings,
            category: None,
        }
    }

    /// Always ask about `category` instead of picking one.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl QuizSource for OpenAiQuizSource {
    #[tracing::instrument(skip(self))]
    fn generate_quiz(&self) -> QuizResult<Quiz> {
        let category = match &self.category {
            Some(c) => c.clone(),
            None => pick_category(time_seed()).to_string(),
        };
        tracing::info!(%category, "requesting quiz");
        let text = self
            .client
            .chat(&self.settings, SYSTEM_PROMPT, &build_prompt(&category))?;
        parse_quiz_text(&text, &category)
    }
}

/// [`SpeechSynthesizer`] backed by the audio/speech endpoint.
#[derive(Clone, Debug)]
pub struct OpenAiSpeech {
    client: OpenAiClient,
    settings: OpenAiSettings,
}

impl OpenAiSpeech {
    pub fn new(client: OpenAiClient, settings: OpenAiSettings) -> Self {
        Self { client, settings }
    }
}

impl SpeechSynthesizer for OpenAiSpeech {
    #[tracing::instrument(
        skip(self, text),
        fields(path = %out_path.display(), chars = text.chars().count())
    )]
    fn synthesize(&self, text: &str, out_path: &Path) -> QuizResult<()> {
        if text.trim().is_empty() {
            return Err(QuizError::validation("narration script is empty"));
        }
        let audio = self.client.speech(&self.settings, text)?;
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create audio directory '{}'", parent.display()))?;
        }
        std::fs::write(out_path, &audio)
            .with_context(|| format!("write narration '{}'", out_path.display()))?;
        tracing::debug!(bytes = audio.len(), "narration written");
        Ok(())
    }

    fn extension(&self) -> &str {
        &self.settings.tts_format
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/openai.rs"]
mod tests;
