//! Chat-completions client that turns extracted resume text into
//! structured JSON.
//!
//! The model is treated as a black box: the response JSON is passed
//! through to the caller verbatim, with no schema validation on our side.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("no API key configured (set LLM_API_KEY or OPENAI_API_KEY)")]
    MissingApiKey,
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("language model API error: {0}")]
    Api(String),
    #[error("model returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Configuration for the language-model client.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL of an OpenAI-compatible API, without the trailing slash.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 60,
        }
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl LlmConfig {
    /// Resolve configuration from environment variables, falling back to
    /// defaults. `LLM_API_KEY` wins over `OPENAI_API_KEY`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("LLM_API_KEY")
                .ok()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok()),
            model: std::env::var("LLM_MODEL").unwrap_or(defaults.model),
            base_url: std::env::var("LLM_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: std::env::var("LLM_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

// ── Wire types ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    r#type: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

// ── Client ──────────────────────────────────────────────────────────────

/// HTTP client for an OpenAI-compatible chat-completions API.
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send extracted resume text to the model and return its JSON verbatim.
    pub async fn parse_resume(&self, resume_text: &str) -> Result<serde_json::Value, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingApiKey)?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: render_user_prompt(resume_text),
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat {
                r#type: "json_object".to_string(),
            },
        };

        tracing::debug!(
            model = %self.config.model,
            resume_chars = resume_text.len(),
            "sending resume text to language model"
        );

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(api_key)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("HTTP {status}: {body}")));
        }

        let chat: ChatResponse = resp.json().await?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::Api("response contained no choices".to_string()))?;

        let json = extract_json(&content);
        serde_json::from_str(&json).map_err(LlmError::InvalidJson)
    }
}

/// Strip a markdown code fence from the model output, if present.
///
/// Models occasionally wrap JSON in ```json fences even when asked not to;
/// fall back to the outermost brace pair, then to the raw text.
fn extract_json(text: &str) -> String {
    let text = text.trim();

    if text.starts_with("```") {
        if let Some(start) = text.find('\n') {
            let after_first_line = &text[start + 1..];
            if let Some(end) = after_first_line.rfind("```") {
                return after_first_line[..end].trim().to_string();
            }
        }
    }

    if let Some(start) = text.find('{') {
        if let Some(end) = text.rfind('}') {
            return text[start..=end].to_string();
        }
    }

    text.to_string()
}

fn render_user_prompt(resume_text: &str) -> String {
    USER_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

const SYSTEM_PROMPT: &str =
    "You are an intelligent resume parser. Only respond with valid JSON. No markdown. No explanations.";

const USER_PROMPT_TEMPLATE: &str = r#"
Extract structured information from the following resume text and return valid, strict JSON format.
Only include present fields. Do not return nulls, empty strings, or placeholders.
IMPORTANT: Your response must be valid JSON. Use only double quotes. No comments. No trailing commas.

Resume text:
{resume_text}

Expected JSON format:
{
  "name": "Full name",
  "email": "Email address",
  "phone": "Phone number",
  "linkedin": "LinkedIn profile URL",
  "github": "GitHub profile URL",
  "summary": "Professional summary",
  "skills": ["Skill 1", "Skill 2", "..."],
  "work_experience": [
    {
      "company": "Company name",
      "position": "Job title",
      "duration": "From – To or Present",
      "location": "City, Country",
      "description": ["Responsibility 1", "Responsibility 2"]
    }
  ],
  "projects": [
    {
      "name": "Project name",
      "description": "Short project description",
      "link": "GitHub or live link (optional)"
    }
  ],
  "education": [
    {
      "degree": "Degree name",
      "university": "University name",
      "years": "From – To or year of graduation",
      "grade": "GPA/SGPA (optional)"
    }
  ],
  "certifications": ["Certification 1", "Certification 2"],
  "languages": ["Language 1", "Language 2"],
  "address": "Address if available",
  "interests": ["Interest 1", "Interest 2"]
}
"#;
