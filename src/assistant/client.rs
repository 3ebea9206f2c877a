use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use super::tools::{ToolCall, declarations};
use crate::config::settings::AssistantConfig;
use crate::gateway::{GatewayError, http_client, trim_base};
use crate::models::ChatMessage;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const SERVICE: &str = "gemini";

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I couldn't process that. How can I assist you with your Deen today?";

const NOT_FOUND_MARKER: &str = "Requested entity was not found";

const SYSTEM_INSTRUCTION: &str = "You are Nur, a specialized Islamic AI assistant. \
You help users with religious questions (Fiqh, Hadith, Quran), daily spiritual life, Zakat, and ethical guidance. \
Be respectful, compassionate, and informative. Always provide references from major Islamic sources when possible. \
Your purpose is to help Muslims grow in their Deen. Use a warm, encouraging tone.";

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("no API key found; set the {0} environment variable")]
    MissingKey(String),
    #[error("There was an issue with your AI key. Check it and try again.")]
    InvalidKey,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl From<reqwest::Error> for AssistantError {
    fn from(e: reqwest::Error) -> Self {
        AssistantError::Gateway(GatewayError::Http(e))
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    text: Option<String>,
    function_call: Option<FunctionCall>,
}

#[derive(Deserialize)]
struct FunctionCall {
    name: String,
    #[serde(default)]
    args: Value,
}

pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    http: Client,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: String) -> Result<Self, AssistantError> {
        Ok(Self {
            base_url: trim_base(base_url),
            model: model.to_string(),
            api_key,
            http: http_client()?,
        })
    }

    pub fn from_config(config: &AssistantConfig, base_url: &str) -> Result<Self, AssistantError> {
        let key = config
            .api_key()
            .ok_or_else(|| AssistantError::MissingKey(config.api_key_env.clone()))?;
        Self::new(base_url, &config.model, key)
    }

    fn request_body(history: &[ChatMessage], message: &str) -> Value {
        let mut contents: Vec<Value> = history
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "parts": [{ "text": m.text }] }))
            .collect();
        contents.push(json!({ "role": "user", "parts": [{ "text": message }] }));

        json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": contents,
            "tools": declarations(),
        })
    }

    /// Send `message` with prior `history` and return the reply text.
    ///
    /// When the model answers with a function call the tool runs locally and
    /// its output is the reply.
    pub fn chat(&self, history: &[ChatMessage], message: &str) -> Result<String, AssistantError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!("POST {url} ({} prior messages)", history.len());

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(history, message))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            warn!("{SERVICE} returned {status}");
            if status.as_u16() == 404 || body.contains(NOT_FOUND_MARKER) {
                return Err(AssistantError::InvalidKey);
            }
            return Err(GatewayError::Status {
                service: SERVICE,
                status: status.as_u16(),
            }
            .into());
        }

        let parsed: GenerateResponse = resp.json()?;
        Ok(Self::reply_from(parsed))
    }

    fn reply_from(resp: GenerateResponse) -> String {
        let parts = resp
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default();

        if let Some(reply) = parts
            .iter()
            .filter_map(|p| p.function_call.as_ref())
            .find_map(|fc| ToolCall::dispatch(&fc.name, &fc.args))
        {
            return reply;
        }

        let text: String = parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            FALLBACK_REPLY.to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const PATH: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";

    fn client(server: &mockito::Server) -> GeminiClient {
        GeminiClient::new(&server.url(), "gemini-3-flash-preview", "test-key".to_string()).unwrap()
    }

    #[test]
    fn returns_concatenated_text() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "Salam" }] },
                    { "role": "model", "parts": [{ "text": "Wa alaikum salam" }] },
                    { "role": "user", "parts": [{ "text": "What is Wudu?" }] }
                ]
            })))
            .with_body(r#"{"candidates": [{"content": {"role": "model", "parts": [
                {"text": "Wudu is "}, {"text": "ritual ablution."}
            ]}}]}"#)
            .create();

        let history = vec![ChatMessage::user("Salam"), ChatMessage::model("Wa alaikum salam")];
        let reply = client(&server).chat(&history, "What is Wudu?").unwrap();
        mock.assert();
        assert_eq!(reply, "Wudu is ritual ablution.");
    }

    #[test]
    fn function_call_runs_local_tool() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_body(r#"{"candidates": [{"content": {"parts": [
                {"functionCall": {"name": "calculateZakat", "args": {"totalAssets": 10000}}}
            ]}}]}"#)
            .create();

        let reply = client(&server).chat(&[], "Zakat on 10000?").unwrap();
        assert!(reply.contains("approximately 250.00"));
    }

    #[test]
    fn empty_candidate_uses_fallback() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_body(r#"{"candidates": []}"#)
            .create();

        assert_eq!(client(&server).chat(&[], "hello").unwrap(), FALLBACK_REPLY);
    }

    #[test]
    fn not_found_maps_to_invalid_key() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(404)
            .with_body(r#"{"error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}}"#)
            .create();

        let err = client(&server).chat(&[], "hello").unwrap_err();
        assert!(matches!(err, AssistantError::InvalidKey));
    }

    #[test]
    fn other_failures_surface_status() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", PATH).with_status(500).create();

        let err = client(&server).chat(&[], "hello").unwrap_err();
        assert!(matches!(
            err,
            AssistantError::Gateway(GatewayError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn missing_key_is_reported() {
        let config = AssistantConfig {
            model: "m".to_string(),
            api_key_env: "NUR_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
        };
        let err = GeminiClient::from_config(&config, DEFAULT_BASE_URL)
            .err()
            .unwrap();
        assert!(matches!(err, AssistantError::MissingKey(ref v) if v == "NUR_TEST_KEY_THAT_IS_NEVER_SET"));
    }
}
