//! @acp:module "Completion Client"
//! @acp:summary "Blocking chat-completions client with a bounded timeout"
//! @acp:domain cli
//! @acp:layer service

use std::error::Error as _;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::RemoteConfig;
use crate::error::RemoteError;

/// @acp:summary "Anything that turns a system/user prompt pair into completion text"
pub trait CompletionBackend {
    fn complete(&self, system: &str, user: &str) -> Result<String, RemoteError>;
}

/// Chat completion request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// @acp:summary "OpenAI-compatible chat completions backend"
pub struct OpenAiClient {
    agent: ureq::Agent,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(config: &RemoteConfig, api_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("sitebrief/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            api_url: config.api_url.clone(),
            api_key: api_key.into(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Request body for a system/user prompt pair
    pub fn request(&self, system: &str, user: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::new("system", system), ChatMessage::new("user", user)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

impl CompletionBackend for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, RemoteError> {
        let request = self.request(system, user);
        tracing::debug!("POST {} (model {})", self.api_url, self.model);

        let response = self
            .agent
            .post(&self.api_url)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(&request);

        match response {
            Ok(resp) => {
                let body = resp
                    .into_string()
                    .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;
                parse_completion(&body)
            }
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(RemoteError::Status {
                    code,
                    message: error_message(&body),
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                if is_timeout(&transport) {
                    Err(RemoteError::Timeout)
                } else {
                    Err(RemoteError::Transport(transport.to_string()))
                }
            }
        }
    }
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    transport
        .source()
        .and_then(|e| e.downcast_ref::<std::io::Error>())
        .map(|e| {
            matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            )
        })
        .unwrap_or(false)
}

/// Extract `choices[0].message.content` from a success body
pub fn parse_completion(body: &str) -> Result<String, RemoteError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| RemoteError::MalformedResponse("missing choices[0].message.content".into()))
}

/// `error.message` from an error body, or `Unknown error`
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completion_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"one"}},{"message":{"content":"two"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "one");
    }

    #[test]
    fn test_parse_completion_missing_content() {
        assert!(matches!(
            parse_completion(r#"{"choices":[]}"#),
            Err(RemoteError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_completion(r#"{"choices":[{"message":{"role":"assistant"}}]}"#),
            Err(RemoteError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_completion("not json"),
            Err(RemoteError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error":{"message":"Rate limit reached"}}"#),
            "Rate limit reached"
        );
        assert_eq!(error_message("<html>bad gateway</html>"), "Unknown error");
    }

    #[test]
    fn test_request_shape() {
        let config = RemoteConfig::default();
        let client = OpenAiClient::new(&config, "sk-test");
        let json = serde_json::to_value(client.request("sys", "usr")).unwrap();
        assert_eq!(json["model"], config.model.as_str());
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "usr");
        assert_eq!(json["max_tokens"], config.max_tokens);
    }
}
