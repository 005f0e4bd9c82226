//! Generation event API
//!
//! Every AI request is a named event posted to the hosted `createEvent`
//! function. The event's JSON result is decoded according to the contract the
//! caller asked for.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use supper_common::{IdeaContract, IdeaResult};
use thiserror::Error;
use tracing::{debug, warn};

/// Event name for idea requests
pub const IDEAS_EVENT: &str = "chatgpt_request";
/// Event name for image requests
pub const IMAGE_EVENT: &str = "generate_image";

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("event API error ({status}): {body}")]
    Server { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Malformed(String),
}

/// Request/response event transport
#[async_trait(?Send)]
pub trait GenerationBackend {
    /// Submit `event` with `data` and return the event's JSON result
    async fn create_event(
        &self,
        event: &str,
        data: Value,
        access_token: Option<&str>,
    ) -> Result<Value, GenerationError>;
}

#[derive(Serialize)]
struct EventRequest<'a> {
    #[serde(rename = "type")]
    event: &'a str,
    data: Value,
    app_id: &'a str,
}

/// HTTP client for the hosted `createEvent` function
pub struct EventApiClient {
    functions_url: String,
    anon_key: String,
    app_id: String,
    client: reqwest::Client,
}

impl EventApiClient {
    pub fn new(functions_url: &str, anon_key: &str, app_id: &str) -> Self {
        Self {
            functions_url: functions_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            app_id: app_id.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl GenerationBackend for EventApiClient {
    async fn create_event(
        &self,
        event: &str,
        data: Value,
        access_token: Option<&str>,
    ) -> Result<Value, GenerationError> {
        let url = format!("{}/createEvent", self.functions_url);
        debug!("Posting {} event to {}", event, url);

        let body = EventRequest {
            event,
            data,
            app_id: &self.app_id,
        };
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token.unwrap_or(&self.anon_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }
}

/// Event payload for an idea request
pub fn ideas_payload(prompt: &str, contract: IdeaContract) -> Value {
    serde_json::json!({
        "prompt": prompt,
        "response_type": contract.response_type(),
    })
}

/// Event payload for an image request
pub fn image_payload(prompt: &str) -> Value {
    serde_json::json!({ "prompt": prompt })
}

/// Decode an idea response. Structural mismatches decode to an empty result
/// and are logged, never returned as errors.
pub fn decode_ideas(contract: IdeaContract, value: Value) -> IdeaResult {
    match contract {
        IdeaContract::Markdown => match value {
            Value::String(text) => IdeaResult::Text(text),
            other => {
                warn!("Expected text ideas, got {}", kind_of(&other));
                IdeaResult::empty(contract)
            }
        },
        IdeaContract::MealList => IdeaResult::List(decode_meals(value)),
    }
}

fn decode_meals(value: Value) -> Vec<String> {
    let value = match value {
        // Some models return the JSON object as a string
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("Meal list response is plain text, not JSON");
                return Vec::new();
            }
        },
        other => other,
    };

    let Some(meals) = value.get("meals") else {
        warn!("Meal list response has no `meals` field");
        return Vec::new();
    };
    let Some(meals) = meals.as_array() else {
        warn!("`meals` is {}, not a list", kind_of(meals));
        return Vec::new();
    };

    let names: Vec<String> = meals
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if names.len() != meals.len() {
        warn!("Dropped {} non-text meal entries", meals.len() - names.len());
    }
    names
}

/// Decode an image response into an image URL
pub fn decode_image(value: Value) -> Result<String, GenerationError> {
    match value {
        Value::String(url) if !url.trim().is_empty() => Ok(url),
        other => Err(GenerationError::Malformed(format!(
            "expected image URL, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
