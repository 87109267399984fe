//! Gemini API recipe source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RecipeError, RecipeSource, parse_recipe_json, prompts};
use crate::recipe::Recipe;

/// Base endpoint for the `generateContent` API.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// A recipe source backed by the Gemini API and a single API key.
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiClient {
    // The API key never appears in debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client for the given API key using the default model.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, prompts::MODEL_ID.to_string())
    }

    /// Creates a client for the given API key and model identifier.
    #[must_use]
    pub fn with_model(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.model)
    }
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
    response_schema: Value,
}

/// Response body for `generateContent` (only the fields we read).
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Builds the request body for a dish.
///
/// Separated from the transport so tests can assert the exact contract
/// without a network.
fn build_request(dish_name: &str) -> GenerateRequest {
    GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: Some(prompts::SYSTEM_INSTRUCTION.to_string()),
            }],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(prompts::build_user_prompt(dish_name)),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: prompts::TEMPERATURE,
            response_mime_type: "application/json",
            response_schema: prompts::response_schema(),
        },
    }
}

/// Concatenates the text parts of the first candidate.
fn extract_text(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

#[async_trait]
impl RecipeSource for GeminiClient {
    async fn generate(&self, dish_name: &str) -> Result<Recipe, RecipeError> {
        let request = build_request(dish_name);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecipeError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RecipeError::RequestFailed(e.to_string()))?;

        if !(200..300).contains(&status) {
            // Prefer the API's own message when the error body is parsable.
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map_or(body, |e| e.error.message);
            return Err(RecipeError::Api { status, message });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| RecipeError::Parse(e.to_string()))?;

        let text = extract_text(parsed);
        parse_recipe_json(&text)
    }

    fn source_name(&self) -> &'static str {
        "gemini"
    }
}
