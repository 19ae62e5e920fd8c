//! Untrusted registry document shapes.
//!
//! These types mirror the registry's wire format exactly, including its loose
//! typing: numeric fields may arrive as numbers, as numeric strings, or as
//! arbitrary junk, and almost everything may be absent. Deserialization is
//! deliberately total over that looseness — a record never fails to parse
//! because one field has a surprising type. Only the document envelope itself
//! (a JSON object with a `data` array) is validated, as a boundary error.

use crate::error::{ExplorerError, Result};
use serde::{Deserialize, Serialize};

/// A value the registry types as a number but may deliver as anything.
///
/// Coercion to an actual number happens in [`crate::catalog::to_number`]; the
/// `Other` arm soaks up non-numeric junk so record deserialization stays total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericLike {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Per-unit pricing map. Values are USD per token/request/unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPricing {
    #[serde(default)]
    pub prompt: Option<NumericLike>,
    #[serde(default)]
    pub completion: Option<NumericLike>,
    #[serde(default)]
    pub request: Option<NumericLike>,
    #[serde(default)]
    pub image: Option<NumericLike>,
    #[serde(default)]
    pub image_token: Option<NumericLike>,
    #[serde(default)]
    pub image_output: Option<NumericLike>,
    #[serde(default)]
    pub audio: Option<NumericLike>,
    #[serde(default)]
    pub audio_output: Option<NumericLike>,
    #[serde(default)]
    pub input_audio_cache: Option<NumericLike>,
    #[serde(default)]
    pub web_search: Option<NumericLike>,
    #[serde(default)]
    pub internal_reasoning: Option<NumericLike>,
    #[serde(default)]
    pub input_cache_read: Option<NumericLike>,
    #[serde(default)]
    pub input_cache_write: Option<NumericLike>,
    #[serde(default)]
    pub discount: Option<NumericLike>,
}

/// Architecture block: tokenizer, instruct type, and modality descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArchitecture {
    #[serde(default)]
    pub tokenizer: Option<String>,
    #[serde(default)]
    pub instruct_type: Option<String>,
    #[serde(default)]
    pub modality: Option<String>,
    #[serde(default)]
    pub input_modalities: Option<Vec<String>>,
    #[serde(default)]
    pub output_modalities: Option<Vec<String>>,
}

/// Top-provider block. Null numeric fields mean "unknown", not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTopProvider {
    #[serde(default)]
    pub context_length: Option<NumericLike>,
    #[serde(default)]
    pub max_completion_tokens: Option<NumericLike>,
    #[serde(default)]
    pub is_moderated: Option<bool>,
}

/// Per-request token limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPerRequestLimits {
    #[serde(default)]
    pub prompt_tokens: Option<NumericLike>,
    #[serde(default)]
    pub completion_tokens: Option<NumericLike>,
}

/// Default sampling parameters reported by the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDefaultParameters {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub top_p: Option<f64>,
    #[serde(default)]
    pub frequency_penalty: Option<f64>,
}

/// One raw model listing as delivered by the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub canonical_slug: String,
    #[serde(default)]
    pub hugging_face_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Unix timestamp with an ambiguous unit (seconds or milliseconds).
    #[serde(default)]
    pub created: Option<NumericLike>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pricing: RawPricing,
    #[serde(default)]
    pub context_length: Option<NumericLike>,
    #[serde(default)]
    pub architecture: RawArchitecture,
    #[serde(default)]
    pub top_provider: RawTopProvider,
    #[serde(default)]
    pub per_request_limits: Option<RawPerRequestLimits>,
    #[serde(default)]
    pub supported_parameters: Option<Vec<String>>,
    #[serde(default)]
    pub default_parameters: Option<RawDefaultParameters>,
    /// ISO date stamp (`YYYY-MM-DD`) after which the listing is withdrawn.
    #[serde(default)]
    pub expiration_date: Option<String>,
}

/// Registry response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsDocument {
    pub data: Vec<RawModel>,
}

/// Extract the model list from an already-parsed registry payload.
pub fn models_from_value(payload: &serde_json::Value) -> Result<Vec<RawModel>> {
    let Some(object) = payload.as_object() else {
        return Err(ExplorerError::document("registry payload is not an object"));
    };

    let Some(data) = object.get("data").and_then(|v| v.as_array()) else {
        return Err(ExplorerError::document(
            "registry payload missing model list",
        ));
    };

    data.iter()
        .map(|value| serde_json::from_value::<RawModel>(value.clone()).map_err(Into::into))
        .collect()
}

/// Parse a raw registry response body into model records.
///
/// Invalid JSON and a malformed envelope are boundary errors (retryable by the
/// host); loosely-typed field values inside records parse fine and are coerced
/// later by the normalizer.
pub fn parse_models_document(body: &str) -> Result<Vec<RawModel>> {
    let payload: serde_json::Value = serde_json::from_str(body)?;
    models_from_value(&payload)
}
