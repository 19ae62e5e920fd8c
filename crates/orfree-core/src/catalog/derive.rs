//! Normalizer: raw registry records to canonical derived records.
//!
//! All of the registry's duck typing is absorbed here. Every other component
//! operates only on [`DerivedModel`], which has fixed types and documented
//! defaults. Derivation is a pure function of `(raw record, reference instant)`
//! — it holds no state and is cheap enough to recompute on every call.

use crate::catalog::raw::{NumericLike, RawModel};
use crate::config::TimeConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A raw record with every field coerced to a fixed type, plus derived flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedModel {
    /// Read-only copy of the raw record, kept for display and export.
    pub raw: RawModel,
    pub id: String,
    pub canonical_slug: String,
    pub name: String,
    pub description: String,
    /// Creation time as an absolute millisecond instant.
    pub created_ms: i64,
    /// Creation time as a millisecond-precision ISO-8601 string.
    pub created_iso: String,
    /// Prompt price per unit; unparseable pricing resolves to 0.0 here, but
    /// only after the free-check has already run on the raw value.
    pub prompt_price: f64,
    pub completion_price: f64,
    pub context_length: Option<f64>,
    pub max_completion_tokens: Option<f64>,
    /// Tokenizer name, doubling as the provider facet. Defaults to "Unknown".
    pub tokenizer: String,
    pub instruct_type: Option<String>,
    pub modality: Option<String>,
    pub input_modalities: Vec<String>,
    pub output_modalities: Vec<String>,
    pub supported_parameters: Vec<String>,
    pub expiration_date: Option<String>,
    pub moderated: bool,
    /// Both prompt and completion prices coerce to exactly zero.
    pub is_free: bool,
    /// No expiration date, or expiration date on/after the reference date.
    pub is_unexpired: bool,
    /// Provider reported both a context length and a completion-token limit.
    pub is_provider_ready: bool,
}

/// Coerce a loosely-typed registry value to a finite number.
///
/// A value counts as numeric when it is a finite numeric literal or a
/// non-empty trimmed string that parses as a finite float. Everything else is
/// `None`, and downstream fields resolve it to null or zero as documented.
pub fn to_number(value: &NumericLike) -> Option<f64> {
    match value {
        NumericLike::Number(n) => n.is_finite().then_some(*n),
        NumericLike::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        NumericLike::Other(_) => None,
    }
}

fn coerce(value: Option<&NumericLike>) -> Option<f64> {
    value.and_then(to_number)
}

/// Format a UTC instant as a zero-padded `YYYY-MM-DD` date stamp.
pub fn utc_date_stamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Resolve the ambiguous-unit creation timestamp to milliseconds.
///
/// Values above [`TimeConfig::UNIX_MS_THRESHOLD`] are taken as milliseconds
/// already; anything else is seconds. A missing or non-finite timestamp falls
/// back to the reference instant (documented fallback, not a failure).
fn unix_to_ms(created: Option<f64>, now: DateTime<Utc>) -> i64 {
    match created {
        Some(value) if value.is_finite() => {
            if value > TimeConfig::UNIX_MS_THRESHOLD {
                value as i64
            } else {
                (value * 1000.0) as i64
            }
        }
        _ => now.timestamp_millis(),
    }
}

fn iso_from_ms(created_ms: i64, now: DateTime<Utc>) -> String {
    DateTime::<Utc>::from_timestamp_millis(created_ms)
        .unwrap_or(now)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Check whether both unit prices coerce to exactly zero.
///
/// Garbled pricing fails coercion and therefore classifies the record as
/// priced, never spuriously free.
pub fn is_free(raw: &RawModel) -> bool {
    coerce(raw.pricing.prompt.as_ref()) == Some(0.0)
        && coerce(raw.pricing.completion.as_ref()) == Some(0.0)
}

/// Check the expiration date against a `YYYY-MM-DD` reference stamp.
///
/// This is a lexicographic comparison, correct only because both sides are
/// zero-padded ISO date stamps. Absent expiration means unexpired.
pub fn is_unexpired(raw: &RawModel, today: &str) -> bool {
    match raw.expiration_date.as_deref() {
        None | Some("") => true,
        Some(expiration) => expiration >= today,
    }
}

/// Check whether the top provider reported both limits, regardless of their
/// numeric validity.
pub fn is_provider_ready(raw: &RawModel) -> bool {
    raw.top_provider.context_length.is_some() && raw.top_provider.max_completion_tokens.is_some()
}

/// Normalize one raw record against the given reference instant.
pub fn derive_model(raw: &RawModel, now: DateTime<Utc>) -> DerivedModel {
    let today = utc_date_stamp(now);
    let created_ms = unix_to_ms(coerce(raw.created.as_ref()), now);

    DerivedModel {
        id: raw.id.clone(),
        canonical_slug: raw.canonical_slug.clone(),
        name: raw.name.clone(),
        description: raw.description.clone().unwrap_or_default(),
        created_ms,
        created_iso: iso_from_ms(created_ms, now),
        prompt_price: coerce(raw.pricing.prompt.as_ref()).unwrap_or(0.0),
        completion_price: coerce(raw.pricing.completion.as_ref()).unwrap_or(0.0),
        context_length: coerce(raw.context_length.as_ref()),
        max_completion_tokens: coerce(raw.top_provider.max_completion_tokens.as_ref()),
        tokenizer: raw
            .architecture
            .tokenizer
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        instruct_type: raw.architecture.instruct_type.clone(),
        modality: raw.architecture.modality.clone(),
        input_modalities: raw.architecture.input_modalities.clone().unwrap_or_default(),
        output_modalities: raw
            .architecture
            .output_modalities
            .clone()
            .unwrap_or_default(),
        supported_parameters: raw.supported_parameters.clone().unwrap_or_default(),
        expiration_date: raw.expiration_date.clone(),
        moderated: raw.top_provider.is_moderated.unwrap_or(false),
        is_free: is_free(raw),
        is_unexpired: is_unexpired(raw, &today),
        is_provider_ready: is_provider_ready(raw),
        raw: raw.clone(),
    }
}

/// Normalize a whole record set.
pub fn derive_models(models: &[RawModel], now: DateTime<Utc>) -> Vec<DerivedModel> {
    models.iter().map(|raw| derive_model(raw, now)).collect()
}
