//! Bidirectional codec between [`ExplorerState`] and its query-string form.
//!
//! Decoding is total: any parameter that is absent, empty, or outside its
//! allowed domain silently falls back to the field's default. Encoding emits a
//! parameter only when the value differs from that default, so the all-default
//! state serializes to the empty string and every encoded state decodes back
//! bit-identically.

use crate::state::types::{
    ExpiryMode, ExplorerState, ModeratedFilter, PricingFilter, ProviderMode, SortDirection,
    SortKey,
};
use regex::Regex;
use std::borrow::Cow;
use std::str::FromStr;
use std::sync::LazyLock;
use url::form_urlencoded;

/// Date parameters must be exact zero-padded ISO stamps.
static DATE_STAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

type Params<'a> = Vec<(Cow<'a, str>, Cow<'a, str>)>;

fn first<'a>(params: &'a Params<'_>, key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_ref())
}

fn parse_list(value: Option<&str>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_nullable_number(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_enum<T: FromStr + Copy>(value: Option<&str>, fallback: T) -> T {
    value
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(fallback)
}

fn parse_date(value: Option<&str>) -> Option<String> {
    let value = value?;
    DATE_STAMP.is_match(value).then(|| value.to_string())
}

/// Parse a provider mode from the persisted-preference slot (or anywhere else
/// one arrives as a loose string).
pub fn parse_provider_mode(value: Option<&str>) -> Option<ProviderMode> {
    value.and_then(|v| v.parse::<ProviderMode>().ok())
}

/// Decode a query string into explorer state.
///
/// `provider_mode_fallback` fills in the provider mode when the query omits it
/// — the caller resolves it from the persisted preference.
pub fn decode_state(query: &str, provider_mode_fallback: ProviderMode) -> ExplorerState {
    let query = query.strip_prefix('?').unwrap_or(query);
    // First occurrence of a duplicated key wins.
    let params: Params<'_> = form_urlencoded::parse(query.as_bytes()).collect();

    let defaults = ExplorerState::default_with_mode(provider_mode_fallback);

    ExplorerState {
        q: first(&params, "q").unwrap_or_default().to_string(),
        providers: parse_list(first(&params, "provider")),
        input_modalities: parse_list(first(&params, "input")),
        output_modalities: parse_list(first(&params, "output")),
        instruct_types: parse_list(first(&params, "instruct")),
        supported_parameters: parse_list(first(&params, "params")),
        moderated: parse_enum(first(&params, "moderated"), defaults.moderated),
        min_context_length: parse_nullable_number(first(&params, "minCtx")),
        min_max_completion_tokens: parse_nullable_number(first(&params, "minMaxOut")),
        created_from: parse_date(first(&params, "createdFrom")),
        created_to: parse_date(first(&params, "createdTo")),
        expiry_mode: parse_enum(first(&params, "expiryMode"), defaults.expiry_mode),
        pricing_filter: parse_enum(first(&params, "pricing"), defaults.pricing_filter),
        provider_mode: parse_enum(first(&params, "providerMode"), defaults.provider_mode),
        sort_key: parse_enum(first(&params, "sort"), defaults.sort_key),
        sort_direction: parse_enum(first(&params, "dir"), defaults.sort_direction),
    }
}

/// Format a numeric bound the way it round-trips: integers without a decimal
/// point, fractions as-is.
fn format_number(value: f64) -> String {
    value.to_string()
}

/// Encode explorer state as a canonical query string.
///
/// Parameters appear in a fixed order; defaults are omitted, so the default
/// state yields an empty string.
pub fn encode_state(state: &ExplorerState) -> String {
    let defaults = ExplorerState::default();
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.q.is_empty() {
        serializer.append_pair("q", &state.q);
    }

    for (key, values) in [
        ("provider", &state.providers),
        ("input", &state.input_modalities),
        ("output", &state.output_modalities),
        ("instruct", &state.instruct_types),
        ("params", &state.supported_parameters),
    ] {
        if !values.is_empty() {
            serializer.append_pair(key, &values.join(","));
        }
    }

    if state.moderated != defaults.moderated {
        serializer.append_pair("moderated", state.moderated.as_str());
    }

    if let Some(min) = state.min_context_length {
        serializer.append_pair("minCtx", &format_number(min));
    }

    if let Some(min) = state.min_max_completion_tokens {
        serializer.append_pair("minMaxOut", &format_number(min));
    }

    if let Some(from) = state.created_from.as_deref() {
        serializer.append_pair("createdFrom", from);
    }

    if let Some(to) = state.created_to.as_deref() {
        serializer.append_pair("createdTo", to);
    }

    if state.expiry_mode != defaults.expiry_mode {
        serializer.append_pair("expiryMode", state.expiry_mode.as_str());
    }

    if state.pricing_filter != defaults.pricing_filter {
        serializer.append_pair("pricing", state.pricing_filter.as_str());
    }

    if state.provider_mode != defaults.provider_mode {
        serializer.append_pair("providerMode", state.provider_mode.as_str());
    }

    if state.sort_key != defaults.sort_key {
        serializer.append_pair("sort", state.sort_key.as_str());
    }

    if state.sort_direction != defaults.sort_direction {
        serializer.append_pair("dir", state.sort_direction.as_str());
    }

    serializer.finish()
}
