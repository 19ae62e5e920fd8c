//! Integration tests for the full explorer pipeline: registry document in,
//! visible sorted rows out, driven by URL-decoded state.

use chrono::{DateTime, TimeZone, Utc};
use orfree_core::{
    apply_filters, decode_state, derive_models, encode_state, parse_models_document,
    select_active, utc_date_stamp, ExplorerState, PricingFilter, ProviderMode, SortDirection,
    SortKey,
};

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 9, 12, 0, 0).unwrap()
}

/// A small but realistic registry document: free and paid listings, numeric
/// strings, missing provider limits, and an expiring listing.
fn registry_body() -> &'static str {
    r#"{
        "data": [
            {
                "id": "ready",
                "canonical_slug": "vendor/ready",
                "name": "Ready Model",
                "created": 1700000000,
                "pricing": { "prompt": "0", "completion": 0 },
                "context_length": "8192",
                "architecture": {
                    "tokenizer": "Llama3",
                    "input_modalities": ["text"],
                    "output_modalities": ["text"]
                },
                "top_provider": { "context_length": 1024, "max_completion_tokens": 512 },
                "supported_parameters": ["temperature", "top_p"]
            },
            {
                "id": "incomplete",
                "canonical_slug": "vendor/incomplete",
                "name": "Incomplete Model",
                "created": 1710000000,
                "pricing": { "prompt": 0, "completion": 0 },
                "architecture": { "tokenizer": "Qwen", "input_modalities": ["text", "image"] },
                "top_provider": { "context_length": null, "max_completion_tokens": 512 },
                "supported_parameters": ["tools"]
            },
            {
                "id": "paid",
                "canonical_slug": "vendor/paid",
                "name": "Paid Model",
                "created": 1720000000,
                "pricing": { "prompt": "0.000002", "completion": "0.000004" },
                "architecture": { "tokenizer": "Qwen" },
                "top_provider": { "context_length": 32768, "max_completion_tokens": 4096 }
            },
            {
                "id": "expiring",
                "canonical_slug": "vendor/expiring",
                "name": "Expiring Model",
                "created": 1690000000,
                "pricing": { "prompt": 0, "completion": 0 },
                "architecture": { "tokenizer": "Mistral" },
                "top_provider": { "context_length": 4096, "max_completion_tokens": 2048 },
                "expiration_date": "2026-02-20"
            },
            {
                "id": "expired",
                "canonical_slug": "vendor/expired",
                "name": "Expired Model",
                "created": 1680000000,
                "pricing": { "prompt": 0, "completion": 0 },
                "architecture": { "tokenizer": "Mistral" },
                "top_provider": { "context_length": 4096, "max_completion_tokens": 2048 },
                "expiration_date": "2026-01-01"
            }
        ]
    }"#
}

fn ids(models: &[orfree_core::DerivedModel]) -> Vec<&str> {
    models.iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn scenario_a_strict_vs_include_incomplete() {
    let models = parse_models_document(registry_body()).unwrap();
    let models: Vec<_> = models
        .into_iter()
        .filter(|m| m.id == "ready" || m.id == "incomplete")
        .collect();

    let strict = select_active(
        &models,
        ProviderMode::Strict,
        PricingFilter::Free,
        reference(),
    );
    assert_eq!(ids(&strict), ["ready"]);

    let lenient = select_active(
        &models,
        ProviderMode::IncludeIncomplete,
        PricingFilter::Free,
        reference(),
    );
    assert_eq!(ids(&lenient), ["ready", "incomplete"]);
}

#[test]
fn scenario_b_expiring_soon_window() {
    use orfree_core::is_expiring_soon;

    assert!(is_expiring_soon(Some("2026-02-20"), "2026-02-09"));
    assert!(!is_expiring_soon(Some("2026-02-20"), "2026-04-01"));
}

#[test]
fn scenario_c_url_driven_filtering() {
    let models = parse_models_document(
        r#"{
            "data": [
                {
                    "id": "alpha",
                    "canonical_slug": "v/alpha",
                    "name": "Alpha",
                    "created": 1700000000,
                    "pricing": { "prompt": 0, "completion": 0 },
                    "architecture": { "tokenizer": "Llama3", "input_modalities": ["text"] },
                    "top_provider": {},
                    "supported_parameters": ["temperature", "top_p"]
                },
                {
                    "id": "beta",
                    "canonical_slug": "v/beta",
                    "name": "Beta",
                    "created": 1710000000,
                    "pricing": { "prompt": 0, "completion": 0 },
                    "architecture": { "tokenizer": "Qwen", "input_modalities": ["text", "image"] },
                    "top_provider": {},
                    "supported_parameters": ["tools"]
                }
            ]
        }"#,
    )
    .unwrap();

    let state = decode_state(
        "?provider=Qwen&input=image&params=tools",
        ProviderMode::IncludeIncomplete,
    );

    let now = reference();
    let active = select_active(&models, state.provider_mode, state.pricing_filter, now);
    let visible = apply_filters(&active, &state, &utc_date_stamp(now));
    assert_eq!(ids(&visible), ["beta"]);
}

#[test]
fn full_pipeline_from_document_to_rows() {
    let models = parse_models_document(registry_body()).unwrap();
    let now = reference();
    let today = utc_date_stamp(now);

    // Default state: free pricing, include incomplete, sorted by created desc.
    let state = ExplorerState::default();
    let active = select_active(&models, state.provider_mode, state.pricing_filter, now);
    let visible = apply_filters(&active, &state, &today);
    assert_eq!(ids(&visible), ["incomplete", "ready", "expiring"]);

    // Paid listings appear under "all" pricing; the expired one never does.
    let mut state = ExplorerState::default();
    state.pricing_filter = PricingFilter::All;
    state.sort_key = SortKey::Id;
    state.sort_direction = SortDirection::Asc;
    let active = select_active(&models, state.provider_mode, state.pricing_filter, now);
    let visible = apply_filters(&active, &state, &today);
    assert_eq!(ids(&visible), ["expiring", "incomplete", "paid", "ready"]);
}

#[test]
fn activation_monotonicity_over_document() {
    let models = parse_models_document(registry_body()).unwrap();

    for pricing in [PricingFilter::Free, PricingFilter::All] {
        let strict = select_active(&models, ProviderMode::Strict, pricing, reference());
        let lenient = select_active(
            &models,
            ProviderMode::IncludeIncomplete,
            pricing,
            reference(),
        );

        for model in &strict {
            assert!(
                lenient.iter().any(|m| m.id == model.id),
                "strict set must be a subset of include_incomplete"
            );
        }
    }
}

#[test]
fn codec_roundtrip_through_filtering_state() {
    let mut state = ExplorerState::default();
    state.q = "qwen vision".into();
    state.providers = vec!["Qwen".into()];
    state.input_modalities = vec!["image".into(), "text".into()];
    state.min_context_length = Some(8192.0);
    state.pricing_filter = PricingFilter::All;
    state.provider_mode = ProviderMode::Strict;
    state.sort_key = SortKey::Context;
    state.sort_direction = SortDirection::Asc;

    let encoded = encode_state(&state);
    assert_eq!(decode_state(&encoded, ProviderMode::IncludeIncomplete), state);

    // And the empty string is the canonical default both ways.
    assert_eq!(encode_state(&ExplorerState::default()), "");
    assert_eq!(
        decode_state("", ProviderMode::IncludeIncomplete),
        ExplorerState::default()
    );
}

#[test]
fn derived_records_are_reproducible() {
    let models = parse_models_document(registry_body()).unwrap();
    let a = derive_models(&models, reference());
    let b = derive_models(&models, reference());
    assert_eq!(a, b);
}
