//! Facet extraction: the distinct-value sets that populate filter choices.

use crate::catalog::derive::DerivedModel;
use crate::state::types::PricingFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Facet token standing in for "no instruct type", selectable like any other
/// instruct-type value.
pub const INSTRUCT_TYPE_NONE: &str = "null";

/// Distinct-value sets per facet, each sorted and duplicate-free.
///
/// The provider facet is the normalized tokenizer name — the registry exposes
/// no true vendor field, so the tokenizer serves as the provider proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub providers: Vec<String>,
    pub input_modalities: Vec<String>,
    pub output_modalities: Vec<String>,
    pub instruct_types: Vec<String>,
    pub supported_parameters: Vec<String>,
}

/// Compute the facet sets over a record subset.
pub fn facets(models: &[DerivedModel]) -> Facets {
    let mut providers = BTreeSet::new();
    let mut input_modalities = BTreeSet::new();
    let mut output_modalities = BTreeSet::new();
    let mut instruct_types = BTreeSet::new();
    let mut supported_parameters = BTreeSet::new();

    for model in models {
        providers.insert(model.tokenizer.clone());

        for modality in &model.input_modalities {
            input_modalities.insert(modality.clone());
        }

        for modality in &model.output_modalities {
            output_modalities.insert(modality.clone());
        }

        instruct_types.insert(
            model
                .instruct_type
                .clone()
                .unwrap_or_else(|| INSTRUCT_TYPE_NONE.to_string()),
        );

        for parameter in &model.supported_parameters {
            supported_parameters.insert(parameter.clone());
        }
    }

    Facets {
        providers: providers.into_iter().collect(),
        input_modalities: input_modalities.into_iter().collect(),
        output_modalities: output_modalities.into_iter().collect(),
        instruct_types: instruct_types.into_iter().collect(),
        supported_parameters: supported_parameters.into_iter().collect(),
    }
}

/// Pick the record subset facet values are computed over.
///
/// Under the "free" pricing mode facets reflect free, unexpired records; under
/// "all" they reflect every unexpired record. Either way the chips show what
/// could become visible under the current pricing mode, independent of the
/// other active filters.
pub fn facet_source(derived: &[DerivedModel], pricing_filter: PricingFilter) -> Vec<DerivedModel> {
    derived
        .iter()
        .filter(|model| match pricing_filter {
            PricingFilter::Free => model.is_free && model.is_unexpired,
            PricingFilter::All => model.is_unexpired,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::derive::derive_models;
    use crate::catalog::raw::{NumericLike, RawArchitecture, RawModel, RawPricing};
    use chrono::{TimeZone, Utc};

    fn model(id: &str, tokenizer: &str, instruct: Option<&str>, inputs: &[&str]) -> RawModel {
        RawModel {
            id: id.into(),
            architecture: RawArchitecture {
                tokenizer: Some(tokenizer.into()),
                instruct_type: instruct.map(Into::into),
                input_modalities: Some(inputs.iter().map(|s| s.to_string()).collect()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_facets_are_sorted_and_deduplicated() {
        let now = Utc.with_ymd_and_hms(2026, 2, 9, 0, 0, 0).unwrap();
        let raw = vec![
            model("b", "Qwen", Some("chatml"), &["text", "image"]),
            model("a", "Llama3", None, &["text"]),
            model("c", "Qwen", Some("chatml"), &["text"]),
        ];
        let derived = derive_models(&raw, now);
        let facets = facets(&derived);

        assert_eq!(facets.providers, ["Llama3", "Qwen"]);
        assert_eq!(facets.input_modalities, ["image", "text"]);
        // Missing instruct type shows up as a selectable sentinel.
        assert_eq!(facets.instruct_types, ["chatml", "null"]);
    }

    #[test]
    fn test_facet_source_tracks_pricing_mode() {
        let now = Utc.with_ymd_and_hms(2026, 2, 9, 0, 0, 0).unwrap();

        let mut free = model("free", "Qwen", None, &[]);
        free.pricing = RawPricing {
            prompt: Some(NumericLike::Number(0.0)),
            completion: Some(NumericLike::Number(0.0)),
            ..Default::default()
        };
        let mut paid = model("paid", "Llama3", None, &[]);
        paid.pricing.prompt = Some(NumericLike::Text("0.00001".into()));
        let mut expired = model("expired", "Mistral", None, &[]);
        expired.expiration_date = Some("2025-01-01".into());

        let derived = derive_models(&[free, paid, expired], now);

        let free_source = facet_source(&derived, PricingFilter::Free);
        assert_eq!(facets(&free_source).providers, ["Qwen"]);

        // "all" pricing widens the source to every unexpired record.
        let all_source = facet_source(&derived, PricingFilter::All);
        assert_eq!(facets(&all_source).providers, ["Llama3", "Qwen"]);
    }
}
