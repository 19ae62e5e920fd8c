//! Filter/sort engine over the active record set.
//!
//! All constraints are AND-ed together; within one multi-select facet the
//! selected values are OR-ed (a record matches if it carries any of them).
//! An empty selection set is no constraint at all.

use crate::catalog::activation::is_expiring_soon;
use crate::catalog::derive::DerivedModel;
use crate::catalog::facets::INSTRUCT_TYPE_NONE;
use crate::state::types::{ExpiryMode, ExplorerState, ModeratedFilter, SortDirection, SortKey};
use std::cmp::Ordering;

fn includes_some(selected: &[String], values: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }

    selected.iter().any(|value| values.contains(value))
}

fn matches(model: &DerivedModel, state: &ExplorerState, query: &str, today: &str) -> bool {
    if !query.is_empty() {
        let haystack = format!(
            "{} {} {} {}",
            model.id, model.name, model.canonical_slug, model.description
        )
        .to_lowercase();
        if !haystack.contains(query) {
            return false;
        }
    }

    if !state.providers.is_empty() && !state.providers.contains(&model.tokenizer) {
        return false;
    }

    if !includes_some(&state.input_modalities, &model.input_modalities) {
        return false;
    }

    if !includes_some(&state.output_modalities, &model.output_modalities) {
        return false;
    }

    if !state.instruct_types.is_empty() {
        let instruct_type = model
            .instruct_type
            .as_deref()
            .unwrap_or(INSTRUCT_TYPE_NONE);
        if !state.instruct_types.iter().any(|v| v == instruct_type) {
            return false;
        }
    }

    if !includes_some(&state.supported_parameters, &model.supported_parameters) {
        return false;
    }

    if state.moderated == ModeratedFilter::True && !model.moderated {
        return false;
    }

    if state.moderated == ModeratedFilter::False && model.moderated {
        return false;
    }

    if let Some(min) = state.min_context_length {
        if model.context_length.unwrap_or(0.0) < min {
            return false;
        }
    }

    if let Some(min) = state.min_max_completion_tokens {
        if model.max_completion_tokens.unwrap_or(0.0) < min {
            return false;
        }
    }

    let created_date = model.created_iso.get(..10).unwrap_or(&model.created_iso);

    if let Some(from) = state.created_from.as_deref() {
        if created_date < from {
            return false;
        }
    }

    if let Some(to) = state.created_to.as_deref() {
        if created_date > to {
            return false;
        }
    }

    if state.expiry_mode == ExpiryMode::NoExpiry && model.expiration_date.is_some() {
        return false;
    }

    if state.expiry_mode == ExpiryMode::ExpiringSoon
        && !is_expiring_soon(model.expiration_date.as_deref(), today)
    {
        return false;
    }

    true
}

fn compare_nullable_number(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}

fn compare_nullable_date(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        // Records without an expiration date sort last.
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

fn compare_by_key(key: SortKey, a: &DerivedModel, b: &DerivedModel) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Context => compare_nullable_number(a.context_length, b.context_length),
        SortKey::MaxCompletion => {
            compare_nullable_number(a.max_completion_tokens, b.max_completion_tokens)
        }
        SortKey::Expiration => {
            compare_nullable_date(a.expiration_date.as_deref(), b.expiration_date.as_deref())
        }
        SortKey::PromptPrice => a.prompt_price.total_cmp(&b.prompt_price),
        SortKey::Created => a.created_ms.cmp(&b.created_ms),
    }
}

fn apply_sort(
    mut models: Vec<DerivedModel>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<DerivedModel> {
    // sort_by is stable, so equal-key records keep their input order.
    models.sort_by(|a, b| {
        let ordering = compare_by_key(key, a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    models
}

/// Apply the full filter predicate and sort order to a record set.
///
/// Pure: returns a new ordered vector, leaving the input untouched.
pub fn apply_filters(
    models: &[DerivedModel],
    state: &ExplorerState,
    today: &str,
) -> Vec<DerivedModel> {
    let query = state.q.trim().to_lowercase();

    let filtered: Vec<DerivedModel> = models
        .iter()
        .filter(|model| matches(model, state, &query, today))
        .cloned()
        .collect();

    apply_sort(filtered, state.sort_key, state.sort_direction)
}
