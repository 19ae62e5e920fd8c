//! Activation gating: which records are eligible for filtering at all.
//!
//! The gate order is fixed: pricing first, then the unconditional expiry gate,
//! then the provider-completeness gate. Expiry applies identically in both
//! pricing modes; provider completeness runs last so it never hides free,
//! unexpired records when incomplete listings are allowed.

use crate::catalog::derive::{derive_models, DerivedModel};
use crate::catalog::raw::RawModel;
use crate::config::ExplorerConfig;
use crate::state::types::{PricingFilter, ProviderMode};
use chrono::{DateTime, NaiveDate, Utc};

/// Select the active subset of the catalog.
pub fn select_active(
    models: &[RawModel],
    provider_mode: ProviderMode,
    pricing_filter: PricingFilter,
    now: DateTime<Utc>,
) -> Vec<DerivedModel> {
    derive_models(models, now)
        .into_iter()
        .filter(|model| {
            if pricing_filter == PricingFilter::Free && !model.is_free {
                return false;
            }

            if !model.is_unexpired {
                return false;
            }

            if provider_mode == ProviderMode::Strict {
                return model.is_provider_ready;
            }

            true
        })
        .collect()
}

/// Whole UTC-midnight days from the reference date to the expiration date.
///
/// Negative for already-expired records. `None` when there is no expiration
/// date or either date stamp fails to parse.
pub fn days_until_expiration(expiration_date: Option<&str>, today: &str) -> Option<i64> {
    let expiration = match expiration_date {
        None | Some("") => return None,
        Some(date) => date,
    };

    let start = NaiveDate::parse_from_str(today, "%Y-%m-%d").ok()?;
    let end = NaiveDate::parse_from_str(expiration, "%Y-%m-%d").ok()?;

    Some((end - start).num_days())
}

/// Check whether an expiration date falls inside the expiring-soon window
/// (today through 30 days out, inclusive).
pub fn is_expiring_soon(expiration_date: Option<&str>, today: &str) -> bool {
    match days_until_expiration(expiration_date, today) {
        Some(days) => (0..=ExplorerConfig::EXPIRING_SOON_WINDOW_DAYS).contains(&days),
        None => false,
    }
}
