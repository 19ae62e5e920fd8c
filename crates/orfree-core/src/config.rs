//! Centralized configuration constants for the explorer core.
//!
//! Groups the fixed parameters of the state engine: the registry endpoint the
//! host's fetch collaborator talks to, the persisted-preference slot name, and
//! the time thresholds used by normalization and expiry filtering.

/// Remote registry configuration.
///
/// The core performs no network I/O itself; the host fetches this URL and hands
/// the finished JSON document to [`crate::catalog::parse_models_document`].
pub struct RegistryConfig;

impl RegistryConfig {
    pub const MODELS_URL: &'static str = "https://openrouter.ai/api/v1/models";
}

/// Explorer state-engine configuration.
pub struct ExplorerConfig;

impl ExplorerConfig {
    /// Named slot for the one persisted preference (provider-completeness mode).
    pub const PROVIDER_MODE_STORAGE_KEY: &'static str = "orfree.providerMode";

    /// Upper bound, in whole UTC days, for the "expiring soon" window.
    pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;
}

/// Time-handling configuration.
pub struct TimeConfig;

impl TimeConfig {
    pub const MS_PER_DAY: i64 = 86_400_000;

    /// Raw creation timestamps above this are already in milliseconds; at or
    /// below it they are unix seconds. The registry currently returns seconds.
    pub const UNIX_MS_THRESHOLD: f64 = 1e12;
}
