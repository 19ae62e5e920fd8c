//! orfree-core - Headless state engine for the OpenRouter free-model explorer.
//!
//! This crate turns raw, loosely-typed registry records into normalized
//! records, filters and sorts them across many independent facets, and keeps
//! the in-memory filter/sort state, the address-bar hash, and one persisted
//! preference mutually consistent without update loops.
//!
//! The host application owns rendering, the registry fetch (with its retry and
//! cache policy), and the real address-bar/storage backends; it hands this
//! engine a finished JSON document and two small ports.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use orfree_core::{apply_filters, parse_models_document, select_active, ExplorerStore};
//!
//! let models = parse_models_document(&body)?;
//! let mut store = ExplorerStore::new(location, preferences);
//!
//! let now = Utc::now();
//! let active = select_active(
//!     &models,
//!     store.state().provider_mode,
//!     store.state().pricing_filter,
//!     now,
//! );
//! let visible = apply_filters(&active, store.state(), &orfree_core::utc_date_stamp(now));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod state;

// Re-export commonly used types
pub use catalog::{
    days_until_expiration, derive_model, derive_models, facet_source, facets, is_expiring_soon,
    parse_models_document, select_active, to_number, utc_date_stamp, DerivedModel, Facets,
    ModelsDocument, NumericLike, RawModel, INSTRUCT_TYPE_NONE,
};
pub use config::{ExplorerConfig, RegistryConfig, TimeConfig};
pub use error::{ExplorerError, Result};
pub use filter::apply_filters;
pub use state::{
    build_hash, decode_state, encode_state, parse_hash, parse_provider_mode, ExpiryMode,
    ExplorerState, ExplorerStore, FacetField, LocationPort, ModeratedFilter, PreferencePort,
    PricingFilter, ProviderMode, Route, SortDirection, SortKey,
};
