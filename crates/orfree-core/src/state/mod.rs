//! Explorer state: the value object, its query-string codec, hash routing,
//! and the reconciling store.

pub mod codec;
pub mod route;
pub mod store;
pub mod types;

pub use codec::{decode_state, encode_state, parse_provider_mode};
pub use route::{build_hash, parse_hash, Route};
pub use store::{ExplorerStore, LocationPort, PreferencePort};
pub use types::{
    ExpiryMode, ExplorerState, FacetField, ModeratedFilter, PricingFilter, ProviderMode,
    SortDirection, SortKey,
};
