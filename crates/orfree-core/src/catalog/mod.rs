//! Catalog pipeline: raw registry records, normalization, activation gating,
//! and facet extraction.

pub mod activation;
pub mod derive;
pub mod facets;
pub mod raw;

pub use activation::{days_until_expiration, is_expiring_soon, select_active};
pub use derive::{derive_model, derive_models, to_number, utc_date_stamp, DerivedModel};
pub use facets::{facet_source, facets, Facets, INSTRUCT_TYPE_NONE};
pub use raw::{models_from_value, parse_models_document, ModelsDocument, NumericLike, RawModel};
