//! Explorer state value object and its enumerated settings.

use serde::{Deserialize, Serialize};

/// Provider-completeness mode: require known provider limits, or permit
/// listings with unknown ones. The one setting treated as a durable preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderMode {
    Strict,
    IncludeIncomplete,
}

impl ProviderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderMode::Strict => "strict",
            ProviderMode::IncludeIncomplete => "include_incomplete",
        }
    }
}

impl Default for ProviderMode {
    fn default() -> Self {
        ProviderMode::IncludeIncomplete
    }
}

impl std::str::FromStr for ProviderMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ProviderMode::Strict),
            "include_incomplete" => Ok(ProviderMode::IncludeIncomplete),
            _ => Err(()),
        }
    }
}

/// Pricing mode: free listings only, or the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingFilter {
    Free,
    All,
}

impl PricingFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingFilter::Free => "free",
            PricingFilter::All => "all",
        }
    }
}

impl std::str::FromStr for PricingFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(PricingFilter::Free),
            "all" => Ok(PricingFilter::All),
            _ => Err(()),
        }
    }
}

/// Three-way moderation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeratedFilter {
    All,
    True,
    False,
}

impl ModeratedFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeratedFilter::All => "all",
            ModeratedFilter::True => "true",
            ModeratedFilter::False => "false",
        }
    }
}

impl std::str::FromStr for ModeratedFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ModeratedFilter::All),
            "true" => Ok(ModeratedFilter::True),
            "false" => Ok(ModeratedFilter::False),
            _ => Err(()),
        }
    }
}

/// Three-way expiry filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryMode {
    All,
    NoExpiry,
    ExpiringSoon,
}

impl ExpiryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryMode::All => "all",
            ExpiryMode::NoExpiry => "no-expiry",
            ExpiryMode::ExpiringSoon => "expiring-soon",
        }
    }
}

impl std::str::FromStr for ExpiryMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ExpiryMode::All),
            "no-expiry" => Ok(ExpiryMode::NoExpiry),
            "expiring-soon" => Ok(ExpiryMode::ExpiringSoon),
            _ => Err(()),
        }
    }
}

/// Sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Created,
    Id,
    Name,
    Context,
    MaxCompletion,
    Expiration,
    PromptPrice,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Created => "created",
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Context => "context",
            SortKey::MaxCompletion => "max_completion",
            SortKey::Expiration => "expiration",
            SortKey::PromptPrice => "prompt_price",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(SortKey::Created),
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "context" => Ok(SortKey::Context),
            "max_completion" => Ok(SortKey::MaxCompletion),
            "expiration" => Ok(SortKey::Expiration),
            "prompt_price" => Ok(SortKey::PromptPrice),
            _ => Err(()),
        }
    }
}

/// Sort direction. `Desc` flips the comparator sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// The five multi-valued facet selection sets, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetField {
    Providers,
    InputModalities,
    OutputModalities,
    InstructTypes,
    SupportedParameters,
}

/// The complete filter/sort state of the explorer view.
///
/// Every field has a well-defined default, and the all-default state encodes
/// to an empty query string (see [`crate::state::codec`]). The value is
/// replaced wholesale on every mutation — no partial aliasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerState {
    pub q: String,
    pub providers: Vec<String>,
    pub input_modalities: Vec<String>,
    pub output_modalities: Vec<String>,
    pub instruct_types: Vec<String>,
    pub supported_parameters: Vec<String>,
    pub moderated: ModeratedFilter,
    pub min_context_length: Option<f64>,
    pub min_max_completion_tokens: Option<f64>,
    pub created_from: Option<String>,
    pub created_to: Option<String>,
    pub expiry_mode: ExpiryMode,
    pub pricing_filter: PricingFilter,
    pub provider_mode: ProviderMode,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl ExplorerState {
    /// The default state with an explicit provider mode.
    pub fn default_with_mode(provider_mode: ProviderMode) -> Self {
        ExplorerState {
            q: String::new(),
            providers: Vec::new(),
            input_modalities: Vec::new(),
            output_modalities: Vec::new(),
            instruct_types: Vec::new(),
            supported_parameters: Vec::new(),
            moderated: ModeratedFilter::All,
            min_context_length: None,
            min_max_completion_tokens: None,
            created_from: None,
            created_to: None,
            expiry_mode: ExpiryMode::All,
            pricing_filter: PricingFilter::Free,
            provider_mode,
            sort_key: SortKey::Created,
            sort_direction: SortDirection::Desc,
        }
    }

    /// Shared access to a facet selection set.
    pub fn selection(&self, field: FacetField) -> &Vec<String> {
        match field {
            FacetField::Providers => &self.providers,
            FacetField::InputModalities => &self.input_modalities,
            FacetField::OutputModalities => &self.output_modalities,
            FacetField::InstructTypes => &self.instruct_types,
            FacetField::SupportedParameters => &self.supported_parameters,
        }
    }

    /// Mutable access to a facet selection set.
    pub fn selection_mut(&mut self, field: FacetField) -> &mut Vec<String> {
        match field {
            FacetField::Providers => &mut self.providers,
            FacetField::InputModalities => &mut self.input_modalities,
            FacetField::OutputModalities => &mut self.output_modalities,
            FacetField::InstructTypes => &mut self.instruct_types,
            FacetField::SupportedParameters => &mut self.supported_parameters,
        }
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        ExplorerState::default_with_mode(ProviderMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_string_roundtrip() {
        for key in [
            SortKey::Created,
            SortKey::Id,
            SortKey::Name,
            SortKey::Context,
            SortKey::MaxCompletion,
            SortKey::Expiration,
            SortKey::PromptPrice,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }

        for mode in [ExpiryMode::All, ExpiryMode::NoExpiry, ExpiryMode::ExpiringSoon] {
            assert_eq!(mode.as_str().parse::<ExpiryMode>(), Ok(mode));
        }

        assert_eq!("strict".parse::<ProviderMode>(), Ok(ProviderMode::Strict));
        assert!("lenient".parse::<ProviderMode>().is_err());
    }

    #[test]
    fn test_default_state_values() {
        let state = ExplorerState::default();
        assert_eq!(state.provider_mode, ProviderMode::IncludeIncomplete);
        assert_eq!(state.pricing_filter, PricingFilter::Free);
        assert_eq!(state.sort_key, SortKey::Created);
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert!(state.q.is_empty());
        assert!(state.providers.is_empty());
        assert!(state.min_context_length.is_none());
    }

    #[test]
    fn test_selection_accessors_cover_all_fields() {
        let mut state = ExplorerState::default();
        for field in [
            FacetField::Providers,
            FacetField::InputModalities,
            FacetField::OutputModalities,
            FacetField::InstructTypes,
            FacetField::SupportedParameters,
        ] {
            state.selection_mut(field).push("x".into());
            assert_eq!(state.selection(field), &["x".to_string()]);
        }
    }
}
