//! Explorer store: owns the filter/sort state and keeps it consistent with
//! the address-bar hash and the persisted provider-mode preference.
//!
//! Three surfaces co-mutate — in-memory state, the location hash, and the one
//! preference slot. The store is the only writer of the latter two, and a
//! one-shot self-write guard keeps a store-initiated hash write from being
//! reinterpreted as external navigation, which would otherwise loop forever.

use crate::config::ExplorerConfig;
use crate::state::codec::{decode_state, encode_state, parse_provider_mode};
use crate::state::route::{build_hash, parse_hash, Route};
use crate::state::types::{ExplorerState, FacetField, ProviderMode, SortDirection, SortKey};
use tracing::{debug, trace};

/// Address-bar access, injected so the engine can run against in-memory fakes.
pub trait LocationPort {
    /// Current hash fragment, including the leading `#` when present.
    fn hash(&self) -> String;

    /// Replace the hash without adding a history entry.
    fn replace_hash(&self, hash: &str);
}

/// Persistent preference access. Stores exactly one scalar slot.
pub trait PreferencePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Owns the explorer state and reconciles it across surfaces.
pub struct ExplorerStore {
    state: ExplorerState,
    location: Box<dyn LocationPort>,
    preferences: Box<dyn PreferencePort>,
    /// Exact hash of the last self-initiated write, consumed by the next
    /// externally observed change.
    self_write: Option<String>,
}

impl ExplorerStore {
    /// Build the store from the current location and stored preference.
    ///
    /// Resolution order for the provider mode: URL parameter, then persisted
    /// preference, then the hard default. Everything else resolves from the
    /// URL with hard defaults. Ends with one outward sync so the address bar
    /// shows the canonical encoding from the start.
    pub fn new(location: Box<dyn LocationPort>, preferences: Box<dyn PreferencePort>) -> Self {
        let (route, search) = parse_hash(&location.hash());
        let search = if route == Route::Explorer {
            search
        } else {
            String::new()
        };

        let fallback = parse_provider_mode(
            preferences
                .get(ExplorerConfig::PROVIDER_MODE_STORAGE_KEY)
                .as_deref(),
        )
        .unwrap_or_default();

        let state = decode_state(&search, fallback);

        let mut store = ExplorerStore {
            state,
            location,
            preferences,
            self_write: None,
        };
        store.sync_external();
        store
    }

    /// The current state. Mutations go through the store's operations; the
    /// state value itself is replaced wholesale on every change.
    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    /// Adopt an externally observed hash change (back/forward navigation or a
    /// pasted link).
    ///
    /// Consumes the self-write guard first: if the observed hash is exactly
    /// what the store just wrote, the event is the echo of that write and is
    /// dropped, breaking the state → URL → state cycle.
    pub fn handle_hash_change(&mut self) {
        let observed = self.location.hash();

        if let Some(written) = self.self_write.take() {
            if written == observed {
                trace!("ignoring echo of self-initiated hash write");
                return;
            }
        }

        let (route, search) = parse_hash(&observed);
        if route != Route::Explorer {
            return;
        }

        let fallback = self.stored_provider_mode().unwrap_or_default();
        debug!(search = %search, "adopting external hash change");
        self.state = decode_state(&search, fallback);
        self.sync_external();
    }

    /// Apply a partial update to a copy of the state, then commit it.
    pub fn update(&mut self, apply: impl FnOnce(&mut ExplorerState)) {
        let mut next = self.state.clone();
        apply(&mut next);
        self.commit(next);
    }

    /// Add or remove one value in a facet selection set, keeping the set
    /// lexicographically sorted.
    pub fn toggle_facet_value(&mut self, field: FacetField, value: &str) {
        let mut next = self.state.clone();
        let selection = next.selection_mut(field);

        if let Some(position) = selection.iter().position(|v| v == value) {
            selection.remove(position);
        } else {
            selection.push(value.to_string());
        }
        selection.sort();

        self.commit(next);
    }

    /// Reset every filter to its default, preserving the provider mode — the
    /// one setting that is a durable preference rather than a transient filter.
    pub fn clear_all(&mut self) {
        let provider_mode = self.state.provider_mode;
        self.commit(ExplorerState::default_with_mode(provider_mode));
    }

    pub fn set_provider_mode(&mut self, provider_mode: ProviderMode) {
        self.update(|state| state.provider_mode = provider_mode);
    }

    /// Change the sort key; the direction keeps its previous value when not
    /// given.
    pub fn set_sort(&mut self, sort_key: SortKey, sort_direction: Option<SortDirection>) {
        self.update(|state| {
            state.sort_key = sort_key;
            if let Some(direction) = sort_direction {
                state.sort_direction = direction;
            }
        });
    }

    fn commit(&mut self, next: ExplorerState) {
        self.state = next;
        self.sync_external();
    }

    /// Propagate state outward: rewrite the hash when it differs from the
    /// canonical encoding, and always persist the provider mode.
    fn sync_external(&mut self) {
        let current = self.location.hash();
        let (route, _) = parse_hash(&current);
        if route != Route::Explorer {
            return;
        }

        let search = encode_state(&self.state);
        let next_hash = build_hash(Route::Explorer, &search);

        if current != next_hash {
            debug!(hash = %next_hash, "rewriting address hash");
            self.self_write = Some(next_hash.clone());
            self.location.replace_hash(&next_hash);
        }

        self.preferences.set(
            ExplorerConfig::PROVIDER_MODE_STORAGE_KEY,
            self.state.provider_mode.as_str(),
        );
    }

    fn stored_provider_mode(&self) -> Option<ProviderMode> {
        parse_provider_mode(
            self.preferences
                .get(ExplorerConfig::PROVIDER_MODE_STORAGE_KEY)
                .as_deref(),
        )
    }
}
