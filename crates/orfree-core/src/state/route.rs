//! Hash-fragment routing: `#/<route>?<query>`.
//!
//! Only the explorer route is reconciled by the store; other routes belong to
//! the host application and pass through untouched.

/// Top-level views addressable from the hash fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Explorer,
    Request,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Explorer => "explorer",
            Route::Request => "request",
        }
    }
}

/// Split a location hash into its route and search part.
///
/// Unknown segments fall back to the explorer route. The search part keeps its
/// leading `?` when non-empty, and extra `?` characters stay in the search.
pub fn parse_hash(hash: &str) -> (Route, String) {
    let stripped = hash.strip_prefix('#').unwrap_or(hash);
    let stripped = stripped.strip_prefix('/').unwrap_or(stripped);

    let (segment, search) = match stripped.split_once('?') {
        Some((segment, rest)) => (segment, format!("?{rest}")),
        None => (stripped, String::new()),
    };

    let route = if segment == "request" {
        Route::Request
    } else {
        Route::Explorer
    };

    (route, search)
}

/// Build a location hash for a route and an optional search part.
pub fn build_hash(route: Route, search: &str) -> String {
    if search.is_empty() {
        format!("#/{}", route.as_str())
    } else {
        let search = search.strip_prefix('?').unwrap_or(search);
        format!("#/{}?{}", route.as_str(), search)
    }
}
