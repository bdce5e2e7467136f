use serde::Serialize;

/// Summary of a provider's API specification.
///
/// Derived from the first entry of the version map in the catalog's
/// `{provider}.json` document. Display-only; fields default to empty strings
/// when the document omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecSummary {
    pub version: String,
    pub title: String,
    pub description: String,
}

/// Work items for the fetch worker task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// List all provider identifiers in the catalog.
    Providers,
    /// Fetch one provider's specification document.
    Spec { provider: String },
}

/// Events delivered back to the UI loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Result of a providers fetch. A failed request is delivered as an
    /// empty list; the home screen treats both the same way.
    ProvidersLoaded(Vec<String>),
    /// Result of a spec fetch. `None` means the request failed or the
    /// document had no usable entry.
    SpecLoaded {
        provider: String,
        summary: Option<SpecSummary>,
    },
    Quit,
}
