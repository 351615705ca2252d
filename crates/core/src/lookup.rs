use serde::{Deserialize, Serialize};

/// The outcome of a site-data lookup.
///
/// Distinguishes a canned answer from an identifier the mock data set does not
/// know about, so the phrasing of the "unknown" case is decided by the caller
/// (the tool layer) rather than baked into the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupOutcome {
    /// A fixed answer exists for the query.
    Known(String),
    /// The identifier is not in the data set. Carries the caller-supplied
    /// subject verbatim so fallback phrasing can embed it unchanged.
    Unknown { subject: String },
}

impl LookupOutcome {
    /// Renders the outcome to the text handed back to the language model.
    ///
    /// `fallback` receives the unknown subject and produces the per-tool
    /// fallback sentence. An unknown identifier is not an error condition.
    pub fn render(self, fallback: impl FnOnce(&str) -> String) -> String {
        match self {
            LookupOutcome::Known(text) => text,
            LookupOutcome::Unknown { subject } => fallback(&subject),
        }
    }

    /// Returns true if the lookup found a canned answer.
    pub fn is_known(&self) -> bool {
        matches!(self, LookupOutcome::Known(_))
    }
}
