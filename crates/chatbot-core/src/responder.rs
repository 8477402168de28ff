//! Maps raw user input to a reply.

use std::sync::Arc;

use crate::responses::ResponseTable;

/// Reply used when no trigger matches.
pub const FALLBACK_REPLY: &str = "Je ne comprends pas. / I don't understand. Type 'aide' or 'help'.";

/// Rule-based responder over a [`ResponseTable`].
///
/// Input is lowercased and nothing else: no trimming, no punctuation
/// stripping. `respond` is pure.
#[derive(Debug, Clone)]
pub struct Responder {
    table: Arc<ResponseTable>,
}

impl Responder {
    /// Create a responder over a custom table.
    pub fn new(table: Arc<ResponseTable>) -> Self {
        Self { table }
    }

    /// The table this responder looks replies up in.
    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    /// Reply to `raw_input`, falling back to [`FALLBACK_REPLY`].
    pub fn respond(&self, raw_input: &str) -> String {
        let key = raw_input.to_lowercase();
        self.table
            .lookup(&key)
            .unwrap_or(FALLBACK_REPLY)
            .to_string()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Arc::new(ResponseTable::builtin().clone()))
    }
}
