//! Application state.

use std::sync::Arc;

use newsprobe_core::Analyzer;

/// Application state shared across handlers.
///
/// The analyzer is immutable after startup, so handlers can run fully in
/// parallel without locking.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer: Arc::new(analyzer) }
    }
}
