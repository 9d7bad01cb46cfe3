//! Comparison configuration types
//!
//! This module defines the small amount of configuration the comparison
//! engine accepts. Presentation settings live in the application layer.

use serde::{Deserialize, Serialize};

/// Configuration for a comparison run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Optional: only keep arrivals captured on these sources
    #[serde(default)]
    pub source_filter: Option<Vec<String>>,

    /// Optional: only keep arrivals carrying these frame identifiers
    #[serde(default)]
    pub id_filter: Option<Vec<u32>>,
}

impl CompareConfig {
    /// Create a new configuration that accepts every arrival
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set source filter
    pub fn with_source_filter<S: Into<String>>(mut self, sources: impl IntoIterator<Item = S>) -> Self {
        self.source_filter = Some(sources.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method: set identifier filter
    pub fn with_id_filter(mut self, ids: Vec<u32>) -> Self {
        self.id_filter = Some(ids);
        self
    }

    /// Check if a capture source should be processed
    pub fn should_process_source(&self, source: &str) -> bool {
        match &self.source_filter {
            Some(sources) => sources.iter().any(|s| s == source),
            None => true,
        }
    }

    /// Check if a frame identifier should be processed
    pub fn should_process_id(&self, id: u32) -> bool {
        match &self.id_filter {
            Some(ids) => ids.contains(&id),
            None => true,
        }
    }

    /// Check if an arrival should be processed based on filters
    pub fn should_process(&self, source: &str, id: u32) -> bool {
        self.should_process_source(source) && self.should_process_id(id)
    }
}
