//! Description Trimmer
//!
//! Clears the value stored under the designated key (`description` by
//! default) in every mapping reached by the mapping recursion. Keys are never
//! removed and the shape of the tree is left intact.
//!
//! Only mappings are descended into. A sequence is returned as-is, so
//! mappings nested directly inside arrays keep their descriptions.

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::{config::TrimConfig, types::Document};

/// Counters collected during a trim pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimStats {
    /// Number of mappings rebuilt
    pub mappings_visited: usize,

    /// Number of designated-key values replaced with `""`
    pub fields_cleared: usize,
}

#[derive(Debug, Clone)]
pub struct DescriptionTrimmer {
    designated_key: String,
}

impl DescriptionTrimmer {
    pub fn new(config: &TrimConfig) -> Self {
        Self {
            designated_key: config.designated_key.clone(),
        }
    }

    pub fn designated_key(&self) -> &str {
        &self.designated_key
    }

    /// Returns a trimmed copy of `document`.
    pub fn trim(&self, document: &Document) -> Document {
        self.trim_with_stats(document).0
    }

    /// Returns a trimmed copy of `document` together with pass counters.
    #[instrument(skip(self, document), fields(key = %self.designated_key))]
    pub fn trim_with_stats(&self, document: &Document) -> (Document, TrimStats) {
        let mut stats = TrimStats::default();
        let trimmed = self.walk(document, &mut stats);
        debug!(
            "Visited {} mappings, cleared {} fields",
            stats.mappings_visited, stats.fields_cleared
        );
        (trimmed, stats)
    }

    fn walk(&self, value: &Value, stats: &mut TrimStats) -> Value {
        let Value::Object(map) = value else {
            return value.clone();
        };

        stats.mappings_visited += 1;
        let mut trimmed = Map::with_capacity(map.len());
        for (key, child) in map {
            if *key == self.designated_key {
                // Overwritten whatever its type.
                trimmed.insert(key.clone(), Value::String(String::new()));
                stats.fields_cleared += 1;
            } else {
                trimmed.insert(key.clone(), self.walk(child, stats));
            }
        }
        Value::Object(trimmed)
    }
}

impl Default for DescriptionTrimmer {
    fn default() -> Self {
        Self::new(&TrimConfig::default())
    }
}

/// Trims `description` values with the default configuration.
pub fn trim_descriptions(document: &Document) -> Document {
    DescriptionTrimmer::default().trim(document)
}
