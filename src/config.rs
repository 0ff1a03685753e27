//! Configuration for a [`Suggester`](crate::suggest::Suggester).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::cost::{DEFAULT_GROUP_COST, DEFAULT_NON_GROUP_COST, GroupCosts};
use crate::error::{Result, SpellwiseError};
use crate::suggest::SortOrder;

/// Configuration for building a suggester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggesterConfig {
    /// Algorithm pairing a pre-processor with a cost model.
    pub algorithm: Algorithm,
    /// Inclusive distance bound; the algorithm's default when unset.
    pub max_distance: Option<f64>,
    /// Cost for letters sharing a class (Editex and Typox).
    pub group_cost: f64,
    /// Cost for letters with no class in common (Editex and Typox).
    pub non_group_cost: f64,
    /// Keep at most this many suggestions after ranking.
    pub max_suggestions: Option<usize>,
    /// Direction of the distance ranking.
    pub sort_order: SortOrder,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        SuggesterConfig {
            algorithm: Algorithm::default(),
            max_distance: None,
            group_cost: DEFAULT_GROUP_COST,
            non_group_cost: DEFAULT_NON_GROUP_COST,
            max_suggestions: None,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl SuggesterConfig {
    /// Default configuration for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        SuggesterConfig {
            algorithm,
            ..Default::default()
        }
    }

    /// Set the distance bound.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Set the group and non-group costs.
    pub fn with_costs(mut self, group_cost: f64, non_group_cost: f64) -> Self {
        self.group_cost = group_cost;
        self.non_group_cost = non_group_cost;
        self
    }

    /// Limit the number of suggestions returned.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = Some(max_suggestions);
        self
    }

    /// Set the ranking direction.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// The configured bound, or the algorithm's default.
    pub fn effective_max_distance(&self) -> f64 {
        self.max_distance
            .unwrap_or_else(|| self.algorithm.default_max_distance())
    }

    /// Check costs and the distance bound.
    pub fn validate(&self) -> Result<()> {
        GroupCosts::new(self.group_cost, self.non_group_cost)?;
        validate_max_distance(self.effective_max_distance())
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SuggesterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// A bound must be finite and not negative.
pub fn validate_max_distance(max_distance: f64) -> Result<()> {
    if !max_distance.is_finite() || max_distance < 0.0 {
        return Err(SpellwiseError::invalid_config(format!(
            "max_distance must be finite and non-negative, got {max_distance}"
        )));
    }
    Ok(())
}
