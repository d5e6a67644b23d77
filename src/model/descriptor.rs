// ABOUTME: Model descriptor - one vendor's variant of a canonical model.
// ABOUTME: Immutable value object; validated at construction and registration.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ModelCosts, Vendor};
use crate::error::ModelError;

/// A capability tag a model variant may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Vision,
    MessageBatches,
    ToolUse,
    Streaming,
}

/// One vendor's variant of a model.
///
/// The canonical name is stable across vendors offering "the same" model
/// (e.g. `claude-3-haiku-20240307`); the vendor model id is what that
/// vendor's API expects on the wire. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub canonical_name: String,
    pub vendor: Vendor,
    pub vendor_model_id: String,
    pub max_input_tokens: u32,
    pub max_output_tokens: u32,
    pub costs: ModelCosts,
    pub capabilities: BTreeSet<Capability>,
    pub description: String,
}

impl ModelDescriptor {
    /// Check the descriptor invariants.
    ///
    /// Fails with `InvalidSpec` when a name or id is empty, a token limit is
    /// zero, or the cost descriptor is invalid.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.canonical_name.is_empty() {
            return Err(ModelError::InvalidSpec(
                "canonical name cannot be empty".to_string(),
            ));
        }
        if self.vendor_model_id.is_empty() {
            return Err(ModelError::InvalidSpec(format!(
                "vendor model id cannot be empty for '{}'",
                self.canonical_name
            )));
        }
        if self.max_input_tokens == 0 {
            return Err(ModelError::InvalidSpec(format!(
                "max input tokens must be positive for '{}'",
                self.canonical_name
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(ModelError::InvalidSpec(format!(
                "max output tokens must be positive for '{}'",
                self.canonical_name
            )));
        }
        self.costs.validate()
    }

    /// Whether this variant carries a capability tag.
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Estimate the USD cost of a request against this variant's pricing.
    pub fn estimate_cost(&self, input_tokens: i64, output_tokens: i64) -> Result<Decimal, ModelError> {
        self.costs.estimate_cost(input_tokens, output_tokens)
    }
}
