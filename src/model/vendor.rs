// ABOUTME: Vendor enumeration - the closed set of supported model providers.
// ABOUTME: Used as a map key in the registry and parsed from CLI flags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A supported model vendor.
///
/// The set is closed: adding a provider means adding a variant here. The
/// declaration order is the default preference order used when a caller
/// requests a model without naming a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Anthropic,
    Aws,
}

impl Vendor {
    /// All vendors, in default preference order.
    pub fn all() -> &'static [Vendor] {
        &[Vendor::Anthropic, Vendor::Aws]
    }

    /// Lowercase wire form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Anthropic => "anthropic",
            Vendor::Aws => "aws",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Vendor::Anthropic),
            "aws" | "bedrock" => Ok(Vendor::Aws),
            other => Err(ModelError::UnknownVendor(other.to_string())),
        }
    }
}
