// ABOUTME: Implements the ModelRegistry - a thread-safe two-level catalog
// ABOUTME: mapping canonical model names to per-vendor descriptors.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;

use super::{builtin_models, ModelDescriptor, Vendor};
use crate::error::ModelError;

/// A thread-safe registry of model descriptors.
///
/// State is a two-level map: canonical name first, vendor second. The levels
/// are deliberately separate - a flat `name` key loses vendors that share a
/// canonical name, and a flat `vendor:name` key forces every caller to know
/// vendor-qualified keys. Both levels mutate under one lock acquisition, so
/// a half-applied insertion is never observable.
pub struct ModelRegistry {
    models: Arc<RwLock<HashMap<String, HashMap<Vendor, ModelDescriptor>>>>,
    preference: Vec<Vendor>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelRegistry {
    /// Create a new empty registry with the default vendor preference order.
    pub fn new() -> Self {
        Self {
            models: Arc::new(RwLock::new(HashMap::new())),
            preference: Vendor::all().to_vec(),
        }
    }

    /// Create a registry pre-populated with every builtin model variant.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for model in builtin_models() {
            // Factory descriptors always pass validation.
            let registered = registry.register(model);
            debug_assert!(registered.is_ok());
        }
        registry
    }

    /// Replace the vendor preference order used when no vendor is requested.
    pub fn with_vendor_preference(mut self, preference: Vec<Vendor>) -> Self {
        self.preference = preference;
        self
    }

    /// Register a model variant.
    ///
    /// Inserts at `[canonical_name][vendor]`, overwriting only that vendor's
    /// slot - other vendors registered under the same canonical name are
    /// never touched. Idempotent for identical descriptors. Fails with
    /// `InvalidSpec` if the descriptor does not validate; a failed
    /// registration leaves the registry unchanged.
    pub fn register(&self, model: ModelDescriptor) -> Result<(), ModelError> {
        model.validate()?;
        let mut models = self.models.write();
        models
            .entry(model.canonical_name.clone())
            .or_default()
            .insert(model.vendor, model);
        Ok(())
    }

    /// Look up a model by canonical name.
    ///
    /// With a vendor, returns that exact variant: `NotFound` when the name
    /// is unknown, `VendorNotAvailable` when the name is known but that
    /// vendor has no variant. Without a vendor, applies the preference
    /// order: the first preferred vendor present wins, else the only
    /// registered vendor.
    pub fn get_model(&self, name: &str, vendor: Option<Vendor>) -> Result<ModelDescriptor, ModelError> {
        let models = self.models.read();
        let variants = models
            .get(name)
            .ok_or_else(|| ModelError::NotFound(name.to_string()))?;

        match vendor {
            Some(wanted) => variants.get(&wanted).cloned().ok_or_else(|| {
                ModelError::vendor_not_available(name, Some(wanted), sorted_vendors(variants))
            }),
            None => self.pick_default(name, variants),
        }
    }

    /// Resolve a model identifier to its vendor-specific wire id.
    ///
    /// Accepts a canonical name, or an id that is already the wire id of a
    /// registered variant (which resolves to itself). Failure modes match
    /// `get_model`.
    pub fn resolve_model_id(&self, name: &str, vendor: Option<Vendor>) -> Result<String, ModelError> {
        match self.get_model(name, vendor) {
            Ok(model) => Ok(model.vendor_model_id),
            Err(err @ ModelError::NotFound(_)) => {
                // Not a canonical name; check for a direct vendor id match.
                let models = self.models.read();
                models
                    .values()
                    .flat_map(|variants| variants.values())
                    .find(|m| {
                        m.vendor_model_id == name
                            && vendor.is_none_or(|wanted| m.vendor == wanted)
                    })
                    .map(|m| m.vendor_model_id.clone())
                    .ok_or(err)
            }
            Err(err) => Err(err),
        }
    }

    /// The vendors offering a canonical name.
    ///
    /// An unknown name is `NotFound`, never an empty set.
    pub fn list_vendors(&self, name: &str) -> Result<BTreeSet<Vendor>, ModelError> {
        let models = self.models.read();
        models
            .get(name)
            .map(|variants| variants.keys().copied().collect())
            .ok_or_else(|| ModelError::NotFound(name.to_string()))
    }

    /// Backward-compatible flattened view: one descriptor per canonical
    /// name, chosen by the vendor preference order.
    ///
    /// The returned map holds cloned descriptors - a derived projection,
    /// never a second source of truth. Mutating it does not touch the
    /// registry.
    pub fn available_models(&self) -> HashMap<String, ModelDescriptor> {
        let models = self.models.read();
        models
            .iter()
            .filter_map(|(name, variants)| {
                self.pick_default(name, variants)
                    .ok()
                    .map(|model| (name.clone(), model))
            })
            .collect()
    }

    /// List all canonical names, sorted alphabetically.
    pub fn list_models(&self) -> Vec<String> {
        let models = self.models.read();
        let mut names: Vec<_> = models.keys().cloned().collect();
        names.sort();
        names
    }

    /// Whether a canonical name is registered.
    pub fn contains(&self, name: &str) -> bool {
        let models = self.models.read();
        models.contains_key(name)
    }

    /// The number of registered canonical names.
    pub fn count(&self) -> usize {
        let models = self.models.read();
        models.len()
    }

    /// Apply the default-vendor policy to one name's variants.
    fn pick_default(
        &self,
        name: &str,
        variants: &HashMap<Vendor, ModelDescriptor>,
    ) -> Result<ModelDescriptor, ModelError> {
        for vendor in &self.preference {
            if let Some(model) = variants.get(vendor) {
                return Ok(model.clone());
            }
        }
        if variants.len() == 1 {
            if let Some(model) = variants.values().next() {
                return Ok(model.clone());
            }
        }
        Err(ModelError::vendor_not_available(
            name,
            None,
            sorted_vendors(variants),
        ))
    }
}

impl Clone for ModelRegistry {
    fn clone(&self) -> Self {
        Self {
            models: Arc::clone(&self.models),
            preference: self.preference.clone(),
        }
    }
}

fn sorted_vendors(variants: &HashMap<Vendor, ModelDescriptor>) -> Vec<Vendor> {
    let mut vendors: Vec<_> = variants.keys().copied().collect();
    vendors.sort();
    vendors
}
