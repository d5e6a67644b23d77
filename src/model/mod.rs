// ABOUTME: Model module - vendors, descriptors, factories, and the registry.
// ABOUTME: Core catalog of multi-vendor model metadata and pricing.

mod cost;
mod descriptor;
mod factory;
mod registry;
mod vendor;

pub use cost::*;
pub use descriptor::*;
pub use factory::*;
pub use registry::*;
pub use vendor::*;

#[cfg(test)]
mod factory_test;
#[cfg(test)]
mod vendor_test;
