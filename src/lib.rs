// ABOUTME: Root module for ai-dev-console - multi-vendor model workbench core.
// ABOUTME: Re-exports all public types from submodules.

pub mod converse;
pub mod error;
pub mod model;
pub mod prelude;

pub use error::ConsoleError;
