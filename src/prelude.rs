// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use ai_dev_console::prelude::*;` to get started quickly.

pub use crate::converse::{
    ContentBlock, ConverseRequest, ConverseResponse, InferenceConfig, Message, Role, StopReason,
    Usage,
};
pub use crate::error::{ConsoleError, ConverseError, ModelError};
pub use crate::model::{
    builtin_models, claude_3_5_haiku, claude_3_5_sonnet, claude_3_7_sonnet, claude_3_haiku,
    Capability, ModelCosts, ModelDescriptor, ModelRegistry, Vendor,
};
