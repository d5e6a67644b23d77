// ABOUTME: Model factories - the single source of truth for vendor-specific
// ABOUTME: identifiers, pricing, and capabilities of every builtin model.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Capability, ModelCosts, ModelDescriptor, Vendor};

// Token limits are identical across vendors of the same canonical name.
// That consistency is a manual invariant of these factories, not something
// the registry enforces.
const CONTEXT_WINDOW: u32 = 200_000;
const MAX_OUTPUT_TOKENS: u32 = 8_192;

/// Variants of Claude 3 Haiku.
///
/// With a vendor, only that vendor's variant (empty if it has none);
/// with `None`, every known variant.
pub fn claude_3_haiku(vendor: Option<Vendor>) -> Vec<ModelDescriptor> {
    variants(
        "claude-3-haiku-20240307",
        &[
            (Vendor::Anthropic, "claude-3-haiku-20240307"),
            (Vendor::Aws, "anthropic.claude-3-haiku-20240307-v1:0"),
        ],
        dec!(0.25),
        dec!(1.25),
        &[Capability::Vision, Capability::MessageBatches, Capability::Streaming],
        "Fastest and most compact model for near-instant responsiveness",
        vendor,
    )
}

/// Variants of Claude 3.5 Haiku.
pub fn claude_3_5_haiku(vendor: Option<Vendor>) -> Vec<ModelDescriptor> {
    variants(
        "claude-3-5-haiku-20241022",
        &[
            (Vendor::Anthropic, "claude-3-5-haiku-20241022"),
            (Vendor::Aws, "anthropic.claude-3-5-haiku-20241022-v1:0"),
        ],
        dec!(1.0),
        dec!(5.0),
        &[Capability::MessageBatches, Capability::ToolUse, Capability::Streaming],
        "Our fastest model",
        vendor,
    )
}

/// Variants of Claude 3.5 Sonnet.
pub fn claude_3_5_sonnet(vendor: Option<Vendor>) -> Vec<ModelDescriptor> {
    variants(
        "claude-3-5-sonnet-20241022",
        &[
            (Vendor::Anthropic, "claude-3-5-sonnet-20241022"),
            // Bedrock serves the 20240620 revision under this canonical name.
            (Vendor::Aws, "anthropic.claude-3-5-sonnet-20240620-v1:0"),
        ],
        dec!(3.0),
        dec!(15.0),
        &[
            Capability::Vision,
            Capability::MessageBatches,
            Capability::ToolUse,
            Capability::Streaming,
        ],
        "Our most intelligent model",
        vendor,
    )
}

/// Variants of Claude 3.7 Sonnet.
pub fn claude_3_7_sonnet(vendor: Option<Vendor>) -> Vec<ModelDescriptor> {
    variants(
        "claude-3-7-sonnet-20250219",
        &[
            (Vendor::Anthropic, "claude-3-7-sonnet-20250219"),
            (Vendor::Aws, "anthropic.claude-3-7-sonnet-20250219-v1:0"),
        ],
        dec!(4.0),
        dec!(20.0),
        &[
            Capability::Vision,
            Capability::MessageBatches,
            Capability::ToolUse,
            Capability::Streaming,
        ],
        "Our most expressive model",
        vendor,
    )
}

/// Every variant of every builtin model.
pub fn builtin_models() -> Vec<ModelDescriptor> {
    let mut models = claude_3_haiku(None);
    models.extend(claude_3_5_haiku(None));
    models.extend(claude_3_5_sonnet(None));
    models.extend(claude_3_7_sonnet(None));
    models
}

#[allow(clippy::too_many_arguments)]
fn variants(
    canonical_name: &str,
    vendor_ids: &[(Vendor, &str)],
    input_price: Decimal,
    output_price: Decimal,
    capabilities: &[Capability],
    description: &str,
    vendor: Option<Vendor>,
) -> Vec<ModelDescriptor> {
    let capabilities: BTreeSet<Capability> = capabilities.iter().copied().collect();
    vendor_ids
        .iter()
        .filter(|(v, _)| vendor.is_none_or(|wanted| *v == wanted))
        .map(|(v, id)| ModelDescriptor {
            canonical_name: canonical_name.to_string(),
            vendor: *v,
            vendor_model_id: id.to_string(),
            max_input_tokens: CONTEXT_WINDOW,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            costs: ModelCosts {
                input_price,
                output_price,
                unit_size: 1_000_000,
            },
            capabilities: capabilities.clone(),
            description: description.to_string(),
        })
        .collect()
}
