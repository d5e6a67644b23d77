// ABOUTME: Tests for model factories - vendor ids, pricing, and the manual
// ABOUTME: cross-vendor consistency invariant on token limits.

use rust_decimal_macros::dec;

use super::*;

#[test]
fn test_haiku_anthropic_variant() {
    let variants = claude_3_haiku(Some(Vendor::Anthropic));
    assert_eq!(variants.len(), 1);

    let model = &variants[0];
    assert_eq!(model.canonical_name, "claude-3-haiku-20240307");
    assert_eq!(model.vendor_model_id, "claude-3-haiku-20240307");
    assert_eq!(model.max_input_tokens, 200_000);
    assert_eq!(model.costs.input_price, dec!(0.25));
    assert_eq!(model.costs.output_price, dec!(1.25));
    assert!(model.has_capability(Capability::Vision));
}

#[test]
fn test_haiku_aws_variant_has_bedrock_id() {
    let variants = claude_3_haiku(Some(Vendor::Aws));
    assert_eq!(variants.len(), 1);
    assert_eq!(
        variants[0].vendor_model_id,
        "anthropic.claude-3-haiku-20240307-v1:0"
    );
}

#[test]
fn test_factory_without_vendor_returns_all_variants() {
    let variants = claude_3_haiku(None);
    assert_eq!(variants.len(), 2);

    let vendors: Vec<_> = variants.iter().map(|m| m.vendor).collect();
    assert!(vendors.contains(&Vendor::Anthropic));
    assert!(vendors.contains(&Vendor::Aws));
}

#[test]
fn test_sonnet_3_5_aws_maps_to_older_revision() {
    let variants = claude_3_5_sonnet(Some(Vendor::Aws));
    assert_eq!(
        variants[0].vendor_model_id,
        "anthropic.claude-3-5-sonnet-20240620-v1:0"
    );
}

#[test]
fn test_all_factories_validate() {
    for model in builtin_models() {
        assert!(
            model.validate().is_ok(),
            "builtin descriptor failed validation: {}/{}",
            model.canonical_name,
            model.vendor
        );
    }
}

#[test]
fn test_token_limits_consistent_across_vendors() {
    for factory in [
        claude_3_haiku,
        claude_3_5_haiku,
        claude_3_5_sonnet,
        claude_3_7_sonnet,
    ] {
        let variants = factory(None);
        let first = &variants[0];
        for model in &variants[1..] {
            assert_eq!(model.canonical_name, first.canonical_name);
            assert_eq!(model.max_input_tokens, first.max_input_tokens);
            assert_eq!(model.max_output_tokens, first.max_output_tokens);
            assert_eq!(model.costs, first.costs);
        }
    }
}

#[test]
fn test_vendor_model_ids_unique_within_vendor() {
    let models = builtin_models();
    for (i, a) in models.iter().enumerate() {
        for b in &models[i + 1..] {
            if a.vendor == b.vendor {
                assert_ne!(
                    a.vendor_model_id, b.vendor_model_id,
                    "duplicate id within {}",
                    a.vendor
                );
            }
        }
    }
}

#[test]
fn test_builtin_models_cover_every_factory() {
    let models = builtin_models();
    // Four families, two vendors each.
    assert_eq!(models.len(), 8);
}
