// ABOUTME: Tests for Vendor - parsing, display, serde, ordering.
// ABOUTME: Covers the CLI-facing string forms.

use super::*;
use crate::error::ModelError;

#[test]
fn test_parse_vendor() {
    assert_eq!("anthropic".parse::<Vendor>().unwrap(), Vendor::Anthropic);
    assert_eq!("aws".parse::<Vendor>().unwrap(), Vendor::Aws);
    // Common CLI spelling for the AWS service.
    assert_eq!("bedrock".parse::<Vendor>().unwrap(), Vendor::Aws);
    assert_eq!("ANTHROPIC".parse::<Vendor>().unwrap(), Vendor::Anthropic);
}

#[test]
fn test_parse_unknown_vendor() {
    let err = "openai".parse::<Vendor>().unwrap_err();
    assert!(matches!(err, ModelError::UnknownVendor(name) if name == "openai"));
}

#[test]
fn test_display_matches_serde_form() {
    for vendor in Vendor::all() {
        let json = serde_json::to_string(vendor).unwrap();
        assert_eq!(json, format!("\"{vendor}\""));
    }
}

#[test]
fn test_default_preference_order() {
    assert_eq!(Vendor::all(), &[Vendor::Anthropic, Vendor::Aws]);
}
