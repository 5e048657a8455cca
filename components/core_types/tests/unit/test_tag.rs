//! Unit tests for CoarseTag and RealTag

use core_types::{CoarseTag, RealTag, TagError};

#[test]
fn test_real_tag_display_matches_as_str() {
    for tag in RealTag::ALL {
        assert_eq!(tag.to_string(), tag.as_str());
    }
}

#[test]
fn test_real_tag_refines_coarse() {
    assert_eq!(RealTag::NaN.coarse(), CoarseTag::Number);
    assert_eq!(RealTag::Infinity.coarse(), CoarseTag::Number);
    assert_eq!(RealTag::Null.coarse(), CoarseTag::Object);
    assert_eq!(RealTag::RegExp.coarse(), CoarseTag::Object);
    assert_eq!(RealTag::Function.coarse(), CoarseTag::Function);
}

#[test]
fn test_parse_is_case_sensitive() {
    assert_eq!("NaN".parse::<RealTag>(), Ok(RealTag::NaN));
    assert_eq!("nan".parse::<RealTag>(), Err(TagError::Unknown("nan".to_string())));
    assert!("Object".parse::<CoarseTag>().is_err());
}

#[test]
fn test_serde_uses_tag_names() {
    for tag in RealTag::ALL {
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, format!("\"{}\"", tag.as_str()));
        assert_eq!(serde_json::from_str::<RealTag>(&json).unwrap(), tag);
    }
    for tag in CoarseTag::ALL {
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, format!("\"{}\"", tag.as_str()));
    }
}

#[test]
fn test_sorting_follows_names() {
    let mut tags = vec![CoarseTag::Undefined, CoarseTag::BigInt, CoarseTag::Object, CoarseTag::Boolean];
    tags.sort();
    assert_eq!(
        tags,
        vec![CoarseTag::BigInt, CoarseTag::Boolean, CoarseTag::Object, CoarseTag::Undefined]
    );
}
