//! Cross-component tests
//!
//! Values built with core_types, classified with type_classifier.

use core_types::{CoarseTag, RealTag, Value};
use pretty_assertions::assert_eq;
use type_classifier::{
    all_same_coarse_type, all_unique_real_types, classify_all_coarse, classify_all_real,
    count_by_real_type,
};

/// Every real tag must refine the coarse tag of the same value
#[test]
fn test_real_tags_refine_coarse_tags() {
    let values = vec![
        Value::Boolean(false),
        Value::Smi(0),
        Value::Double(f64::NAN),
        Value::from(""),
        Value::Null,
        Value::array(vec![Value::Null]),
        Value::error(""),
        Value::function("anonymous"),
        Value::Undefined,
        Value::symbol(Some("")),
        Value::bigint(-1),
    ];

    let coarse = classify_all_coarse(&values);
    let real = classify_all_real(&values);

    assert_eq!(coarse.len(), values.len());
    for (c, r) in coarse.iter().zip(&real) {
        assert_eq!(r.coarse(), *c);
    }
}

/// Division results keep the number coarse tag but refine differently
#[test]
fn test_division_results() {
    let values = vec![
        Value::Smi(123),
        Value::Smi(123).div(&Value::from("a")),
        Value::Smi(1).div(&Value::Smi(0)),
    ];

    assert!(all_same_coarse_type(&values));
    assert!(all_unique_real_types(&values));
    assert_eq!(
        classify_all_real(&values),
        vec![RealTag::Number, RealTag::NaN, RealTag::Infinity]
    );
}

/// Frequency table and tag lists agree
#[test]
fn test_frequency_table_matches_tag_list() {
    let values = vec![
        Value::set(vec![]),
        Value::Smi(1),
        Value::set(vec![Value::Smi(1)]),
        Value::regexp("x", ""),
        Value::Smi(2),
    ];

    let real = classify_all_real(&values);
    let table = count_by_real_type(&values);

    for entry in &table {
        assert_eq!(real.iter().filter(|t| **t == entry.tag).count(), entry.count);
    }
    assert_eq!(table.total(), values.len());
}

/// Boxed and unboxed strings are told apart
#[test]
fn test_boxed_string_is_an_object() {
    let values = vec![Value::from("11"), Value::string_object("12"), Value::from("13")];

    assert_eq!(
        classify_all_coarse(&values),
        vec![CoarseTag::String, CoarseTag::Object, CoarseTag::String]
    );
    assert!(!all_same_coarse_type(&values));
}
