//! Contract tests over one value of every real type

use type_classifier::{all_unique_real_types, classify_all_coarse, classify_all_real, Value};

fn known_types() -> Vec<Value> {
    vec![
        Value::Boolean(true),
        Value::Smi(777),
        Value::from("hard.."),
        Value::array(vec![Value::Smi(1)]),
        Value::object::<&str>(vec![]),
        Value::function(""),
        Value::Undefined,
        Value::Null,
        Value::Double(f64::NAN),
        Value::Double(f64::INFINITY),
        Value::date(1_700_000_000_000.0),
        Value::regexp("", ""),
        Value::set(vec![]),
        Value::bigint(1),
        Value::symbol(None),
        Value::map(vec![]),
    ]
}

#[test]
fn test_check_basic_types() {
    let names: Vec<&str> = classify_all_coarse(&known_types())
        .into_iter()
        .map(|tag| tag.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "boolean", "number", "string", "object", "object", "function", "undefined", "object",
            "number", "number", "object", "object", "object", "bigint", "symbol", "object",
        ]
    );
}

#[test]
fn test_check_real_types() {
    let names: Vec<&str> = classify_all_real(&known_types())
        .into_iter()
        .map(|tag| tag.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "boolean", "number", "string", "array", "object", "function", "undefined", "null",
            "NaN", "Infinity", "date", "regexp", "set", "bigint", "symbol", "map",
        ]
    );
}

#[test]
fn test_no_repeated_types_in_known_types() {
    assert!(all_unique_real_types(&known_types()));
}

#[test]
fn test_known_types_cover_every_real_tag() {
    let mut tags = classify_all_real(&known_types());
    tags.sort();
    let mut all = type_classifier::RealTag::ALL.to_vec();
    all.sort();
    assert_eq!(tags, all);
}
