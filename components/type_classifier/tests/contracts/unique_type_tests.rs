//! Contract tests for all_unique_real_types

use type_classifier::{all_unique_real_types, Value};

#[test]
fn test_empty_sequence() {
    assert!(all_unique_real_types(&[]));
}

#[test]
fn test_all_value_types_are_unique() {
    let values = vec![Value::Boolean(true), Value::Smi(123), Value::from("123")];
    assert!(all_unique_real_types(&values));
}

#[test]
fn test_two_values_have_the_same_type() {
    let comparison = Value::Boolean(Value::from("123").strict_equals(&Value::Smi(123)));
    let values = vec![Value::Boolean(true), Value::Smi(123), comparison];
    assert!(!all_unique_real_types(&values));
}

#[test]
fn test_null_and_object_are_distinct() {
    let values = vec![Value::Null, Value::object::<&str>(vec![]), Value::array(vec![])];
    assert!(all_unique_real_types(&values));
}
