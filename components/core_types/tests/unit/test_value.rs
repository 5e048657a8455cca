//! Unit tests for the Value enum

use core_types::{HeapObject, Value};

#[cfg(test)]
mod value_creation_tests {
    use super::*;

    #[test]
    fn test_number_uses_smi_for_integers() {
        assert!(matches!(Value::number(0.0), Value::Smi(0)));
        assert!(matches!(Value::number(-100.0), Value::Smi(-100)));
        assert!(matches!(Value::number(i32::MAX as f64), Value::Smi(n) if n == i32::MAX));
        assert!(matches!(Value::number(i32::MIN as f64), Value::Smi(n) if n == i32::MIN));
    }

    #[test]
    fn test_number_uses_double_otherwise() {
        assert!(matches!(Value::number(3.5), Value::Double(n) if n == 3.5));
        assert!(matches!(Value::number(i32::MAX as f64 + 1.0), Value::Double(_)));
        assert!(matches!(Value::number(f64::NAN), Value::Double(n) if n.is_nan()));
        assert!(matches!(Value::number(f64::INFINITY), Value::Double(n) if n.is_infinite()));
        assert!(matches!(Value::number(-0.0), Value::Double(n) if n.is_sign_negative()));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(7), Value::Smi(7));
        assert_eq!(Value::from(7.0), Value::Smi(7));
        assert_eq!(Value::from("whoo"), Value::String("whoo".to_string()));
        assert_eq!(Value::from("whoo".to_string()), Value::String("whoo".to_string()));
    }

    #[test]
    fn test_object_constructors() {
        assert!(matches!(Value::array(vec![]).as_object(), Some(HeapObject::Array(_))));
        assert!(matches!(Value::date(0.0).as_object(), Some(HeapObject::Date(_))));
        assert!(matches!(Value::regexp("", "").as_object(), Some(HeapObject::RegExp { .. })));
        assert!(matches!(Value::set(vec![]).as_object(), Some(HeapObject::Set(_))));
        assert!(matches!(Value::map(vec![]).as_object(), Some(HeapObject::Map(_))));
        assert!(matches!(Value::error("boom").as_object(), Some(HeapObject::Error(_))));
        assert!(matches!(
            Value::string_object("12").as_object(),
            Some(HeapObject::StringObject(s)) if s == "12"
        ));
        assert!(Value::Null.as_object().is_none());
    }

    #[test]
    fn test_map_overwrites_duplicate_keys() {
        let map = Value::map(vec![
            (Value::from("a"), Value::Smi(1)),
            (Value::from("b"), Value::Smi(2)),
            (Value::from("a"), Value::Smi(3)),
        ]);
        match map.as_object() {
            Some(HeapObject::Map(entries)) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].1, Value::Smi(3));
            }
            other => panic!("Expected map, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod value_is_truthy_tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(!Value::Smi(0).is_truthy());
        assert!(!Value::Double(-0.0).is_truthy());
        assert!(!Value::Double(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
    }

    #[test]
    fn test_objects_are_truthy() {
        assert!(Value::array(vec![]).is_truthy());
        assert!(Value::object::<&str>(vec![]).is_truthy());
        assert!(Value::boolean_object(false).is_truthy());
        assert!(Value::function("").is_truthy());
        assert!(Value::symbol(None).is_truthy());
    }

    #[test]
    fn test_not() {
        assert_eq!(Value::Null.not(), Value::Boolean(true));
        assert_eq!(Value::Null.not().not(), Value::Boolean(false));
        assert_eq!(Value::Smi(5).not(), Value::Boolean(false));
    }
}

#[cfg(test)]
mod value_arithmetic_tests {
    use super::*;

    #[test]
    fn test_division_by_string_is_nan() {
        let result = Value::Smi(123).div(&Value::from("a"));
        assert!(matches!(result, Value::Double(n) if n.is_nan()));
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        assert!(matches!(Value::Smi(1).div(&Value::Smi(0)), Value::Double(n) if n == f64::INFINITY));
        assert!(matches!(Value::Smi(-1).div(&Value::Smi(0)), Value::Double(n) if n == f64::NEG_INFINITY));
        assert!(matches!(Value::Smi(0).div(&Value::Smi(0)), Value::Double(n) if n.is_nan()));
    }

    #[test]
    fn test_division_coerces_operands() {
        assert_eq!(Value::from("10").div(&Value::Boolean(true)), Value::Smi(10));
        assert_eq!(Value::number_object(9.0).div(&Value::from(" 3 ")), Value::Smi(3));
        assert_eq!(Value::Smi(1).div(&Value::Smi(4)), Value::Double(0.25));
    }

    #[test]
    fn test_to_number_of_non_numeric_kinds() {
        assert_eq!(Value::Null.to_number(), 0.0);
        assert!(Value::Undefined.to_number().is_nan());
        assert!(Value::object::<&str>(vec![]).to_number().is_nan());
        assert!(Value::bigint(1).to_number().is_nan());
    }

    #[test]
    fn test_prefixed_integer_strings() {
        assert_eq!(Value::from("0b11").to_number(), 3.0);
        assert_eq!(Value::from(" 0o777 ").to_number(), 511.0);
        assert_eq!(Value::from("0xFFFFFFFFFFFFFFFFFF").to_number(), 2f64.powi(72));
        assert!(Value::from("0o8").to_number().is_nan());
    }
}

#[cfg(test)]
mod value_equality_tests {
    use super::*;

    #[test]
    fn test_strict_equals_across_representations() {
        assert!(Value::Smi(1).strict_equals(&Value::Double(1.0)));
        assert!(!Value::Double(f64::NAN).strict_equals(&Value::Double(f64::NAN)));
    }

    #[test]
    fn test_strict_equals_different_kinds() {
        assert!(!Value::from("123").strict_equals(&Value::Smi(123)));
        assert!(!Value::Null.strict_equals(&Value::Undefined));
        assert!(!Value::from("12").strict_equals(&Value::string_object("12")));
    }

    #[test]
    fn test_symbols_compare_by_identity() {
        let sym = Value::symbol(Some("id"));
        assert!(sym.strict_equals(&sym.clone()));
        assert!(!sym.strict_equals(&Value::symbol(Some("id"))));
    }

    #[test]
    fn test_functions_compare_by_identity() {
        let f = Value::function("");
        let g = Value::function("");
        assert!(f.strict_equals(&f.clone()));
        assert!(!f.strict_equals(&g));
        assert_ne!(Value::function("main"), Value::function("main"));
    }

    #[test]
    fn test_set_keeps_distinct_functions() {
        let f = Value::function("");
        let g = Value::function("");
        match Value::set(vec![f.clone(), g, f]).as_object() {
            Some(HeapObject::Set(values)) => assert_eq!(values.len(), 2),
            other => panic!("Expected set, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod value_to_string_tests {
    use super::*;

    #[test]
    fn test_primitives_to_string() {
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Smi(-100).to_string(), "-100");
        assert_eq!(Value::Double(42.0).to_string(), "42");
        assert_eq!(Value::Double(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::bigint(1).to_string(), "1");
        assert_eq!(Value::symbol(None).to_string(), "Symbol()");
    }

    #[test]
    fn test_numbers_switch_to_exponent_form() {
        assert_eq!(Value::Double(1e21).to_string(), "1e+21");
        assert_eq!(Value::Double(-1.5e300).to_string(), "-1.5e+300");
        assert_eq!(Value::Double(1e-7).to_string(), "1e-7");
        assert_eq!(Value::Double(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::Double(0.000001).to_string(), "0.000001");
        assert_eq!(Value::number_object(2.5e-8).to_string(), "2.5e-8");
    }

    #[test]
    fn test_objects_to_string() {
        assert_eq!(Value::object(vec![("a", Value::Smi(1))]).to_string(), "[object Object]");
        assert_eq!(Value::array(vec![Value::Smi(1)]).to_string(), "1");
        assert_eq!(Value::regexp("", "").to_string(), "/(?:)/");
        assert_eq!(Value::set(vec![]).to_string(), "[object Set]");
        assert_eq!(Value::map(vec![]).to_string(), "[object Map]");
        assert_eq!(Value::error("boom").to_string(), "Error: boom");
        assert_eq!(Value::string_object("12").to_string(), "12");
    }

    #[test]
    fn test_nested_array_to_string() {
        let nested = Value::array(vec![
            Value::array(vec![Value::from("boolean"), Value::Smi(3)]),
            Value::array(vec![Value::from("null"), Value::Smi(1)]),
        ]);
        assert_eq!(nested.to_string(), "boolean,3,null,1");
    }
}
