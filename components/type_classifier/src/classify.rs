//! Per-value and per-collection type classification.
//!
//! [`classify_coarse`] reproduces `typeof`. [`classify_real`] refines the two
//! ambiguous categories: numbers split into `NaN`, `Infinity` and `number`,
//! objects split by the kind of object (with `null` singled out).

use core_types::{CoarseTag, HeapObject, RealTag, Value};

/// Returns the `typeof` category of a value.
///
/// Total and pure. `null` and every object kind, boxed primitives included,
/// report `object`.
///
/// # Examples
///
/// ```
/// use core_types::{CoarseTag, Value};
/// use type_classifier::classify_coarse;
///
/// assert_eq!(classify_coarse(&Value::Boolean(true)), CoarseTag::Boolean);
/// assert_eq!(classify_coarse(&Value::Null), CoarseTag::Object);
/// assert_eq!(classify_coarse(&Value::string_object("12")), CoarseTag::Object);
/// ```
pub fn classify_coarse(value: &Value) -> CoarseTag {
    match value {
        Value::Undefined => CoarseTag::Undefined,
        Value::Null => CoarseTag::Object, // JavaScript quirk
        Value::Boolean(_) => CoarseTag::Boolean,
        Value::Smi(_) | Value::Double(_) => CoarseTag::Number,
        Value::String(_) => CoarseTag::String,
        Value::Symbol(_) => CoarseTag::Symbol,
        Value::BigInt(_) => CoarseTag::BigInt,
        Value::Function(_) => CoarseTag::Function,
        Value::Object(_) => CoarseTag::Object,
    }
}

/// Returns the refined type of a value.
///
/// Numbers and objects are inspected further; every other value keeps its
/// coarse tag.
///
/// # Examples
///
/// ```
/// use core_types::{RealTag, Value};
/// use type_classifier::classify_real;
///
/// assert_eq!(classify_real(&Value::Double(f64::NAN)), RealTag::NaN);
/// assert_eq!(classify_real(&Value::Null), RealTag::Null);
/// assert_eq!(classify_real(&Value::map(vec![])), RealTag::Map);
/// assert_eq!(classify_real(&Value::from("whoo")), RealTag::String);
/// ```
pub fn classify_real(value: &Value) -> RealTag {
    match classify_coarse(value) {
        CoarseTag::Number => real_number_type(value),
        CoarseTag::Object => real_object_type(value),
        coarse => RealTag::from(coarse),
    }
}

fn real_number_type(value: &Value) -> RealTag {
    match value {
        Value::Double(n) if n.is_nan() => RealTag::NaN,
        Value::Double(n) if n.is_infinite() => RealTag::Infinity,
        _ => RealTag::Number,
    }
}

fn real_object_type(value: &Value) -> RealTag {
    let obj = match value {
        Value::Null => return RealTag::Null,
        Value::Object(obj) => obj,
        _ => return RealTag::Object,
    };
    match obj.as_ref() {
        HeapObject::Array(_) => RealTag::Array,
        HeapObject::Date(_) => RealTag::Date,
        HeapObject::RegExp { .. } => RealTag::RegExp,
        HeapObject::Set(_) => RealTag::Set,
        HeapObject::Map(_) => RealTag::Map,
        HeapObject::Plain(_)
        | HeapObject::Error(_)
        | HeapObject::StringObject(_)
        | HeapObject::NumberObject(_)
        | HeapObject::BooleanObject(_) => RealTag::Object,
    }
}

/// Classifies every value with [`classify_coarse`], preserving order.
#[tracing::instrument(level = "trace", skip_all, fields(len = values.len()))]
pub fn classify_all_coarse(values: &[Value]) -> Vec<CoarseTag> {
    values.iter().map(classify_coarse).collect()
}

/// Classifies every value with [`classify_real`], preserving order.
#[tracing::instrument(level = "trace", skip_all, fields(len = values.len()))]
pub fn classify_all_real(values: &[Value]) -> Vec<RealTag> {
    values.iter().map(classify_real).collect()
}
