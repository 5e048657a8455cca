//! Whole-sequence predicates over type tags.

use std::collections::HashSet;

use core_types::Value;

use crate::classify::{classify_all_real, classify_coarse};

/// Returns true when every value shares the first value's coarse tag.
///
/// Empty and single-element sequences are trivially homogeneous. A boxed
/// string is an `object`, so it breaks a run of primitive strings.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_classifier::all_same_coarse_type;
///
/// let strings = vec![Value::from("11"), Value::from("12"), Value::from("13")];
/// assert!(all_same_coarse_type(&strings));
///
/// let mixed = vec![Value::from("11"), Value::string_object("12"), Value::from("13")];
/// assert!(!all_same_coarse_type(&mixed));
/// ```
pub fn all_same_coarse_type(values: &[Value]) -> bool {
    let mut tags = values.iter().map(classify_coarse);
    match tags.next() {
        Some(first) => tags.all(|tag| tag == first),
        None => true,
    }
}

/// Returns true when no two values share a real tag.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_classifier::all_unique_real_types;
///
/// assert!(all_unique_real_types(&[]));
/// assert!(all_unique_real_types(&[Value::Boolean(true), Value::Smi(123), Value::from("123")]));
/// assert!(!all_unique_real_types(&[Value::Boolean(true), Value::Boolean(false)]));
/// ```
pub fn all_unique_real_types(values: &[Value]) -> bool {
    let distinct: HashSet<_> = classify_all_real(values).into_iter().collect();
    let unique = distinct.len() == values.len();
    tracing::trace!(distinct = distinct.len(), len = values.len(), unique);
    unique
}
