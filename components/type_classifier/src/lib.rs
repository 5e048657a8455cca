//! Type classification for JavaScript values
//!
//! This crate answers "what type is this value?" at two levels of detail and
//! summarises sequences of values by type:
//! - [`classify_coarse`] / [`classify_all_coarse`] - the `typeof` category
//! - [`classify_real`] / [`classify_all_real`] - the refined type
//!   (`NaN`, `Infinity`, `array`, `date`, `regexp`, `set`, `map`, `null`, ...)
//! - [`all_same_coarse_type`] - do all values share a `typeof` category?
//! - [`all_unique_real_types`] - does every value have a distinct real type?
//! - [`count_by_real_type`] - sorted `(tag, count)` summary
//!
//! Every function is pure and total: any [`Value`] gets a tag.
//!
//! # Example
//!
//! ```
//! use type_classifier::{count_by_real_type, Value};
//!
//! let values = vec![
//!     Value::Boolean(true),
//!     Value::Null,
//!     Value::Null.not(),
//!     Value::Null.not().not(),
//!     Value::object::<&str>(vec![]),
//! ];
//!
//! assert_eq!(count_by_real_type(&values).to_string(), "boolean,3,null,1,object,1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod checks;
pub mod classify;
pub mod frequency;

// Re-export main types for convenience
pub use checks::{all_same_coarse_type, all_unique_real_types};
pub use classify::{classify_all_coarse, classify_all_real, classify_coarse, classify_real};
pub use core_types::{CoarseTag, RealTag, Value};
pub use frequency::{count_by_real_type, FrequencyEntry, FrequencyTable};
