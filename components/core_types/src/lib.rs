//! Core JavaScript value types and type tags.
//!
//! This crate provides the value model the classifier works on: a closed
//! representation of every JavaScript value kind plus the tags that describe
//! them.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`HeapObject`] - The object kinds behind [`Value::Object`]
//! - [`Function`], [`Symbol`] - Identity-carrying payloads of function and symbol values
//! - [`CoarseTag`] - The `typeof` category of a value
//! - [`RealTag`] - The refined type of a value
//! - [`TagError`] - Failure to parse a tag name
//!
//! # Examples
//!
//! ```
//! use core_types::{CoarseTag, RealTag, Value};
//!
//! let boxed = Value::string_object("12");
//! assert!(boxed.is_truthy());
//! assert_eq!(boxed.to_string(), "12");
//!
//! let tag: RealTag = "regexp".parse().unwrap();
//! assert_eq!(tag.coarse(), CoarseTag::Object);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod tag;
mod value;

pub use error::TagError;
pub use tag::{CoarseTag, RealTag};
pub use value::{Function, HeapObject, Symbol, Value};
