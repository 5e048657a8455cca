//! Type tags produced by value classification.
//!
//! [`CoarseTag`] mirrors the result of JavaScript's `typeof` operator, while
//! [`RealTag`] refines the `number` and `object` categories into the kinds a
//! caller usually cares about (`NaN`, `array`, `date`, `null`, ...).
//!
//! Both tags order by their string form, so sorting a list of tags gives the
//! same order as sorting their names.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TagError;

/// The primitive category of a value, as reported by `typeof`.
///
/// # Examples
///
/// ```
/// use core_types::CoarseTag;
///
/// assert_eq!(CoarseTag::Boolean.as_str(), "boolean");
/// assert_eq!("bigint".parse::<CoarseTag>().unwrap(), CoarseTag::BigInt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoarseTag {
    /// `true` or `false`
    Boolean,
    /// Any number, including NaN and the infinities
    Number,
    /// Primitive string
    String,
    /// Objects, boxed primitives and `null`
    Object,
    /// Callable objects
    Function,
    /// The `undefined` value
    Undefined,
    /// Symbols
    Symbol,
    /// Arbitrary precision integers
    BigInt,
}

impl CoarseTag {
    /// Every coarse tag, in declaration order.
    pub const ALL: [CoarseTag; 8] = [
        CoarseTag::Boolean,
        CoarseTag::Number,
        CoarseTag::String,
        CoarseTag::Object,
        CoarseTag::Function,
        CoarseTag::Undefined,
        CoarseTag::Symbol,
        CoarseTag::BigInt,
    ];

    /// Returns the tag exactly as `typeof` spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            CoarseTag::Boolean => "boolean",
            CoarseTag::Number => "number",
            CoarseTag::String => "string",
            CoarseTag::Object => "object",
            CoarseTag::Function => "function",
            CoarseTag::Undefined => "undefined",
            CoarseTag::Symbol => "symbol",
            CoarseTag::BigInt => "bigint",
        }
    }
}

/// The refined type of a value.
///
/// Numbers split into `NaN`, `Infinity` and `number`; objects split into
/// `array`, `date`, `regexp`, `set`, `map`, `null` and the `object` fallback.
/// Every other value keeps the name of its [`CoarseTag`].
///
/// # Examples
///
/// ```
/// use core_types::{CoarseTag, RealTag};
///
/// assert_eq!(RealTag::NaN.to_string(), "NaN");
/// assert_eq!(RealTag::Map.coarse(), CoarseTag::Object);
/// assert!(RealTag::Infinity < RealTag::Array);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RealTag {
    /// Not-a-number
    #[serde(rename = "NaN")]
    NaN,
    /// Positive or negative infinity
    #[serde(rename = "Infinity")]
    Infinity,
    /// Finite number
    Number,
    /// Array instance
    Array,
    /// Date instance
    Date,
    /// RegExp instance
    RegExp,
    /// Set instance
    Set,
    /// Map instance
    Map,
    /// The `null` value
    Null,
    /// Any other object
    Object,
    /// `true` or `false`
    Boolean,
    /// Primitive string
    String,
    /// Callable object
    Function,
    /// The `undefined` value
    Undefined,
    /// Symbol
    Symbol,
    /// Arbitrary precision integer
    BigInt,
}

impl RealTag {
    /// Every real tag, in declaration order.
    pub const ALL: [RealTag; 16] = [
        RealTag::NaN,
        RealTag::Infinity,
        RealTag::Number,
        RealTag::Array,
        RealTag::Date,
        RealTag::RegExp,
        RealTag::Set,
        RealTag::Map,
        RealTag::Null,
        RealTag::Object,
        RealTag::Boolean,
        RealTag::String,
        RealTag::Function,
        RealTag::Undefined,
        RealTag::Symbol,
        RealTag::BigInt,
    ];

    /// Returns the tag's literal name.
    pub fn as_str(self) -> &'static str {
        match self {
            RealTag::NaN => "NaN",
            RealTag::Infinity => "Infinity",
            RealTag::Number => "number",
            RealTag::Array => "array",
            RealTag::Date => "date",
            RealTag::RegExp => "regexp",
            RealTag::Set => "set",
            RealTag::Map => "map",
            RealTag::Null => "null",
            RealTag::Object => "object",
            RealTag::Boolean => "boolean",
            RealTag::String => "string",
            RealTag::Function => "function",
            RealTag::Undefined => "undefined",
            RealTag::Symbol => "symbol",
            RealTag::BigInt => "bigint",
        }
    }

    /// Returns the coarse tag this real tag refines.
    pub fn coarse(self) -> CoarseTag {
        match self {
            RealTag::NaN | RealTag::Infinity | RealTag::Number => CoarseTag::Number,
            RealTag::Array
            | RealTag::Date
            | RealTag::RegExp
            | RealTag::Set
            | RealTag::Map
            | RealTag::Null
            | RealTag::Object => CoarseTag::Object,
            RealTag::Boolean => CoarseTag::Boolean,
            RealTag::String => CoarseTag::String,
            RealTag::Function => CoarseTag::Function,
            RealTag::Undefined => CoarseTag::Undefined,
            RealTag::Symbol => CoarseTag::Symbol,
            RealTag::BigInt => CoarseTag::BigInt,
        }
    }
}

impl From<CoarseTag> for RealTag {
    /// The real tag a value gets when its coarse tag needs no refinement.
    ///
    /// `number` and `object` map to their fallbacks.
    fn from(tag: CoarseTag) -> Self {
        match tag {
            CoarseTag::Boolean => RealTag::Boolean,
            CoarseTag::Number => RealTag::Number,
            CoarseTag::String => RealTag::String,
            CoarseTag::Object => RealTag::Object,
            CoarseTag::Function => RealTag::Function,
            CoarseTag::Undefined => RealTag::Undefined,
            CoarseTag::Symbol => RealTag::Symbol,
            CoarseTag::BigInt => RealTag::BigInt,
        }
    }
}

macro_rules! impl_tag_traits {
    ($tag:ident) => {
        impl fmt::Display for $tag {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $tag {
            type Err = TagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $tag::ALL
                    .iter()
                    .copied()
                    .find(|tag| tag.as_str() == s)
                    .ok_or_else(|| TagError::Unknown(s.to_string()))
            }
        }

        impl Ord for $tag {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl PartialOrd for $tag {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    };
}

impl_tag_traits!(CoarseTag);
impl_tag_traits!(RealTag);
