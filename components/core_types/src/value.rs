//! JavaScript value representation.
//!
//! This module provides the core `Value` enum covering every kind of value
//! the classifier accepts. Primitives are stored inline; objects live behind
//! an `Rc` so that clones share identity, just like references do in
//! JavaScript.

use chrono::{DateTime, Utc};
use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::rc::Rc;

/// Represents any JavaScript value.
///
/// Numbers have two representations: `Smi` for small integers and `Double`
/// for everything else. Both are the same JavaScript type.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(2.75);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert!(float.is_number());
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(std::string::String),
    /// Symbol; clones refer to the same symbol
    Symbol(Rc<Symbol>),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Function; clones refer to the same function
    Function(Rc<Function>),
    /// Heap-allocated object
    Object(Rc<HeapObject>),
}

/// A symbol and its optional description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Text passed to `Symbol(...)`, if any
    pub description: Option<std::string::String>,
}

/// A function and its name (empty for anonymous functions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Value of the function's `name` property
    pub name: std::string::String,
}

/// The kinds of heap object a [`Value::Object`] can hold.
#[derive(Debug, Clone)]
pub enum HeapObject {
    /// Ordinary object literal with its own properties
    Plain(Vec<(std::string::String, Value)>),
    /// Array with its elements
    Array(Vec<Value>),
    /// Date holding milliseconds since the Unix epoch (NaN for an invalid date)
    Date(f64),
    /// Regular expression
    RegExp {
        /// Pattern text
        source: std::string::String,
        /// Flag letters, e.g. `gi`
        flags: std::string::String,
    },
    /// Set with values in insertion order
    Set(Vec<Value>),
    /// Map with entries in insertion order
    Map(Vec<(Value, Value)>),
    /// Error object with its message
    Error(std::string::String),
    /// `new String(...)`
    StringObject(std::string::String),
    /// `new Number(...)`
    NumberObject(f64),
    /// `new Boolean(...)`
    BooleanObject(bool),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Smi(a), Value::Smi(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Rc::ptr_eq(a, b),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Creates a number, using the `Smi` representation when it fits.
    ///
    /// Negative zero, fractions, NaN and values outside the `i32` range are
    /// stored as `Double`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(matches!(Value::number(7.0), Value::Smi(7)));
    /// assert!(matches!(Value::number(0.5), Value::Double(_)));
    /// assert!(matches!(Value::number(-0.0), Value::Double(_)));
    /// ```
    pub fn number(n: f64) -> Self {
        let fits = n.fract() == 0.0 && n >= i32::MIN as f64 && n <= i32::MAX as f64;
        if fits && !(n == 0.0 && n.is_sign_negative()) {
            Value::Smi(n as i32)
        } else {
            Value::Double(n)
        }
    }

    /// Creates an array from its elements.
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Object(Rc::new(HeapObject::Array(elements)))
    }

    /// Creates a plain object from `(key, value)` pairs.
    pub fn object<K: Into<std::string::String>>(properties: Vec<(K, Value)>) -> Self {
        let properties = properties.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Object(Rc::new(HeapObject::Plain(properties)))
    }

    /// Creates a date from milliseconds since the Unix epoch.
    pub fn date(epoch_ms: f64) -> Self {
        Value::Object(Rc::new(HeapObject::Date(epoch_ms)))
    }

    /// Creates a regular expression.
    pub fn regexp(source: impl Into<std::string::String>, flags: impl Into<std::string::String>) -> Self {
        Value::Object(Rc::new(HeapObject::RegExp {
            source: source.into(),
            flags: flags.into(),
        }))
    }

    /// Creates a set; duplicates are dropped (NaN counts as equal to itself).
    pub fn set(values: Vec<Value>) -> Self {
        let mut unique: Vec<Value> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.iter().any(|v| v.same_value_zero(&value)) {
                unique.push(value);
            }
        }
        Value::Object(Rc::new(HeapObject::Set(unique)))
    }

    /// Creates a map from `(key, value)` entries; later keys overwrite earlier ones.
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        let mut unique: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match unique.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                Some(entry) => entry.1 = value,
                None => unique.push((key, value)),
            }
        }
        Value::Object(Rc::new(HeapObject::Map(unique)))
    }

    /// Creates an error object.
    pub fn error(message: impl Into<std::string::String>) -> Self {
        Value::Object(Rc::new(HeapObject::Error(message.into())))
    }

    /// Creates a boxed string, as `new String(s)` does.
    pub fn string_object(s: impl Into<std::string::String>) -> Self {
        Value::Object(Rc::new(HeapObject::StringObject(s.into())))
    }

    /// Creates a boxed number, as `new Number(n)` does.
    pub fn number_object(n: f64) -> Self {
        Value::Object(Rc::new(HeapObject::NumberObject(n)))
    }

    /// Creates a boxed boolean, as `new Boolean(b)` does.
    pub fn boolean_object(b: bool) -> Self {
        Value::Object(Rc::new(HeapObject::BooleanObject(b)))
    }

    /// Creates a fresh function. Two calls never produce equal functions.
    pub fn function(name: impl Into<std::string::String>) -> Self {
        Value::Function(Rc::new(Function { name: name.into() }))
    }

    /// Creates a fresh symbol. Two calls never produce equal symbols.
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Rc::new(Symbol {
            description: description.map(str::to_string),
        }))
    }

    /// Creates a BigInt.
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(n.into())
    }

    /// Returns true for both number representations.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Smi(_) | Value::Double(_))
    }

    /// Returns the numeric payload of a number value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Smi(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the heap object behind an object value.
    pub fn as_object(&self) -> Option<&HeapObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// In JavaScript, the following values are falsy:
    /// - undefined
    /// - null
    /// - false
    /// - 0 (including -0)
    /// - NaN
    /// - "" (empty string)
    /// - 0n
    ///
    /// All other values are truthy, including all objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Double(f64::NAN).is_truthy());
    ///
    /// assert!(Value::Smi(42).is_truthy());
    /// assert!(Value::string_object("").is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::BigInt(n) => !n.is_zero(),
            Value::Function(_) => true,
            Value::Object(_) => true, // Boxed `false` included
        }
    }

    /// Logical NOT, as the `!` operator computes it.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Null.not(), Value::Boolean(true));
    /// assert_eq!(Value::Null.not().not(), Value::Boolean(false));
    /// ```
    pub fn not(&self) -> Value {
        Value::Boolean(!self.is_truthy())
    }

    /// Converts the value to a number.
    ///
    /// Strings are trimmed and parsed as decimal literals or as `0x`, `0o`
    /// and `0b` prefixed integers of any length; an empty string is `0`. Boxed primitives unwrap. Symbols,
    /// BigInts, functions and other objects give NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Boolean(b) => f64::from(u8::from(*b)),
            Value::Smi(n) => *n as f64,
            Value::Double(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::Object(obj) => match obj.as_ref() {
                HeapObject::StringObject(s) => string_to_number(s),
                HeapObject::NumberObject(n) => *n,
                HeapObject::BooleanObject(b) => f64::from(u8::from(*b)),
                _ => f64::NAN,
            },
            Value::Symbol(_) | Value::BigInt(_) | Value::Function(_) => f64::NAN,
        }
    }

    /// Numeric division, `self / rhs`.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(Value::Smi(123).div(&Value::from("a")).as_f64().unwrap().is_nan());
    /// assert_eq!(Value::Smi(1).div(&Value::Smi(0)).as_f64(), Some(f64::INFINITY));
    /// ```
    pub fn div(&self, rhs: &Value) -> Value {
        Value::number(self.to_number() / rhs.to_number())
    }

    /// Strict equality, as the `===` operator computes it.
    ///
    /// Values of different kinds are never equal. Numbers compare by value
    /// across both representations, so NaN is not equal to itself.
    /// Symbols, functions and objects compare by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    /// Equality used for Set members and Map keys: like `===` but NaN equals NaN.
    fn same_value_zero(&self, other: &Value) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_equals(other),
        }
    }
}

fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return BigUint::parse_bytes(digits.as_bytes(), radix)
            .and_then(|n| n.to_f64())
            .unwrap_or(f64::NAN);
    }
    // Rust also accepts "inf" and "nan", which JavaScript does not
    let is_decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if is_decimal {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn format_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n != 0.0 && (n.abs() >= 1e21 || n.abs() < 1e-6) {
        // Shortest mantissa, with the exponent sign spelled out
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{}e+{}", mantissa, exp),
            _ => write!(f, "{}", formatted),
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

fn format_date(f: &mut fmt::Formatter<'_>, epoch_ms: f64) -> fmt::Result {
    let date = if epoch_ms.is_finite() {
        DateTime::<Utc>::from_timestamp_millis(epoch_ms as i64)
    } else {
        None
    };
    match date {
        Some(date) => write!(
            f,
            "{}",
            date.format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
        ),
        None => write!(f, "Invalid Date"),
    }
}

/// Implementation of Display trait for JavaScript string conversion.
///
/// This follows JavaScript's `String()` conversion rules:
/// - undefined → "undefined"
/// - null → "null"
/// - boolean → "true" or "false"
/// - number → decimal representation (exponent form below 1e-6 and from
///   1e21 up), "NaN" or "Infinity"
/// - array → elements joined with commas
/// - plain object → "[object Object]"
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Double(f64::NEG_INFINITY).to_string(), "-Infinity");
/// assert_eq!(Value::array(vec![Value::Smi(1), Value::Null]).to_string(), "1,");
/// assert_eq!(Value::regexp("a+", "g").to_string(), "/a+/g");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => format_number(f, *n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(sym) => write!(f, "Symbol({})", sym.description.as_deref().unwrap_or("")),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::Function(func) => write!(f, "function {}() {{ [native code] }}", func.name),
            Value::Object(obj) => write!(f, "{}", obj),
        }
    }
}

impl fmt::Display for HeapObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapObject::Plain(_) => write!(f, "[object Object]"),
            HeapObject::Array(elements) => {
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // Holes, undefined and null join as empty strings
                    if !matches!(element, Value::Undefined | Value::Null) {
                        write!(f, "{}", element)?;
                    }
                }
                Ok(())
            }
            HeapObject::Date(ms) => format_date(f, *ms),
            HeapObject::RegExp { source, flags } => {
                let source = if source.is_empty() { "(?:)" } else { source };
                write!(f, "/{}/{}", source, flags)
            }
            HeapObject::Set(_) => write!(f, "[object Set]"),
            HeapObject::Map(_) => write!(f, "[object Map]"),
            HeapObject::Error(message) if message.is_empty() => write!(f, "Error"),
            HeapObject::Error(message) => write!(f, "Error: {}", message),
            HeapObject::StringObject(s) => write!(f, "{}", s),
            HeapObject::NumberObject(n) => format_number(f, *n),
            HeapObject::BooleanObject(b) => write!(f, "{}", b),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Smi(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<std::string::String> for Value {
    fn from(s: std::string::String) -> Self {
        Value::String(s)
    }
}
