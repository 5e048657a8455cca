//! Decoding JSON literals into values
//!
//! Plain JSON maps directly onto [`Value`]. Kinds JSON cannot express are
//! written as single-key objects whose key is a `$`-marker:
//!
//! | Literal                                 | Value                    |
//! |-----------------------------------------|--------------------------|
//! | `{"$undefined": null}`                  | `undefined`              |
//! | `{"$number": "NaN"}`                    | `NaN` (also `Infinity`)  |
//! | `{"$bigint": "123"}`                    | `123n`                   |
//! | `{"$symbol": "id"}`                     | `Symbol("id")`           |
//! | `{"$function": "f"}`                    | `function f() {}`        |
//! | `{"$date": 0}`                          | `new Date(0)`            |
//! | `{"$regexp": ["a+", "g"]}`              | `/a+/g`                  |
//! | `{"$set": [1, 2]}`                      | `new Set([1, 2])`        |
//! | `{"$map": [["k", 1]]}`                  | `new Map([["k", 1]])`    |
//! | `{"$error": "boom"}`                    | `new Error("boom")`      |
//! | `{"$string": "12"}`                     | `new String("12")`       |
//! | `{"$number_object": 1}`                 | `new Number(1)`          |
//! | `{"$boolean_object": true}`             | `new Boolean(true)`      |
//!
//! Objects with any other `$` key are ordinary objects.

use chrono::DateTime;
use core_types::Value;
use num_bigint::BigInt;
use serde_json::{Map, Value as Json};

use crate::error::{CliError, CliResult};

const REGEXP_FLAGS: &str = "dgimsuvy";

/// Parses a JSON array into the sequence of values it denotes.
///
/// # Errors
/// Returns `CliError::Json` for malformed JSON, `CliError::NotASequence` when
/// the top level is not an array, and `CliError::Literal` for a bad marker.
///
/// # Example
/// ```
/// use type_cli::literal::parse_sequence;
///
/// let values = parse_sequence(r#"[true, null, {"$number": "NaN"}]"#).unwrap();
/// assert_eq!(values.len(), 3);
/// ```
pub fn parse_sequence(source: &str) -> CliResult<Vec<Value>> {
    let json: Json = serde_json::from_str(source)?;
    match json {
        Json::Array(items) => items.iter().map(decode).collect(),
        _ => Err(CliError::NotASequence),
    }
}

/// Decodes a single JSON literal.
pub fn decode(json: &Json) -> CliResult<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Boolean(*b)),
        Json::Number(n) => Ok(Value::number(n.as_f64().unwrap_or(f64::NAN))),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => Ok(Value::array(decode_all(items)?)),
        Json::Object(map) => {
            if let Some(value) = decode_marker(map) {
                return value;
            }
            let properties = map
                .iter()
                .map(|(k, v)| Ok((k.clone(), decode(v)?)))
                .collect::<CliResult<Vec<_>>>()?;
            Ok(Value::object(properties))
        }
    }
}

fn decode_all(items: &[Json]) -> CliResult<Vec<Value>> {
    items.iter().map(decode).collect()
}

/// Returns `None` unless `map` is a single known `$`-marker.
fn decode_marker(map: &Map<String, Json>) -> Option<CliResult<Value>> {
    if map.len() != 1 {
        return None;
    }
    let (key, payload) = map.iter().next()?;
    let value = match key.as_str() {
        "$undefined" => Ok(Value::Undefined),
        "$number" => decode_number(key, payload).map(Value::number),
        "$bigint" => decode_bigint(payload),
        "$symbol" => match payload {
            Json::String(s) => Ok(Value::symbol(Some(s.as_str()))),
            Json::Null => Ok(Value::symbol(None)),
            _ => Err(invalid(key, "a string or null")),
        },
        "$function" => match payload {
            Json::String(name) => Ok(Value::function(name.clone())),
            _ => Err(invalid(key, "a function name")),
        },
        "$date" => decode_date(payload).map(Value::date),
        "$regexp" => decode_regexp(payload),
        "$set" => match payload {
            Json::Array(items) => decode_all(items).map(Value::set),
            _ => Err(invalid(key, "an array")),
        },
        "$map" => decode_map(payload),
        "$error" => match payload {
            Json::String(message) => Ok(Value::error(message.clone())),
            _ => Err(invalid(key, "a message string")),
        },
        "$string" => match payload {
            Json::String(s) => Ok(Value::string_object(s.clone())),
            _ => Err(invalid(key, "a string")),
        },
        "$number_object" => decode_number(key, payload).map(Value::number_object),
        "$boolean_object" => match payload {
            Json::Bool(b) => Ok(Value::boolean_object(*b)),
            _ => Err(invalid(key, "a boolean")),
        },
        _ => return None,
    };
    Some(value)
}

fn invalid(marker: &str, expected: &str) -> CliError {
    CliError::Literal(format!("{} expects {}", marker, expected))
}

fn decode_number(marker: &str, payload: &Json) -> CliResult<f64> {
    let expected = "a number, \"NaN\", \"Infinity\" or \"-Infinity\"";
    match payload {
        Json::Number(n) => Ok(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" | "+Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => other
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| invalid(marker, expected)),
        },
        _ => Err(invalid(marker, expected)),
    }
}

fn decode_bigint(payload: &Json) -> CliResult<Value> {
    let parsed = match payload {
        Json::String(s) => s.trim().parse::<BigInt>().ok(),
        Json::Number(n) => n
            .as_i64()
            .map(BigInt::from)
            .or_else(|| n.as_u64().map(BigInt::from)),
        _ => None,
    };
    parsed
        .map(Value::BigInt)
        .ok_or_else(|| invalid("$bigint", "an integer or a string of digits"))
}

fn decode_date(payload: &Json) -> CliResult<f64> {
    match payload {
        Json::Number(n) => Ok(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|date| date.timestamp_millis() as f64)
            .map_err(|e| CliError::Literal(format!("$date '{}' is not RFC 3339: {}", s, e))),
        _ => Err(invalid("$date", "epoch milliseconds or an RFC 3339 string")),
    }
}

fn decode_regexp(payload: &Json) -> CliResult<Value> {
    let (source, flags) = match payload {
        Json::String(source) => (source.as_str(), ""),
        Json::Array(parts) => match parts.as_slice() {
            [Json::String(source)] => (source.as_str(), ""),
            [Json::String(source), Json::String(flags)] => (source.as_str(), flags.as_str()),
            _ => return Err(invalid("$regexp", "a pattern or [pattern, flags]")),
        },
        _ => return Err(invalid("$regexp", "a pattern or [pattern, flags]")),
    };

    for (i, flag) in flags.char_indices() {
        if !REGEXP_FLAGS.contains(flag) || flags[..i].contains(flag) {
            return Err(CliError::Literal(format!(
                "invalid regular expression flags '{}'",
                flags
            )));
        }
    }

    // Flags only matter for parsing when they are i, m, s, u or v
    regress::Regex::with_flags(source, flags)
        .map_err(|e| CliError::Literal(format!("invalid regular expression /{}/: {}", source, e)))?;

    Ok(Value::regexp(source, flags))
}

fn decode_map(payload: &Json) -> CliResult<Value> {
    let Json::Array(entries) = payload else {
        return Err(invalid("$map", "an array of [key, value] pairs"));
    };
    let entries = entries
        .iter()
        .map(|entry| match entry {
            Json::Array(pair) if pair.len() == 2 => Ok((decode(&pair[0])?, decode(&pair[1])?)),
            _ => Err(invalid("$map", "an array of [key, value] pairs")),
        })
        .collect::<CliResult<Vec<_>>>()?;
    Ok(Value::map(entries))
}
