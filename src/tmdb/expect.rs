// ============================================================================
// EXPECTATIONS - Assertions on API responses
// ============================================================================

use serde_json::Value;

use crate::error::ExpectationError;
use crate::session::ApiResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (JsonType::Null, Value::Null)
                | (JsonType::Bool, Value::Bool(_))
                | (JsonType::Number, Value::Number(_))
                | (JsonType::String, Value::String(_))
                | (JsonType::Array, Value::Array(_))
                | (JsonType::Object, Value::Object(_))
        )
    }

    fn name(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Bool => "a boolean",
            JsonType::Number => "a number",
            JsonType::String => "a string",
            JsonType::Array => "an array",
            JsonType::Object => "an object",
        }
    }
}

impl ApiResponse {
    pub fn expect_status(&self, expected: u16) -> Result<&Self, ExpectationError> {
        if self.status_code() == expected {
            Ok(self)
        } else {
            Err(ExpectationError::Status {
                expected,
                actual: self.status_code(),
                body: self.json.clone(),
            })
        }
    }

    /// The body contains `expected` (see [`json_contains`]).
    pub fn expect_json(&self, expected: &Value) -> Result<&Self, ExpectationError> {
        json_contains("$", &self.json, expected)?;
        Ok(self)
    }

    /// Every value selected by `path` contains `expected`.
    ///
    /// `path` is dot separated; a `*` segment fans out over an array, so
    /// `results.*` checks each element of `results`.
    pub fn expect_json_at(&self, path: &str, expected: &Value) -> Result<&Self, ExpectationError> {
        for (at, value) in select(&self.json, path)? {
            json_contains(&at, value, expected)?;
        }
        Ok(self)
    }

    pub fn expect_json_type(&self, path: &str, kind: JsonType) -> Result<&Self, ExpectationError> {
        for (at, value) in select(&self.json, path)? {
            if !kind.matches(value) {
                return Err(ExpectationError::WrongType {
                    path: at,
                    expected: kind.name(),
                });
            }
        }
        Ok(self)
    }

    /// The validation error names each of `fields`.
    ///
    /// Only `status_message`, `errors` and `error` are searched, and a field
    /// must appear as a whole word: `name` is not satisfied by `username` or
    /// by a `name` key elsewhere in the body.
    pub fn expect_fields_required(&self, fields: &[&str]) -> Result<&Self, ExpectationError> {
        let mut words = Vec::new();
        for key in ERROR_KEYS {
            if let Some(value) = self.json.get(key) {
                collect_words(value, &mut words);
            }
        }

        match fields.iter().find(|field| !words.contains(*field)) {
            None => Ok(self),
            Some(field) => Err(ExpectationError::Mismatch {
                path: "$".to_string(),
                expected: Value::String(format!("error mentioning required field `{}`", field)),
                actual: self.json.clone(),
            }),
        }
    }
}

/// Body keys that carry validation messages.
const ERROR_KEYS: [&str; 3] = ["status_message", "errors", "error"];

/// Identifier-like words from every string under `value`, object keys included.
fn collect_words<'a>(value: &'a Value, words: &mut Vec<&'a str>) {
    match value {
        Value::String(text) => split_words(text, words),
        Value::Array(items) => {
            for item in items {
                collect_words(item, words);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                split_words(key, words);
                collect_words(item, words);
            }
        }
        _ => {}
    }
}

fn split_words<'a>(text: &'a str, words: &mut Vec<&'a str>) {
    words.extend(
        text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty()),
    );
}

/// Recursive subset match.
///
/// Objects match when every expected key is present with a matching value;
/// extra keys in `actual` are ignored. Arrays must have the same length and
/// match element by element. Numbers compare by value, so `1` matches `1.0`.
pub fn json_contains(path: &str, actual: &Value, expected: &Value) -> Result<(), ExpectationError> {
    match (expected, actual) {
        (Value::Object(exp), Value::Object(act)) => {
            for (key, exp_value) in exp {
                let child = format!("{}.{}", path, key);
                match act.get(key) {
                    Some(act_value) => json_contains(&child, act_value, exp_value)?,
                    None => return Err(ExpectationError::MissingPath(child)),
                }
            }
            Ok(())
        }
        (Value::Array(exp), Value::Array(act)) if exp.len() == act.len() => {
            for (i, (e, a)) in exp.iter().zip(act).enumerate() {
                json_contains(&format!("{}[{}]", path, i), a, e)?;
            }
            Ok(())
        }
        (Value::Number(e), Value::Number(a)) if e.as_f64() == a.as_f64() => Ok(()),
        _ if expected == actual => Ok(()),
        _ => Err(ExpectationError::Mismatch {
            path: path.to_string(),
            expected: expected.clone(),
            actual: actual.clone(),
        }),
    }
}

fn select<'a>(root: &'a Value, path: &str) -> Result<Vec<(String, &'a Value)>, ExpectationError> {
    let mut current = vec![("$".to_string(), root)];

    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let mut next = Vec::new();
        for (at, value) in current {
            if segment == "*" {
                let items = value
                    .as_array()
                    .filter(|items| !items.is_empty())
                    .ok_or_else(|| ExpectationError::MissingPath(format!("{}.*", at)))?;
                next.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| (format!("{}[{}]", at, i), item)),
                );
            } else {
                let child = format!("{}.{}", at, segment);
                let found = match value {
                    Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                    _ => value.get(segment),
                };
                next.push((child.clone(), found.ok_or(ExpectationError::MissingPath(child))?));
            }
        }
        current = next;
    }

    Ok(current)
}
