use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{BridgeError, Result};
use crate::payload::{SharedPayload, SUBJECT_KEY, TEXT_KEY};

/// Options controlling how mappings cross the transport boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Pretty-print encoded JSON
    pub pretty: bool,
    /// Reject missing or extra keys when decoding
    pub strict: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            strict: true,
        }
    }
}

/// Encode a payload's mapping as a JSON object
pub fn encode(payload: &SharedPayload, options: &CodecOptions) -> Result<String> {
    let mapping = payload.to_mapping();
    let encoded = if options.pretty {
        serde_json::to_string_pretty(&mapping)?
    } else {
        serde_json::to_string(&mapping)?
    };
    trace!("Encoded payload: {} bytes", encoded.len());
    Ok(encoded)
}

/// Decode a JSON mapping back into a payload
pub fn decode(input: &str, options: &CodecOptions) -> Result<SharedPayload> {
    let value: Value = serde_json::from_str(input)?;
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(BridgeError::NotAnObject {
                found: type_name(&other),
            })
        }
    };

    for key in object.keys() {
        if key != TEXT_KEY && key != SUBJECT_KEY {
            if options.strict {
                return Err(BridgeError::UnexpectedKey { key: key.clone() });
            }
            debug!("Ignoring unexpected key: {}", key);
        }
    }

    let text = read_field(&object, TEXT_KEY, options.strict)?;
    let subject = read_field(&object, SUBJECT_KEY, options.strict)?;
    Ok(SharedPayload::new(text, subject))
}

fn read_field(object: &Map<String, Value>, key: &'static str, strict: bool) -> Result<Option<String>> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) => Ok(None),
        Some(other) => Err(BridgeError::InvalidValue {
            key,
            found: type_name(other),
        }),
        None if strict => Err(BridgeError::MissingKey { key }),
        None => {
            debug!("Key `{}` missing, treating as absent", key);
            Ok(None)
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
