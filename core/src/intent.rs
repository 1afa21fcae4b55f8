use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{BridgeError, Result};
use crate::payload::SharedPayload;

pub const ACTION_SEND: &str = "android.intent.action.SEND";
pub const EXTRA_TEXT: &str = "android.intent.extra.TEXT";
pub const EXTRA_SUBJECT: &str = "android.intent.extra.SUBJECT";

/// A platform share event as delivered to the receiving application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareIntent {
    pub action: String,
    pub mime_type: Option<String>,
    pub extras: BTreeMap<String, String>,
}

impl ShareIntent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            mime_type: None,
            extras: BTreeMap::new(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// MIME types compare case-insensitively; `*/*` counts as text.
    fn is_text(&self) -> bool {
        self.mime_type.as_deref().map_or(true, |mime| {
            let mime = mime.to_ascii_lowercase();
            mime.starts_with("text/") || mime == "*/*"
        })
    }
}

impl SharedPayload {
    /// Build a payload from a share intent.
    ///
    /// Returns `None` for anything other than a send intent carrying text.
    pub fn from_intent(intent: &ShareIntent) -> Option<Self> {
        if intent.action != ACTION_SEND {
            debug!("Ignoring intent with action {}", intent.action);
            return None;
        }
        if !intent.is_text() {
            debug!("Ignoring non-text share: {:?}", intent.mime_type);
            return None;
        }

        Some(Self::new(
            intent.extras.get(EXTRA_TEXT).cloned(),
            intent.extras.get(EXTRA_SUBJECT).cloned(),
        ))
    }
}

/// Parse a `KEY=VALUE` extra. Only the first `=` splits, so values may contain more.
pub fn parse_extra(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(BridgeError::InvalidExtra {
            input: input.to_string(),
        }),
    }
}
