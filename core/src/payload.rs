use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Mapping key holding the primary shared content
pub const TEXT_KEY: &str = "text";

/// Mapping key holding the subject line
pub const SUBJECT_KEY: &str = "subject";

/// Every key a mapping carries, text first
pub const KEYS: [&str; 2] = [TEXT_KEY, SUBJECT_KEY];

/// Text content received from a single share event.
///
/// Both fields are independently optional and stored exactly as the platform
/// handed them over. There are no setters: a newer share replaces the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedPayload {
    text: Option<String>,
    subject: Option<String>,
}

impl SharedPayload {
    /// Create a payload from the raw share values
    pub fn new<T, S>(text: Option<T>, subject: Option<S>) -> Self
    where
        T: Into<String>,
        S: Into<String>,
    {
        Self {
            text: text.map(Into::into),
            subject: subject.map(Into::into),
        }
    }

    /// Primary shared content (a URL, a message body, ...)
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Subject line that came with the share
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// True when the share carried neither text nor subject
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.subject.is_none()
    }

    /// Export the payload as its two-key transport mapping
    pub fn to_mapping(&self) -> SharedPayloadMap {
        SharedPayloadMap {
            text: self.text.clone(),
            subject: self.subject.clone(),
        }
    }
}

/// Transport form of a [`SharedPayload`].
///
/// Always holds exactly the `text` and `subject` keys. Absent values are
/// serialized as `null`, never dropped. Deserializing requires both keys
/// and rejects any other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SharedPayloadMap {
    #[serde(deserialize_with = "required_key")]
    pub text: Option<String>,
    #[serde(deserialize_with = "required_key")]
    pub subject: Option<String>,
}

// A field with `deserialize_with` is not defaulted to `None` when missing.
fn required_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}

impl SharedPayloadMap {
    pub fn keys(&self) -> [&'static str; 2] {
        KEYS
    }

    /// Look up a key. `None` means the key is unknown, `Some(None)` means the
    /// key is present with an absent value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        match key {
            TEXT_KEY => Some(self.text.as_deref()),
            SUBJECT_KEY => Some(self.subject.as_deref()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        [
            (TEXT_KEY, self.text.as_deref()),
            (SUBJECT_KEY, self.subject.as_deref()),
        ]
        .into_iter()
    }

    /// Generic string-keyed form for consumers that want a plain map
    pub fn into_btree_map(self) -> BTreeMap<String, Option<String>> {
        let mut map = BTreeMap::new();
        map.insert(TEXT_KEY.to_string(), self.text);
        map.insert(SUBJECT_KEY.to_string(), self.subject);
        map
    }
}

impl From<SharedPayload> for SharedPayloadMap {
    fn from(payload: SharedPayload) -> Self {
        Self {
            text: payload.text,
            subject: payload.subject,
        }
    }
}

impl From<SharedPayloadMap> for SharedPayload {
    fn from(map: SharedPayloadMap) -> Self {
        Self {
            text: map.text,
            subject: map.subject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<(Option<&'static str>, Option<&'static str>)> {
        vec![
            (None, None),
            (Some("hello"), None),
            (None, Some("re: hi")),
            (Some("hello"), Some("re: hi")),
        ]
    }

    #[test]
    fn test_mapping_matches_fields() {
        for (text, subject) in samples() {
            let mapping = SharedPayload::new(text, subject).to_mapping();
            assert_eq!(mapping.get("text"), Some(text));
            assert_eq!(mapping.get("subject"), Some(subject));
        }
    }

    #[test]
    fn test_mapping_always_has_both_keys() {
        for (text, subject) in samples() {
            let map = SharedPayload::new(text, subject).to_mapping().into_btree_map();
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["subject", "text"]);
        }
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let payload = SharedPayload::new(Some("hello"), Some("re: hi"));
        assert_eq!(payload.to_mapping(), payload.to_mapping());
    }

    #[test]
    fn test_url_share() {
        let map = SharedPayload::new(Some("https://example.com"), None::<String>)
            .to_mapping()
            .into_btree_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["text"].as_deref(), Some("https://example.com"));
        assert_eq!(map["subject"], None);
    }

    #[test]
    fn test_empty_share() {
        let payload = SharedPayload::new(None::<String>, None::<String>);
        assert!(payload.is_empty());
        let mapping = payload.to_mapping();
        let pairs: Vec<_> = mapping.iter().collect();
        assert_eq!(pairs, vec![("text", None), ("subject", None)]);
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let payload = SharedPayload::new(Some("  padded \n"), Some(""));
        assert_eq!(payload.text(), Some("  padded \n"));
        assert_eq!(payload.subject(), Some(""));
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_unknown_key() {
        let mapping = SharedPayload::new(Some("a"), Some("b")).to_mapping();
        assert_eq!(mapping.get("body"), None);
        assert_eq!(mapping.keys(), ["text", "subject"]);
    }

    #[test]
    fn test_serialize_keeps_null_values() {
        let mapping = SharedPayload::new(Some("hello"), None::<String>).to_mapping();
        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(json, r#"{"text":"hello","subject":null}"#);
    }

    #[test]
    fn test_deserialize_requires_exact_keys() {
        let mapping: SharedPayloadMap =
            serde_json::from_str(r#"{"text":"hello","subject":null}"#).unwrap();
        assert_eq!(mapping, SharedPayload::new(Some("hello"), None::<String>).to_mapping());

        assert!(serde_json::from_str::<SharedPayloadMap>("{}").is_err());
        assert!(serde_json::from_str::<SharedPayloadMap>(r#"{"text":"a"}"#).is_err());
        assert!(serde_json::from_str::<SharedPayloadMap>(r#"{"text":"a","subject":null,"extra":1}"#).is_err());
    }

    #[test]
    fn test_conversions_are_lossless() {
        let payload = SharedPayload::new(Some("hello"), Some("re: hi"));
        let mapping: SharedPayloadMap = payload.clone().into();
        assert_eq!(SharedPayload::from(mapping), payload);
    }
}
