//! Catalog payload parsing.
//!
//! The payload is untrusted: anything that is not a JSON array fails the whole
//! load, but individual malformed records are skipped so the rest of the
//! catalog stays available.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{ArcadeError, Result};
use crate::models::{GameEntry, GameId};

/// Result of parsing a catalog payload.
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    /// Well-formed entries, in payload order.
    pub entries: Vec<GameEntry>,
    /// Records that were excluded, with the reason.
    pub skipped: Vec<SkippedRecord>,
}

/// A payload record that did not make it into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the record in the payload array.
    pub index: usize,
    pub reason: String,
}

/// Parses a catalog payload into entries.
pub fn parse_catalog(payload: &[u8]) -> Result<ParsedCatalog> {
    let value: Value = serde_json::from_slice(payload)
        .map_err(|e| ArcadeError::MalformedCatalog(format!("Invalid JSON: {}", e)))?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(ArcadeError::MalformedCatalog(format!(
                "Expected a JSON array of games, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut parsed = ParsedCatalog::default();
    let mut seen = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        let entry = match parse_record(record) {
            Ok(entry) => entry,
            Err(reason) => {
                tracing::warn!(index, %reason, "Skipping malformed catalog record");
                parsed.skipped.push(SkippedRecord { index, reason });
                continue;
            }
        };

        if !seen.insert(entry.id.clone()) {
            let reason = format!("Duplicate id '{}'", entry.id);
            tracing::warn!(index, %reason, "Skipping catalog record");
            parsed.skipped.push(SkippedRecord { index, reason });
            continue;
        }

        parsed.entries.push(entry);
    }

    tracing::debug!(
        games = parsed.entries.len(),
        skipped = parsed.skipped.len(),
        "Parsed catalog payload"
    );

    Ok(parsed)
}

fn parse_record(record: Value) -> std::result::Result<GameEntry, String> {
    let fields = match record {
        Value::Object(fields) => fields,
        other => return Err(format!("Expected an object, found {}", json_kind(&other))),
    };

    let id = match fields.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err("Field 'id' must be a non-empty string or a number".to_string()),
        None => return Err("Missing field 'id'".to_string()),
    };

    let title = required_string(&fields, "title")?;
    if title.trim().is_empty() {
        return Err("Field 'title' must not be empty".to_string());
    }

    let description = match fields.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err("Field 'description' must be a string".to_string()),
    };

    Ok(GameEntry {
        id: GameId::new(id),
        title,
        description,
        thumbnail: required_string(&fields, "thumbnail")?,
        url: required_string(&fields, "url")?,
    })
}

fn required_string(fields: &Map<String, Value>, name: &str) -> std::result::Result<String, String> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(format!("Field '{}' must be a string", name)),
        None => Err(format!("Missing field '{}'", name)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_catalog() {
        let payload = r#"[
            {"id": "a", "title": "Snake Classic", "description": "Eat and grow",
             "thumbnail": "a.png", "url": "https://a"},
            {"id": "b", "title": "Tetris", "description": "Stack blocks",
             "thumbnail": "b.png", "url": "https://b"}
        ]"#;

        let parsed = parse_catalog(payload.as_bytes()).unwrap();
        assert_eq!(parsed.entries.len(), 2);
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.entries[0].id, "a");
        assert_eq!(parsed.entries[1].description, "Stack blocks");
    }

    #[test]
    fn test_empty_array_is_valid() {
        let parsed = parse_catalog(b"[]").unwrap();
        assert!(parsed.entries.is_empty());
    }

    #[test]
    fn test_numeric_ids_are_normalised() {
        let payload = r#"[{"id": 7, "title": "2048", "thumbnail": "t", "url": "u"}]"#;
        let parsed = parse_catalog(payload.as_bytes()).unwrap();
        assert_eq!(parsed.entries[0].id, "7");
        assert_eq!(parsed.entries[0].description, "");
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let payload = r#"[
            {"id": "a", "title": "Ok", "thumbnail": "t", "url": "u"},
            {"id": "b", "thumbnail": "t", "url": "u"},
            {"id": "c", "title": "", "thumbnail": "t", "url": "u"},
            {"id": "d", "title": "No url", "thumbnail": "t"},
            "not an object",
            {"id": "e", "title": "Also ok", "thumbnail": "t", "url": "u"}
        ]"#;

        let parsed = parse_catalog(payload.as_bytes()).unwrap();
        let ids: Vec<&str> = parsed.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "e"]);

        let skipped: Vec<usize> = parsed.skipped.iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![1, 2, 3, 4]);
        assert!(parsed.skipped[0].reason.contains("title"));
        assert!(parsed.skipped[2].reason.contains("url"));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let payload = r#"[
            {"id": "a", "title": "First", "thumbnail": "t", "url": "u"},
            {"id": "a", "title": "Second", "thumbnail": "t", "url": "u"}
        ]"#;

        let parsed = parse_catalog(payload.as_bytes()).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].title, "First");
        assert!(parsed.skipped[0].reason.contains("Duplicate"));
    }

    #[test]
    fn test_invalid_json_fails_the_load() {
        let err = parse_catalog(b"{not json").unwrap_err();
        assert!(matches!(err, ArcadeError::MalformedCatalog(_)));
    }

    #[test]
    fn test_non_array_fails_the_load() {
        let err = parse_catalog(br#"{"games": []}"#).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }
}
