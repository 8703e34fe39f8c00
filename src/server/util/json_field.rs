//! Conversion between list-valued fields and their string-encoded storage form.
//!
//! The `cars.images` and `cars.features` columns hold JSON arrays serialized to text.
//! Rows written by older clients may hold plain comma separated strings instead, so
//! decoding falls back to splitting on commas. Decoding never fails.

use serde_json::Value;

use crate::model::field::ListField;

/// Encodes a list-valued input for storage.
///
/// Arrays are JSON-encoded; raw strings pass through unchanged.
///
/// # Arguments
/// - `value` - The field as received from the client
///
/// # Returns
/// - `Some(String)` - Column value to store
/// - `None` - Field was absent, store `NULL`
pub fn encode(value: Option<ListField>) -> Option<String> {
    match value? {
        // Serializing a Vec<String> cannot fail
        ListField::Items(items) => Some(Value::from(items).to_string()),
        ListField::Raw(raw) => Some(raw),
    }
}

/// Decodes a stored column value into a list.
///
/// # Arguments
/// - `stored` - Column value, `None` for `NULL`
///
/// # Returns
/// - Decoded array elements when the value is a JSON array
/// - Comma split pieces, trimmed and without empties, for a JSON string or any other
///   content
/// - Empty vector for `NULL`
pub fn decode(stored: Option<&str>) -> Vec<String> {
    let Some(stored) = stored else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(stored) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Ok(Value::String(inner)) => split_list(&inner),
        _ => split_list(stored),
    }
}

/// Drops blank entries from a list input, leaving raw strings untouched.
pub fn without_blank_items(value: Option<ListField>) -> Option<ListField> {
    value.map(|field| match field {
        ListField::Items(items) => ListField::Items(
            items
                .into_iter()
                .filter(|item| !item.trim().is_empty())
                .collect(),
        ),
        raw => raw,
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn decodes_what_encode_produced() {
        let original = items(&["GPS", "Bluetooth, USB", " heated seats "]);

        let stored = encode(Some(ListField::Items(original.clone())));

        assert_eq!(decode(stored.as_deref()), original);
    }

    #[test]
    fn falls_back_to_comma_split_for_invalid_json() {
        assert_eq!(decode(Some("a, b")), items(&["a", "b"]));
        assert_eq!(decode(Some("GPS,,  AC ,")), items(&["GPS", "AC"]));
    }

    #[test]
    fn splits_json_scalars() {
        assert_eq!(decode(Some("\"a, b\"")), items(&["a", "b"]));
        assert_eq!(decode(Some("42")), items(&["42"]));
    }

    #[test]
    fn renders_non_string_array_elements() {
        assert_eq!(decode(Some("[1, \"x\", true]")), items(&["1", "x", "true"]));
    }

    #[test]
    fn absent_or_empty_decodes_to_empty_list() {
        assert!(decode(None).is_empty());
        assert!(decode(Some("")).is_empty());
        assert!(decode(Some("[]")).is_empty());
    }

    #[test]
    fn raw_strings_pass_through_encode() {
        assert_eq!(
            encode(Some(ListField::Raw("a, b".to_string()))),
            Some("a, b".to_string())
        );
        assert_eq!(encode(None), None);
    }

    #[test]
    fn blank_items_are_dropped() {
        let cleaned = without_blank_items(Some(ListField::Items(items(&["GPS", " ", "", "AC"]))));

        assert_eq!(cleaned, Some(ListField::Items(items(&["GPS", "AC"]))));
    }
}
