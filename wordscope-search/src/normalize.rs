//! Normalisation of untrusted response payloads into [`ResultRecord`]s.
//!
//! The service is expected to answer with a JSON array of objects carrying
//! optional `word`, `score` and `tags`, but nothing about that shape is
//! trusted. [`normalize`] is total: every input yields a well-formed list.

use serde_json::Value;

use crate::types::ResultRecord;

/// Tag appended to every record produced by the degraded fallback lookup.
pub const FALLBACK_TAG: &str = "fallback_search";

/// Word used when a record has no usable `word` field.
pub const UNKNOWN_WORD: &str = "Unknown";

/// Normalise a raw payload.
///
/// A non-array payload is treated as a one-element array. For each item a
/// missing or empty `word` becomes `"Unknown"`, a non-numeric `score` becomes
/// 0 and a missing or non-array `tags` becomes empty. Non-string entries
/// inside `tags` are dropped.
pub fn normalize(payload: &Value) -> Vec<ResultRecord> {
    match payload {
        Value::Array(items) => items.iter().map(normalize_item).collect(),
        single => vec![normalize_item(single)],
    }
}

/// Normalise a payload obtained through the fallback path, marking every
/// record with [`FALLBACK_TAG`].
pub fn normalize_fallback(payload: &Value) -> Vec<ResultRecord> {
    let mut records = normalize(payload);
    for record in &mut records {
        record.tags.push(FALLBACK_TAG.to_owned());
    }
    records
}

fn normalize_item(item: &Value) -> ResultRecord {
    let word = item
        .get("word")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .unwrap_or(UNKNOWN_WORD)
        .to_owned();

    let score = item
        .get("score")
        .and_then(Value::as_f64)
        .filter(|s| s.is_finite())
        .unwrap_or(0.0);

    let tags = item
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    ResultRecord { word, score, tags }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_list_is_preserved() {
        let payload = json!([
            {"word": "tinnitus", "score": 51691, "tags": ["syn", "n"]},
            {"word": "ring", "score": 100.5, "tags": []}
        ]);
        let records = normalize(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].word, "tinnitus");
        assert!((records[0].score - 51_691.0).abs() < f64::EPSILON);
        assert_eq!(records[0].tags, vec!["syn", "n"]);
        assert!((records[1].score - 100.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_list_yields_empty_vec() {
        assert!(normalize(&json!([])).is_empty());
    }

    #[test]
    fn single_object_is_wrapped() {
        let records = normalize(&json!({"word": "alone", "score": 3}));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "alone");
        assert!(records[0].tags.is_empty());
    }

    #[test]
    fn missing_fields_are_filled() {
        let records = normalize(&json!([{}]));
        assert_eq!(
            records,
            vec![ResultRecord {
                word: "Unknown".into(),
                score: 0.0,
                tags: vec![],
            }]
        );
    }

    #[test]
    fn wrongly_typed_fields_are_replaced() {
        let records = normalize(&json!([
            {"word": 42, "score": "high", "tags": "adj"},
            {"word": "", "score": null, "tags": ["ok", 7, null]}
        ]));
        assert_eq!(records[0].word, "Unknown");
        assert_eq!(records[0].score, 0.0);
        assert!(records[0].tags.is_empty());
        assert_eq!(records[1].word, "Unknown");
        assert_eq!(records[1].tags, vec!["ok"]);
    }

    #[test]
    fn scalar_payloads_become_single_placeholder_record() {
        for payload in [json!(null), json!("oops"), json!(12), json!(true)] {
            let records = normalize(&payload);
            assert_eq!(records.len(), 1, "{payload}");
            assert_eq!(records[0].word, "Unknown");
            assert_eq!(records[0].score, 0.0);
            assert!(records[0].tags.is_empty());
        }
    }

    #[test]
    fn list_of_scalars_is_total() {
        let records = normalize(&json!([1, "two", null]));
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.word == "Unknown"));
    }

    #[test]
    fn fallback_marks_every_record() {
        let records = normalize_fallback(&json!([
            {"word": "mallard", "score": 10, "tags": ["n"]},
            {"word": "bird"}
        ]));
        assert_eq!(records[0].tags, vec!["n", FALLBACK_TAG]);
        assert_eq!(records[1].tags, vec![FALLBACK_TAG]);
    }

    #[test]
    fn fallback_on_empty_list_stays_empty() {
        assert!(normalize_fallback(&json!([])).is_empty());
    }
}
