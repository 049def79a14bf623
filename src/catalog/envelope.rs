//! Upstream response envelopes
//!
//! Every endpoint wraps its payload in `{status: "success" | ..., data: ...}`,
//! but the detail endpoint has shipped the record at several different nesting
//! depths over time. List payloads are decoded with typed defaults (a missing
//! `data.items` is an empty list, not an error); the detail payload is located
//! by an ordered sequence of extraction strategies, stopping at the first
//! candidate that holds a detail record.

use serde::Deserialize;
use serde_json::Value;

use super::{Country, MovieDetail, MovieSummary};

/// Envelope status value signalling a usable payload
pub const STATUS_SUCCESS: &str = "success";

/// Envelope around the list endpoints (search, genre, country, category)
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: ListData,
}

impl ListEnvelope {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// `data` object of a list envelope; `items` defaults to empty when absent
#[derive(Debug, Default, Deserialize)]
pub struct ListData {
    #[serde(default)]
    pub items: Vec<MovieSummary>,
}

/// Envelope around the country-list endpoint (`data` is the array itself)
#[derive(Debug, Deserialize)]
pub struct CountryEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Vec<Country>,
}

impl CountryEnvelope {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Whether a raw envelope carries `status: "success"`
pub fn is_success_envelope(envelope: &Value) -> bool {
    envelope.get("status").and_then(Value::as_str) == Some(STATUS_SUCCESS)
}

/// Locates and decodes the detail payload inside a raw envelope
///
/// Candidates are tried in a fixed fallback order: `data.item`, `item`, `data`,
/// then the envelope root. A candidate counts as a detail record only if it is
/// an object carrying a `slug` string; everything decodes with defaults, so the
/// slug check is what keeps a wrong-shaped `data` object from shadowing a
/// deeper match.
pub fn extract_detail(envelope: &Value) -> Option<MovieDetail> {
    let candidates = [
        envelope.pointer("/data/item"),
        envelope.get("item"),
        envelope.get("data"),
        Some(envelope),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter(|candidate| looks_like_detail(candidate))
        .find_map(|candidate| serde_json::from_value(candidate.clone()).ok())
}

fn looks_like_detail(value: &Value) -> bool {
    value
        .get("slug")
        .and_then(Value::as_str)
        .is_some_and(|slug| !slug.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_BODY: &str = r#"{
        "name": "Tây Du Ký",
        "slug": "tay-du-ky",
        "origin_name": "Journey to the West",
        "content": "<p>Bốn thầy trò sang Tây Trúc thỉnh kinh.</p>",
        "year": 1986,
        "episodes": [
            {"server_name": "Vietsub #1", "server_data": [
                {"name": "Tập 01", "slug": "tap-01", "filename": "",
                 "link_embed": "https://player.example/e/1",
                 "link_m3u8": "https://cdn.example/1.m3u8"}
            ]}
        ]
    }"#;

    fn expected_detail() -> MovieDetail {
        serde_json::from_str(DETAIL_BODY).expect("fixture should decode")
    }

    #[test]
    fn test_extract_detail_under_data_item() {
        let envelope: Value = serde_json::from_str(&format!(
            r#"{{"status": "success", "data": {{"item": {}}}}}"#,
            DETAIL_BODY
        ))
        .unwrap();

        assert_eq!(extract_detail(&envelope), Some(expected_detail()));
    }

    #[test]
    fn test_extract_detail_under_item() {
        let envelope: Value = serde_json::from_str(&format!(
            r#"{{"status": "success", "item": {}}}"#,
            DETAIL_BODY
        ))
        .unwrap();

        assert_eq!(extract_detail(&envelope), Some(expected_detail()));
    }

    #[test]
    fn test_extract_detail_under_data() {
        let envelope: Value = serde_json::from_str(&format!(
            r#"{{"status": "success", "data": {}}}"#,
            DETAIL_BODY
        ))
        .unwrap();

        assert_eq!(extract_detail(&envelope), Some(expected_detail()));
    }

    #[test]
    fn test_all_three_nestings_decode_to_the_same_record() {
        let shapes = [
            format!(r#"{{"status": "success", "data": {{"item": {}}}}}"#, DETAIL_BODY),
            format!(r#"{{"status": "success", "item": {}}}"#, DETAIL_BODY),
            format!(r#"{{"status": "success", "data": {}}}"#, DETAIL_BODY),
        ];

        let decoded: Vec<MovieDetail> = shapes
            .iter()
            .map(|s| {
                let envelope: Value = serde_json::from_str(s).unwrap();
                extract_detail(&envelope).expect("shape should yield a detail")
            })
            .collect();

        assert_eq!(decoded[0], decoded[1]);
        assert_eq!(decoded[1], decoded[2]);
        assert_eq!(decoded[0].slug, "tay-du-ky");
        assert_eq!(decoded[0].episodes[0].server_data[0].link_m3u8, "https://cdn.example/1.m3u8");
    }

    #[test]
    fn test_wrong_shaped_data_does_not_shadow_item() {
        // data holds list-style content while the record sits under item
        let envelope: Value = serde_json::from_str(&format!(
            r#"{{"status": "success", "data": {{"items": []}}, "item": {}}}"#,
            DETAIL_BODY
        ))
        .unwrap();

        let detail = extract_detail(&envelope).expect("should fall through to item");
        assert_eq!(detail.slug, "tay-du-ky");
    }

    #[test]
    fn test_extract_detail_without_payload_is_none() {
        let envelope: Value =
            serde_json::from_str(r#"{"status": "success", "data": {"items": []}}"#).unwrap();
        assert!(extract_detail(&envelope).is_none());

        let empty: Value = serde_json::from_str("{}").unwrap();
        assert!(extract_detail(&empty).is_none());
    }

    #[test]
    fn test_list_envelope_missing_items_defaults_to_empty() {
        let envelope: ListEnvelope =
            serde_json::from_str(r#"{"status": "success", "data": {}}"#).unwrap();
        assert!(envelope.is_success());
        assert!(envelope.data.items.is_empty());

        let no_data: ListEnvelope = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(no_data.data.items.is_empty());
    }

    #[test]
    fn test_list_envelope_failure_status() {
        let envelope: ListEnvelope =
            serde_json::from_str(r#"{"status": "error", "message": "not found"}"#).unwrap();
        assert!(!envelope.is_success());

        let missing_status: ListEnvelope = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(!missing_status.is_success());
    }

    #[test]
    fn test_is_success_envelope_on_raw_values() {
        let ok: Value = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(is_success_envelope(&ok));

        let err: Value = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(!is_success_envelope(&err));

        let none: Value = serde_json::from_str("{}").unwrap();
        assert!(!is_success_envelope(&none));
    }

    #[test]
    fn test_country_envelope_decodes_data_array() {
        let envelope: CountryEnvelope = serde_json::from_str(
            r#"{"status": "success", "data": [
                {"_id": "q1", "name": "Hàn Quốc", "slug": "han-quoc"},
                {"_id": "q2", "name": "Trung Quốc", "slug": "trung-quoc"}
            ]}"#,
        )
        .unwrap();

        assert!(envelope.is_success());
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[1].slug, "trung-quoc");
    }
}
