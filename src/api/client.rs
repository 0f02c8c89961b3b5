//! HTTP API Client
//!
//! Functions for communicating with the explorer stats API.

use gloo_net::http::Request;

use crate::state::global::Counter;

/// Stats endpoint, routed through the public CORS proxy.
pub const STATS_URL: &str =
    "https://cors-anywhere.herokuapp.com/https://explorer-stats.testnet.citrea.xyz/api/v1/counters";

/// Response envelope for the counters endpoint.
#[derive(Debug, serde::Deserialize)]
struct CountersResponse {
    counters: Vec<Counter>,
}

/// Fetch the full counter list, in the order the endpoint serves it.
///
/// A single attempt per call: no retries, no timeout, no backoff. The
/// error string is a diagnostic for the console; the UI renders its own
/// fixed message instead of the cause.
pub async fn fetch_counters() -> Result<Vec<Counter>, String> {
    let response = Request::get(STATS_URL)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let result: CountersResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.counters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_counter() {
        let body = r#"{
            "counters": [
                {
                    "id": "1",
                    "value": "1000",
                    "title": "Blocks",
                    "units": "blk",
                    "description": "Block height"
                }
            ]
        }"#;

        let response: CountersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.counters.len(), 1);

        let counter = &response.counters[0];
        assert_eq!(counter.id, "1");
        assert_eq!(counter.value, "1000");
        assert_eq!(counter.title, "Blocks");
        assert_eq!(counter.units.as_deref(), Some("blk"));
        assert_eq!(counter.description, "Block height");
    }

    #[test]
    fn units_absent_or_null_are_none() {
        let body = r#"{
            "counters": [
                {"id": "a", "value": "1", "title": "A", "description": "no units field"},
                {"id": "b", "value": "2", "title": "B", "units": null, "description": "null units"}
            ]
        }"#;

        let response: CountersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.counters[0].units, None);
        assert_eq!(response.counters[1].units, None);
    }

    #[test]
    fn empty_counters_parses() {
        let response: CountersResponse = serde_json::from_str(r#"{"counters": []}"#).unwrap();
        assert!(response.counters.is_empty());
    }

    #[test]
    fn preserves_wire_order() {
        let body = r#"{
            "counters": [
                {"id": "z", "value": "3", "title": "Z", "description": ""},
                {"id": "a", "value": "1", "title": "A", "description": ""},
                {"id": "m", "value": "2", "title": "M", "description": ""}
            ]
        }"#;

        let response: CountersResponse = serde_json::from_str(body).unwrap();
        let ids: Vec<&str> = response.counters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn rejects_malformed_body() {
        assert!(serde_json::from_str::<CountersResponse>("{}").is_err());
        assert!(serde_json::from_str::<CountersResponse>("not json").is_err());
        assert!(serde_json::from_str::<CountersResponse>(r#"{"counters": "nope"}"#).is_err());
    }
}
