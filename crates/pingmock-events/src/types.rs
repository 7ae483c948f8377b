use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One accepted ping. Immutable once stored; the payload is kept verbatim and
/// never inspected beyond JSON parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub received_at: DateTime<Utc>,
    pub path: String,
    pub remote_address: String,
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_keys() {
        let event = Event {
            received_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            path: "/ping".to_string(),
            remote_address: "127.0.0.1".to_string(),
            payload: json!({"lat": 1, "lon": 2}),
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["path"], "/ping");
        assert_eq!(value["remoteAddress"], "127.0.0.1");
        assert_eq!(value["payload"], json!({"lat": 1, "lon": 2}));
        let received_at: DateTime<Utc> = value["receivedAt"].as_str().unwrap().parse().unwrap();
        assert_eq!(received_at, event.received_at);
    }

    #[test]
    fn round_trips_non_object_payloads() {
        let event = Event {
            received_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            path: "/ping".to_string(),
            remote_address: "10.0.0.7".to_string(),
            payload: json!([1, "two", null]),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
