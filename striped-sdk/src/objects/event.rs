//! Event record delivered in webhook bodies.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A platform event, as carried in a webhook delivery body.
///
/// Unknown fields are ignored so newer API versions keep decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: CompactString,
    #[serde(rename = "type")]
    pub event_type: CompactString,
    #[serde(default)]
    pub livemode: bool,
    /// Creation time, seconds since the epoch.
    #[serde(default)]
    pub created: i64,
    /// Connected account that originated the event (Connect only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<CompactString>,
    /// Number of webhooks still to be delivered for this event.
    #[serde(default)]
    pub pending_webhooks: i64,
    pub data: EventData,
    /// Request that created the event. Absent or null for events not
    /// caused by an API request.
    #[serde(default, deserialize_with = "nullable_request")]
    pub request: EventRequest,
}

/// The resource an event is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    /// The full resource, e.g. the invoice for `invoice.created`.
    pub object: Map<String, Value>,
    /// Changed attributes with their previous values, for `*.updated` events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_attributes: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    #[serde(default)]
    pub id: Option<CompactString>,
    #[serde(default)]
    pub idempotency_key: Option<CompactString>,
}

fn nullable_request<'de, D>(deserializer: D) -> Result<EventRequest, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<EventRequest>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Event {
    /// The `object` field of the resource (e.g. `"charge"`), if present.
    pub fn object_kind(&self) -> Option<&str> {
        self.data.object.get("object").and_then(Value::as_str)
    }

    /// Decode the resource into a typed struct.
    pub fn object_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.data.object.clone()))
    }

    /// Whether this is one of the `*.updated` events carrying previous values.
    pub fn has_previous_attributes(&self) -> bool {
        self.data
            .previous_attributes
            .as_ref()
            .is_some_and(|attrs| !attrs.is_empty())
    }
}
