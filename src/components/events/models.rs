use serde::{Deserialize, Deserializer, Serialize};

/// Event as served by the events endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub creator_email: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    pub start_datetime: String,
    #[serde(default)]
    pub start_timezone: Option<String>,
    #[serde(default)]
    pub end_datetime: Option<String>,
    #[serde(default)]
    pub end_timezone: Option<String>,
    #[serde(default, rename = "recurrence")]
    pub recurring: bool,
}

/// Top-level response body: `{ "data": { ... } }`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub data: EnvelopeData,
}

/// Payload of the envelope.
///
/// `items` only exists so the retired envelope can be recognized and rejected.
#[derive(Debug, Deserialize)]
pub(crate) struct EnvelopeData {
    #[serde(default)]
    pub events: Option<Vec<Event>>,
    #[serde(default)]
    pub items: Option<serde_json::Value>,
    #[serde(default)]
    pub authed: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
