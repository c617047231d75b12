mod content;
mod hook;
mod result;
mod stream;
mod system;

pub use content::*;
pub use hook::*;
pub use result::*;
pub use stream::*;
pub use system::*;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::validate::validate;

/// Placeholder kind for records that carry no `type` field.
pub const MISSING_KIND: &str = "<missing>";

/// One event record, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum EventRecord {
    /// Model turn: text, tool invocations, reasoning
    Assistant(AssistantRecord),

    /// User turn: prompt text or tool results fed back to the model
    User(UserRecord),

    /// End-of-run summary with timing, cost, and usage
    Result(RunSummary),

    /// Session lifecycle and hook notices
    System(SystemNotice),

    /// Incremental fragment of an in-progress assistant turn
    StreamEvent(StreamRecord),

    /// Any `type` this crate does not know
    Unknown { kind: String },
}

impl EventRecord {
    /// Validate and decode a parsed JSON value.
    ///
    /// Validation always runs first, so a record missing required fields is
    /// rejected before any typed decoding is attempted.
    pub fn from_value(value: Value) -> Result<Self> {
        validate(&value)?;

        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned);

        match kind.as_deref() {
            Some("assistant") => decode("assistant", value).map(EventRecord::Assistant),
            Some("user") => decode("user", value).map(EventRecord::User),
            Some("result") => decode("result", value).map(EventRecord::Result),
            Some("system") => SystemNotice::from_value(value).map(EventRecord::System),
            Some("stream_event") => decode("stream_event", value).map(EventRecord::StreamEvent),
            Some(other) => Ok(EventRecord::Unknown {
                kind: other.to_string(),
            }),
            None => Ok(EventRecord::Unknown {
                kind: MISSING_KIND.to_string(),
            }),
        }
    }

    /// The wire discriminant of this record.
    pub fn kind(&self) -> &str {
        match self {
            EventRecord::Assistant(_) => "assistant",
            EventRecord::User(_) => "user",
            EventRecord::Result(_) => "result",
            EventRecord::System(_) => "system",
            EventRecord::StreamEvent(_) => "stream_event",
            EventRecord::Unknown { kind } => kind,
        }
    }

    pub fn is_stream_event(&self) -> bool {
        matches!(self, EventRecord::StreamEvent(_))
    }
}

/// Parse one input line into a validated record.
pub fn parse_record(line: &str) -> Result<EventRecord> {
    let value: Value = serde_json::from_str(line)?;
    EventRecord::from_value(value)
}

pub(crate) fn decode<T: DeserializeOwned>(kind: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| Error::Malformed {
        kind: kind.to_string(),
        source,
    })
}

/// Treat an explicit `null` the same as an absent field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decode a JSON object into `(key, value)` pairs in input order; `null` is empty.
pub(crate) fn ordered_entries<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object or null")
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(
            self,
            mut map: A,
        ) -> std::result::Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, T>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(EntriesVisitor(PhantomData))
}
