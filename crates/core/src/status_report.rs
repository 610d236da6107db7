//! Decoded device status payload.
//!
//! The IoT cloud posts every property change of a "thing" as
//! `{ "values": [{ "name": ..., "value": ... }, ...] }`, optionally wrapped
//! with webhook/device/thing identifiers. [`StatusReport`] parses that shape
//! once into a name → value map so predicates never rescan the list.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;

/// Wire shape of a single property entry.
#[derive(Debug, Deserialize)]
struct PropertyEntry {
    name: String,
    #[serde(default)]
    value: Value,
}

/// Wire shape of the whole webhook payload.
#[derive(Debug, Deserialize)]
struct RawReport {
    #[serde(default)]
    webhook_id: Option<String>,
    #[serde(default)]
    device_id: Option<String>,
    #[serde(default)]
    thing_id: Option<String>,
    #[serde(default)]
    values: Option<Vec<PropertyEntry>>,
}

/// Request-scoped device status, keyed by property name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReport {
    /// Identifier of the webhook that posted the report, if sent.
    pub webhook_id: Option<String>,
    /// Identifier of the reporting device, if sent.
    pub device_id: Option<String>,
    /// Identifier of the IoT "thing" the properties belong to, if sent.
    pub thing_id: Option<String>,
    properties: HashMap<String, Value>,
}

impl StatusReport {
    /// Parse a request body.
    ///
    /// Returns `Ok(None)` for an empty or whitespace-only body, which callers
    /// treat as "nothing to check".
    pub fn from_body(body: &[u8]) -> Result<Option<Self>, CoreError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Self::from_json(body).map(Some)
    }

    /// Parse a JSON payload.
    ///
    /// A missing or `null` `values` field yields an empty report. When a
    /// property name occurs more than once, the first occurrence wins.
    pub fn from_json(json: &[u8]) -> Result<Self, CoreError> {
        let raw: RawReport = serde_json::from_slice(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Build a report from `(name, value)` pairs, first occurrence winning.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut properties = HashMap::new();
        for (name, value) in pairs {
            properties.entry(name.into()).or_insert(value);
        }
        Self {
            properties,
            ..Self::default()
        }
    }

    fn from_raw(raw: RawReport) -> Self {
        let entries = raw.values.unwrap_or_default();
        let mut report = Self::from_pairs(entries.into_iter().map(|e| (e.name, e.value)));
        report.webhook_id = raw.webhook_id;
        report.device_id = raw.device_id;
        report.thing_id = raw.thing_id;
        report
    }

    /// Raw value of a property, or `None` if it was not reported.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Value of a property read as a boolean flag.
    ///
    /// See [`as_flag`] for what counts as a flag.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.lookup(name).and_then(as_flag)
    }

    /// Number of distinct properties in the report.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Read a JSON value as a boolean flag.
///
/// Only JSON booleans are flags. Strings such as `"true"`, numbers and
/// `null` are not.
pub fn as_flag(value: &Value) -> Option<bool> {
    value.as_bool()
}
