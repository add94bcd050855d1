use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::models::ForecastRecord;

/// Body of the forecast endpoint. The backend answers with a list, a single
/// record, or an empty placeholder (`{}` / `null`) when forecasting failed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ForecastPayload {
    Many(Records<ForecastRecord>),
    One(ForecastRecord),
    Missing(Option<EmptyObject>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct EmptyObject {}

impl ForecastPayload {
    /// A lone record becomes a one-element list.
    pub(crate) fn into_records(self) -> Vec<ForecastRecord> {
        match self {
            Self::Many(records) => records.0,
            Self::One(record) => vec![record],
            Self::Missing(_) => Vec::new(),
        }
    }
}

/// A JSON list decoded one element at a time. Elements that fail to decode
/// are logged and skipped; the body itself must still be a list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Records<T>(pub(crate) Vec<T>);

impl<'de, T: DeserializeOwned> Deserialize<'de> for Records<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
        let records = raw
            .into_iter()
            .enumerate()
            .filter_map(|(idx, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("Skipping record {idx}: {err}");
                    None
                }
            })
            .collect();
        Ok(Self(records))
    }
}
