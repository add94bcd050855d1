//! Inbound data capabilities: monthly actuals and the spending forecast.

mod client;
mod payload;

use std::future::Future;

use crate::models::ExpenditureRecord;

pub(crate) use client::HttpSource;
#[cfg(test)]
pub(crate) use client::{FORECAST_PATH, MONTHLY_PATH};
pub(crate) use payload::{ForecastPayload, Records};

/// Every way a fetch can fail. The loader treats all of them as
/// "data load failed".
#[derive(Debug, thiserror::Error)]
pub(crate) enum LoadError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },
    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) trait ExpenditureSource: Send + Sync {
    fn fetch_monthly_expenditures(
        &self,
    ) -> impl Future<Output = Result<Vec<ExpenditureRecord>, LoadError>> + Send;

    /// May yield a single record rather than a list; see [`ForecastPayload`].
    fn fetch_expenditure_forecast(
        &self,
    ) -> impl Future<Output = Result<ForecastPayload, LoadError>> + Send;
}
