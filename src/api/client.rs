use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::{ExpenditureSource, ForecastPayload, LoadError, Records};
use crate::config::Config;
use crate::models::ExpenditureRecord;

pub(crate) const MONTHLY_PATH: &str = "/api/expenditures/monthly";
pub(crate) const FORECAST_PATH: &str = "/api/expenditures/forecast";

/// Fetches both capabilities from the expenditure API over HTTP.
pub(crate) struct HttpSource {
    client: reqwest::Client,
    monthly_url: String,
    forecast_url: String,
}

impl HttpSource {
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("spendview/", env!("CARGO_PKG_VERSION")));
        if is_loopback(&config.api_url) {
            builder = builder.no_proxy();
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            monthly_url: config.endpoint(MONTHLY_PATH),
            forecast_url: config.endpoint(FORECAST_PATH),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LoadError> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| LoadError::Request {
                endpoint: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                endpoint: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| LoadError::Request {
            endpoint: url.to_string(),
            source,
        })?;
        log::trace!("GET {url} - {} bytes", body.len());

        let value = serde_json::from_slice(&body).map_err(|source| LoadError::Decode {
            endpoint: url.to_string(),
            source,
        })?;
        log::info!("GET {url} - {status}");
        Ok(value)
    }
}

/// A backend on this machine is never reached through a proxy.
pub(super) fn is_loopback(api_url: &str) -> bool {
    reqwest::Url::parse(api_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .is_some_and(|host| {
            host == "localhost"
                || host
                    .trim_matches(|c| c == '[' || c == ']')
                    .parse::<std::net::IpAddr>()
                    .is_ok_and(|ip| ip.is_loopback())
        })
}

impl ExpenditureSource for HttpSource {
    async fn fetch_monthly_expenditures(&self) -> Result<Vec<ExpenditureRecord>, LoadError> {
        let records: Records<ExpenditureRecord> = self.get_json(&self.monthly_url).await?;
        Ok(records.0)
    }

    async fn fetch_expenditure_forecast(&self) -> Result<ForecastPayload, LoadError> {
        self.get_json(&self.forecast_url).await
    }
}
