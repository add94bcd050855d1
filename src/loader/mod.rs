//! Fetches actuals and forecast concurrently and hands the results to the
//! view that asked for them, provided it is still around.

use std::sync::Arc;

use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use crate::api::{ExpenditureSource, ForecastPayload, LoadError};
use crate::models::{ExpenditureRecord, ForecastRecord};
use crate::series::MonthSeries;

/// Result of one load. A `None` slot means that fetch failed.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct LoadOutcome {
    pub(crate) actuals: Option<Vec<ExpenditureRecord>>,
    pub(crate) forecast: Option<Vec<ForecastRecord>>,
}

impl LoadOutcome {
    pub(crate) fn failures(&self) -> usize {
        usize::from(self.actuals.is_none()) + usize::from(self.forecast.is_none())
    }
}

/// Run both fetches at once. Failures are logged and never propagate.
pub(crate) async fn load<S: ExpenditureSource>(source: &S) -> LoadOutcome {
    let (actuals, forecast) = tokio::join!(
        source.fetch_monthly_expenditures(),
        source.fetch_expenditure_forecast(),
    );

    LoadOutcome {
        actuals: settle("monthly expenditures", actuals),
        forecast: settle(
            "expenditure forecast",
            forecast.map(ForecastPayload::into_records),
        ),
    }
}

fn settle<T>(what: &str, result: Result<Vec<T>, LoadError>) -> Option<Vec<T>> {
    match result {
        Ok(records) => {
            log::info!("Loaded {} {what} records", records.len());
            Some(records)
        }
        Err(e) => {
            log::error!("Error fetching {what}: {e}");
            None
        }
    }
}

pub(crate) enum LoadStatus {
    Pending,
    Ready(LoadOutcome),
    /// The task ended without delivering (aborted or panicked).
    Abandoned,
}

/// Owner side of a background load. Dropping it aborts the load, so a view
/// that is torn down never receives a late write.
pub(crate) struct LoadHandle {
    rx: oneshot::Receiver<LoadOutcome>,
    task: JoinHandle<()>,
}

impl LoadHandle {
    pub(crate) fn poll(&mut self) -> LoadStatus {
        match self.rx.try_recv() {
            Ok(outcome) => LoadStatus::Ready(outcome),
            Err(TryRecvError::Empty) => LoadStatus::Pending,
            Err(TryRecvError::Closed) => LoadStatus::Abandoned,
        }
    }

    pub(crate) async fn wait(mut self) -> Option<LoadOutcome> {
        (&mut self.rx).await.ok()
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start a load on the current tokio runtime.
pub(crate) fn spawn_load<S>(source: Arc<S>) -> LoadHandle
where
    S: ExpenditureSource + 'static,
{
    let (tx, rx) = oneshot::channel();
    let task = tokio::spawn(async move {
        let outcome = load(source.as_ref()).await;
        if tx.send(outcome).is_err() {
            log::debug!("Load finished after its view went away; discarding");
        }
    });
    LoadHandle { rx, task }
}

/// The two record slots plus the series derived from them.
#[derive(Debug, Default)]
pub(crate) struct ViewState {
    actuals: Vec<ExpenditureRecord>,
    forecast: Vec<ForecastRecord>,
    series: MonthSeries,
}

impl ViewState {
    /// Filled slots replace what was stored; failed slots keep it.
    pub(crate) fn apply(&mut self, outcome: LoadOutcome) {
        if let Some(actuals) = outcome.actuals {
            self.actuals = actuals;
        }
        if let Some(forecast) = outcome.forecast {
            self.forecast = forecast;
        }
        self.series = MonthSeries::build(&self.actuals, &self.forecast);
    }

    pub(crate) fn actuals(&self) -> &[ExpenditureRecord] {
        &self.actuals
    }

    pub(crate) fn forecast(&self) -> &[ForecastRecord] {
        &self.forecast
    }

    pub(crate) fn series(&self) -> &MonthSeries {
        &self.series
    }
}
