//! One refresh cycle over the selected cities.

use crate::{
    error::FetchError, history::HistoryTracker, model::WeatherRecord, provider::WeatherProvider,
};

/// Outcome of a cycle. Partial success is the normal case.
#[derive(Debug, Clone, Default)]
pub struct RefreshReport {
    /// Successful records in request order.
    pub records: Vec<WeatherRecord>,
    pub failures: Vec<FetchError>,
}

impl RefreshReport {
    /// No city produced data.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Fetches each city in turn, appending successes to `history`.
///
/// A failing city is recorded and skipped; it never stops the cycle.
pub async fn refresh<P, S>(provider: &P, cities: &[S], history: &mut HistoryTracker) -> RefreshReport
where
    P: WeatherProvider + ?Sized,
    S: AsRef<str>,
{
    let mut report = RefreshReport::default();

    for city in cities {
        match provider.fetch(city.as_ref()).await {
            Ok(record) => {
                history.append(record.clone());
                report.records.push(record);
            }
            Err(err) => {
                tracing::warn!(city = %err.city, kind = %err.kind, detail = %err.detail, "skipping city");
                report.failures.push(err);
            }
        }
    }

    tracing::info!(
        fetched = report.records.len(),
        failed = report.failures.len(),
        "refresh cycle complete"
    );
    report
}
