use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::{
    backend::types::{MetricPoint, Narrative, Player},
    cli::types::{
        endpoint::BackendUrl,
        ids::PlayerId,
        time::{day_string, MetricsWindow},
    },
    core::build_client,
    Result,
};


/// Read-only client for the sentiment backend API.
///
/// Every call returns the backend's error untouched; deciding what a failure
/// looks like on the page is left to the caller.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base: BackendUrl,
}

impl BackendClient {
    pub fn new(http: Client, base: BackendUrl) -> Self {
        Self { http, base }
    }

    /// Client with the default headers and the given per-request timeout.
    pub fn with_timeout(base: BackendUrl, timeout: Duration) -> Result<Self> {
        Ok(Self::new(build_client(timeout)?, base))
    }

    pub fn base(&self) -> &BackendUrl {
        &self.base
    }

    /// `GET /players`, filtered by `query` when one is given.
    ///
    /// Blank queries are not sent, so they list every player.
    pub async fn search_players(&self, query: Option<&str>) -> Result<Vec<Player>> {
        let url = self.base.endpoint(&["players"])?;
        let params: Vec<(&str, String)> = query
            .filter(|q| !q.is_empty())
            .map(|q| vec![("query", q.to_string())])
            .unwrap_or_default();
        self.get_json(url, &params).await
    }

    /// `GET /players/{id}`
    pub async fn get_player(&self, id: &PlayerId) -> Result<Player> {
        let url = self.base.endpoint(&["players", id.as_str()])?;
        self.get_json(url, &[]).await
    }

    /// `GET /players/{id}/metrics?from=..&to=..`
    pub async fn get_metrics(
        &self,
        id: &PlayerId,
        window: MetricsWindow,
    ) -> Result<Vec<MetricPoint>> {
        let url = self.base.endpoint(&["players", id.as_str(), "metrics"])?;
        self.get_json(url, &window.query()).await
    }

    /// `GET /players/{id}/narratives?date=..`
    ///
    /// The backend answers with a non-success status when it has no narrative
    /// for that day.
    pub async fn get_narrative(&self, id: &PlayerId, date: NaiveDate) -> Result<Narrative> {
        let url = self.base.endpoint(&["players", id.as_str(), "narratives"])?;
        self.get_json(url, &[("date", day_string(date))]).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, params: &[(&str, String)]) -> Result<T> {
        debug!(%url, ?params, "backend request");

        let v = self
            .http
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(v)
    }
}
