//! Client for the remote `DashboardStats` API and the dashboard fetch cycle.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::FetchError;
use crate::models::card::StatsEndpoint;
use crate::models::stats::{
    AssignmentsResponse, AttendanceResponse, EmployeesCountResponse, MarkedUsersResponse,
    ProjectsCountResponse, ViewModel,
};
use crate::services::credentials::CredentialStore;

/// HTTP client bound to one stats API base URL.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatsClient {
    /// Build a client from configuration. The HTTP timeout is the only
    /// per-request limit.
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.stats_http_timeout_secs))
            .danger_accept_invalid_certs(config.stats_accept_invalid_certs)
            .build()?;
        Ok(Self::with_http(http, &config.stats_api_url))
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one fetch cycle: read the bearer token, query all six endpoints
    /// concurrently and join them all-or-nothing.
    ///
    /// A missing token fails before any request is sent. The first failing
    /// endpoint fails the whole cycle and the other in-flight requests are
    /// dropped.
    pub async fn fetch_cycle<C>(&self, store: &C) -> Result<ViewModel, FetchError>
    where
        C: CredentialStore + ?Sized,
    {
        let Some(token) = store.bearer_token() else {
            tracing::warn!("No bearer token in credential store, skipping fetch cycle");
            return Err(FetchError::MissingCredential);
        };

        let cycle_id = Uuid::now_v7();
        let span = tracing::info_span!("fetch_cycle", %cycle_id, base_url = %self.base_url);

        async move {
            let (employees, present, absent, projects, assigned, reports) = tokio::try_join!(
                self.get::<EmployeesCountResponse>(StatsEndpoint::TotalEmployeesCount, &token),
                self.get::<AttendanceResponse>(StatsEndpoint::TotalPresentEmployees, &token),
                self.get::<AttendanceResponse>(StatsEndpoint::TotalAbsentEmployees, &token),
                self.get::<ProjectsCountResponse>(StatsEndpoint::TotalProjectsCount, &token),
                self.get::<AssignmentsResponse>(StatsEndpoint::TotalAssignedProjectsCount, &token),
                self.get::<MarkedUsersResponse>(
                    StatsEndpoint::MarkedUsersOfTodayDailyReport,
                    &token
                ),
            )
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = ?e.endpoint(), "Fetch cycle failed");
                e
            })?;

            tracing::info!("Fetch cycle completed");

            Ok(ViewModel {
                total_employees: employees.into(),
                present_employees: present.into(),
                absent_employees: absent.into(),
                projects: projects.into(),
                assigned_projects: assigned.into(),
                daily_reports: reports.into(),
                fetched_at: Some(chrono::Utc::now()),
            })
        }
        .instrument(span)
        .await
    }

    /// GET one stats operation and decode its JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: StatsEndpoint,
        token: &str,
    ) -> Result<T, FetchError> {
        let response = self
            .http
            .get(endpoint.url(&self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { endpoint, source })?;

        tracing::debug!(%endpoint, "Stats endpoint responded");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::credentials::MemoryStore;

    #[tokio::test]
    async fn missing_token_fails_without_network() {
        // Port 9 (discard) is never contacted: the cycle stops at the store.
        let client = StatsClient::with_http(reqwest::Client::new(), "http://127.0.0.1:9");
        let err = client.fetch_cycle(&MemoryStore::new()).await.unwrap_err();
        assert!(matches!(err, FetchError::MissingCredential));
    }

    #[tokio::test]
    async fn unreachable_api_is_a_transport_error() {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        // Bind then drop a listener to get a port nothing listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = StatsClient::with_http(http, &format!("http://127.0.0.1:{port}"));
        let err = client
            .fetch_cycle(&MemoryStore::with_token("t"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[test]
    fn base_url_is_normalized() {
        let client = StatsClient::with_http(reqwest::Client::new(), "https://stats.local/");
        assert_eq!(client.base_url(), "https://stats.local");
    }
}
