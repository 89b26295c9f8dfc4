//! HTTP implementation of [`EmsApi`].

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{extract_detail, Ack, ApiError, AttendanceRecord, DashboardStats, EmsApi, Employee, Health, NewAttendance};
use crate::utils::datetime;

/// EMS backend client bound to one base URL.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: Url,
}

impl RestClient {
    /// Create a client for the given base URL (e.g. "http://localhost:8000").
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(network_error)?;
        read_json(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, url: Url, body: &B) -> Result<T, ApiError> {
        log::debug!("POST {}", url);
        let response = self.http.post(url).json(body).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Turn a non-2xx response into [`ApiError::Status`]
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        detail: extract_detail(&body),
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await.map_err(network_error)?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl EmsApi for RestClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json(self.endpoint(&["api", "employees"])?).await
    }

    async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError> {
        self.get_json(self.endpoint(&["api", "employees", employee_id])?).await
    }

    async fn create_employee(&self, employee: &Employee) -> Result<Ack, ApiError> {
        self.post_json(self.endpoint(&["api", "employees"])?, employee).await
    }

    async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "employees", employee_id])?;
        log::debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await.map_err(network_error)?;
        check_status(response).await.map(|_| ())
    }

    async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json(self.endpoint(&["api", "attendance"])?).await
    }

    async fn employee_attendance(
        &self,
        employee_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let mut url = self.endpoint(&["api", "attendance", employee_id])?;
        if let Some(date) = date {
            url.query_pairs_mut().append_pair("date", &datetime::format_ymd(date));
        }
        self.get_json(url).await
    }

    async fn mark_attendance(&self, entry: &NewAttendance) -> Result<Ack, ApiError> {
        self.post_json(self.endpoint(&["api", "attendance"])?, entry).await
    }

    async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json(self.endpoint(&["api", "stats"])?).await
    }

    async fn health(&self) -> Result<Health, ApiError> {
        self.get_json(self.endpoint(&["api", "health"])?).await
    }
}
