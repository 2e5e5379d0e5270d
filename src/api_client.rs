//! # API Client
//!
//! Typed async client for the HTTP API, one method per route. It is what a consumer passes to
//! [`FetchHook`](crate::hooks::FetchHook):
//!
//! ```rust,no_run
//! use facility_desk::api_client::FacilityApi;
//! use facility_desk::hooks::FetchHook;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let api = FacilityApi::new("http://localhost:3000");
//! let hook = FetchHook::new(move |_: ()| {
//!     let api = api.clone();
//!     async move { api.tickets().await.map_err(|e| e.to_string()) }
//! }, ());
//! # drop(hook);
//! # }
//! ```

use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::http::maintenance::TicketList;
use crate::model::{
    ActivityItem, BookingCreate, FacilityBooking, MaintenanceTicket, MoveRequest,
    MoveRequestCreate, ResidentData, TicketCreate, TicketId, TicketPatch, TicketUpdate,
};

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer; `message` is the server's `error` field when it sent one.
    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ApiClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiClientError::Status { status, .. } => Some(*status),
            ApiClientError::Http(e) => e.status(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct FacilityApi {
    base_url: String,
    http: Client,
}

impl FacilityApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[instrument(skip(self))]
    pub async fn activity(&self) -> Result<Vec<ActivityItem>, ApiClientError> {
        self.get("/api/activity").await
    }

    #[instrument(skip(self))]
    pub async fn bookings(&self) -> Result<Vec<FacilityBooking>, ApiClientError> {
        self.get("/api/bookings").await
    }

    #[instrument(skip(self))]
    pub async fn create_booking(
        &self,
        params: &BookingCreate,
    ) -> Result<FacilityBooking, ApiClientError> {
        self.send(self.http.post(self.url("/api/bookings")).json(params))
            .await
    }

    #[instrument(skip(self))]
    pub async fn tickets(&self) -> Result<Vec<MaintenanceTicket>, ApiClientError> {
        let list: TicketList = self.get("/api/maintenance").await?;
        Ok(list.tickets)
    }

    #[instrument(skip(self))]
    pub async fn create_ticket(
        &self,
        params: &TicketCreate,
    ) -> Result<MaintenanceTicket, ApiClientError> {
        self.send(self.http.post(self.url("/api/maintenance")).json(params))
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_ticket(
        &self,
        id: &TicketId,
        update: TicketUpdate,
    ) -> Result<MaintenanceTicket, ApiClientError> {
        let patch = TicketPatch::new(id.clone(), update);
        self.send(self.http.patch(self.url("/api/maintenance")).json(&patch))
            .await
    }

    #[instrument(skip(self))]
    pub async fn move_requests(&self) -> Result<Vec<MoveRequest>, ApiClientError> {
        self.get("/api/move-requests").await
    }

    #[instrument(skip(self))]
    pub async fn create_move_request(
        &self,
        params: &MoveRequestCreate,
    ) -> Result<MoveRequest, ApiClientError> {
        self.send(self.http.post(self.url("/api/move-requests")).json(params))
            .await
    }

    #[instrument(skip(self))]
    pub async fn resident(&self) -> Result<ResidentData, ApiClientError> {
        self.get("/api/resident").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        self.send(self.http.get(self.url(path))).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiClientError> {
        let response = request.send().await?;
        debug!(status = %response.status(), url = %response.url(), "Response");
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        Err(ApiClientError::Status { status, message })
    }
}

