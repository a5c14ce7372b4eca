// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP client for the intake service.
//!
//! The intake service exposes one webhook per submission kind. A `2xx`
//! answer counts as delivered; the response body is never interpreted.

use crate::error::IntakeError;
use bike_rent_api::{BookingSubmission, ListingSubmission};
use std::time::Duration;
use tracing::debug;

/// Default endpoint that accepts booking submissions.
const DEFAULT_BOOKING_ENDPOINT: &str = "https://whyc.app.n8n.cloud/webhook/bikerent-booking";

/// Default endpoint that accepts listing submissions.
const DEFAULT_LISTING_ENDPOINT: &str = "https://whyc.app.n8n.cloud/webhook/list-bike";

/// Per-request timeout. A submission that takes longer than this counts
/// as failed; there is no retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where submissions are delivered.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Endpoint that accepts booking submissions.
    pub booking_endpoint: String,
    /// Endpoint that accepts listing submissions.
    pub listing_endpoint: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            booking_endpoint: String::from(DEFAULT_BOOKING_ENDPOINT),
            listing_endpoint: String::from(DEFAULT_LISTING_ENDPOINT),
        }
    }
}

/// HTTP client for the intake service.
#[derive(Debug, Clone)]
pub struct IntakeClient {
    client: reqwest::Client,
    config: IntakeConfig,
}

impl IntakeClient {
    /// Creates a client that delivers to the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Transport` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: IntakeConfig) -> Result<Self, IntakeError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| IntakeError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Delivers a booking submission.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Rejected` for a non-success answer and
    /// `IntakeError::Transport` if the request never completes.
    pub async fn deliver_booking(&self, payload: &BookingSubmission) -> Result<(), IntakeError> {
        debug!(
            "Delivering booking submission to {}",
            self.config.booking_endpoint
        );

        let response: reqwest::Response = self
            .client
            .post(&self.config.booking_endpoint)
            .json(payload)
            .send()
            .await?;

        Self::check_status(&response)
    }

    /// Delivers a bike listing submission.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Rejected` for a non-success answer and
    /// `IntakeError::Transport` if the request never completes.
    pub async fn deliver_listing(&self, payload: &ListingSubmission) -> Result<(), IntakeError> {
        debug!(
            "Delivering listing submission to {}",
            self.config.listing_endpoint
        );

        let response: reqwest::Response = self
            .client
            .post(&self.config.listing_endpoint)
            .json(payload)
            .send()
            .await?;

        Self::check_status(&response)
    }

    fn check_status(response: &reqwest::Response) -> Result<(), IntakeError> {
        let status: reqwest::StatusCode = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(IntakeError::Rejected {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use std::sync::{Arc, Mutex};

    fn test_booking_payload() -> BookingSubmission {
        BookingSubmission {
            name: String::from("Jane Roe"),
            email: String::from("jane@example.com"),
            delivery_location: String::from("12 Kloof Street, Cape Town"),
            start_date: String::from("2024-06-01"),
            end_date: String::from("2024-06-07"),
            bike_size: String::from("M"),
            bike_type: String::from("Hardtail"),
            helmet_and_gloves: false,
            terms_accepted: true,
            total_price: 208.25,
            total_booking_price_formatted: String::from("€208.25"),
            days: 7,
            submitted_at: String::from("2024-06-01T09:30:00Z"),
        }
    }

    fn test_listing_payload() -> ListingSubmission {
        ListingSubmission {
            name: String::from("Sam Owner"),
            email: String::from("sam@example.com"),
            bike_location: String::from("Sea Point, Cape Town"),
            bike_type: String::from("Full Suspension: eBike"),
            bike_size: String::from("L"),
            bike_year: 2022,
            availability_dates: Vec::new(),
            rental_fee_per_day: 30.0,
            terms_accepted: true,
            submitted_at: String::from("2024-06-01T09:30:00Z"),
        }
    }

    async fn serve(router: Router) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client_for(addr: std::net::SocketAddr) -> IntakeClient {
        IntakeClient::new(IntakeConfig {
            booking_endpoint: format!("http://{addr}/booking"),
            listing_endpoint: format!("http://{addr}/listing"),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_accepted_booking_is_delivered() {
        let router: Router = Router::new().route("/booking", post(|| async { StatusCode::OK }));
        let addr = serve(router).await;
        let client: IntakeClient = client_for(addr);

        let result = client.deliver_booking(&test_booking_payload()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_booking_is_posted_as_json_with_wire_fields() {
        let received: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));
        let sink: Arc<Mutex<Option<serde_json::Value>>> = Arc::clone(&received);
        let router: Router = Router::new().route(
            "/booking",
            post(move |Json(body): Json<serde_json::Value>| {
                let sink = Arc::clone(&sink);
                async move {
                    *sink.lock().unwrap() = Some(body);
                    StatusCode::OK
                }
            }),
        );
        let addr = serve(router).await;
        let client: IntakeClient = client_for(addr);

        client.deliver_booking(&test_booking_payload()).await.unwrap();

        let body: serde_json::Value = received.lock().unwrap().take().unwrap();
        assert_eq!(body["deliveryLocation"], "12 Kloof Street, Cape Town");
        assert_eq!(body["totalBookingPriceFormatted"], "€208.25");
        assert_eq!(body["days"], 7);
    }

    #[tokio::test]
    async fn test_rejection_carries_the_status_code() {
        let router: Router = Router::new().route(
            "/booking",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let addr = serve(router).await;
        let client: IntakeClient = client_for(addr);

        let result = client.deliver_booking(&test_booking_payload()).await;

        assert!(matches!(result, Err(IntakeError::Rejected { status: 500 })));
    }

    #[tokio::test]
    async fn test_listing_delivery_uses_the_listing_endpoint() {
        let router: Router = Router::new().route("/listing", post(|| async { StatusCode::OK }));
        let addr = serve(router).await;
        let client: IntakeClient = client_for(addr);

        let result = client.deliver_listing(&test_listing_payload()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client: IntakeClient = client_for(addr);

        let result = client.deliver_booking(&test_booking_payload()).await;

        assert!(matches!(result, Err(IntakeError::Transport(_))));
    }
}
