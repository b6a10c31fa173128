// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities API client.
//!
//! Handles:
//! - Catalog listing
//! - Participant signup and removal
//! - Mapping non-2xx responses to `AppError::Api` with the server's detail

use crate::error::{AppError, Result};
use crate::models::{ApiErrorBody, ApiMessage, Catalog};
use serde::Deserialize;
use std::time::Duration;

/// Activities API client.
#[derive(Clone)]
pub struct ActivitiesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ActivitiesClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full activity catalog.
    pub async fn list_activities(&self) -> Result<Catalog> {
        let url = format!("{}/activities", self.base_url);
        let response = self.http.get(&url).send().await?;
        self.check_response_json(response).await
    }

    /// Add `email` to the participants of `activity`.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<ApiMessage> {
        let response = self
            .http
            .post(self.signup_url(activity))
            .query(&[("email", email)])
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Remove `email` from the participants of `activity`.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<ApiMessage> {
        let response = self
            .http
            .delete(self.signup_url(activity))
            .query(&[("email", email)])
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// `/activities/{name}/signup` with the name percent-encoded.
    pub fn signup_url(&self, activity: &str) -> String {
        format!(
            "{}/activities/{}/signup",
            self.base_url,
            urlencoding::encode(activity)
        )
    }

    /// Check response status and parse the JSON body.
    ///
    /// Any non-2xx status is a failure. The error body is parsed leniently.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = ApiErrorBody::from_body(&body).detail_text();
            return Err(AppError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("JSON parse error: {}", e)))
    }
}
