// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View synchronizer: keeps the page view consistent with the activities API.
//!
//! Every operation is a single round trip. The page lock is never held across
//! a request; completions re-acquire it and patch whatever is rendered at that
//! point. Patches that no longer apply (card gone, row gone, list reloaded)
//! are skipped.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::api::ActivitiesClient;
use crate::view::{MessageKind, PageView, RemoveCommand, RowId};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const REMOVE_FAILED_TEXT: &str = "Failed to remove participant. Please try again.";

/// Owns the API client and the page view for one page.
#[derive(Clone)]
pub struct ViewSynchronizer {
    client: ActivitiesClient,
    page: Arc<Mutex<PageView>>,
    signup_message_delay: Duration,
    removal_message_delay: Duration,
}

impl ViewSynchronizer {
    pub fn new(client: ActivitiesClient, config: &Config) -> Self {
        Self {
            client,
            page: Arc::new(Mutex::new(PageView::new())),
            signup_message_delay: config.signup_message_delay,
            removal_message_delay: config.removal_message_delay,
        }
    }

    /// Build the client from `config` and wrap it.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ActivitiesClient::new(&config.api_base_url, config.http_timeout)?;
        Ok(Self::new(client, config))
    }

    /// Copy of the page as currently rendered.
    pub async fn snapshot(&self) -> PageView {
        self.page.lock().await.clone()
    }

    // ─── Operations ─────────────────────────────────────────────────────────

    /// Fetch the catalog and replace the activity list and selector.
    ///
    /// On failure the list shows a static failure message. No retry.
    pub async fn load_catalog(&self) -> Result<()> {
        match self.client.list_activities().await {
            Ok(catalog) => {
                self.page.lock().await.apply_catalog(&catalog);
                tracing::info!(count = catalog.len(), "Activities loaded");
                Ok(())
            }
            Err(e) => {
                self.page.lock().await.apply_load_failure();
                tracing::error!(error = %e, "Error fetching activities");
                Err(e)
            }
        }
    }

    /// Fill the form with `activity` and `email` and submit it.
    ///
    /// Filling and reading back happen under one lock, so a concurrent
    /// signup cannot swap the values in between.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<Option<RowId>> {
        let (activity, email, generation) = {
            let mut page = self.page.lock().await;
            page.fill_form(activity, email);
            self.take_submission(&mut page)?
        };
        self.send_signup(activity, email, generation).await
    }

    /// Submit the signup form as currently filled.
    ///
    /// Returns the new roster row, or `None` if the signup succeeded but the
    /// card is gone or a reload already shows the participant.
    pub async fn submit(&self) -> Result<Option<RowId>> {
        let (activity, email, generation) = {
            let mut page = self.page.lock().await;
            self.take_submission(&mut page)?
        };
        self.send_signup(activity, email, generation).await
    }

    /// Validate the form and capture what to send, with the list generation
    /// it was read against. Rejections are shown on the page.
    fn take_submission(&self, page: &mut PageView) -> Result<(String, String, u64)> {
        match validate_form(page) {
            Ok((activity, email)) => Ok((activity, email, page.generation())),
            Err(e) => {
                self.show_failure(page, &e, SIGNUP_FAILED_TEXT, self.signup_message_delay);
                Err(e)
            }
        }
    }

    async fn send_signup(
        &self,
        activity: String,
        email: String,
        generation: u64,
    ) -> Result<Option<RowId>> {
        let result = self.client.signup(&activity, &email).await;

        let mut page = self.page.lock().await;
        match result {
            Ok(response) => {
                let seq = page.message_mut().show(response.message, MessageKind::Success);
                self.schedule_hide(seq, self.signup_message_delay);
                page.reset_form();

                let row = page.apply_signup(generation, &activity, &email);
                if row.is_none() {
                    tracing::debug!(activity = %activity, "Signup patch skipped, already rendered");
                }
                tracing::info!(activity = %activity, email = %email, "Signed up");
                Ok(row)
            }
            Err(e) => {
                self.show_failure(&mut page, &e, SIGNUP_FAILED_TEXT, self.signup_message_delay);
                log_failure("signup", &activity, &e);
                Err(e)
            }
        }
    }

    /// Remove the participant bound to `command`.
    pub async fn remove(&self, command: RemoveCommand) -> Result<()> {
        let result = self
            .client
            .unregister(&command.activity, &command.email)
            .await;

        let mut page = self.page.lock().await;
        match result {
            Ok(response) => {
                if !page.apply_removal(&command) {
                    tracing::debug!(row = %command.row, "Removal patch skipped, row gone");
                }
                let seq = page.message_mut().show(response.message, MessageKind::Success);
                self.schedule_hide(seq, self.removal_message_delay);
                tracing::info!(activity = %command.activity, email = %command.email, "Participant removed");
                Ok(())
            }
            Err(e) => {
                self.show_failure(&mut page, &e, REMOVE_FAILED_TEXT, self.removal_message_delay);
                log_failure("remove", &command.activity, &e);
                Err(e)
            }
        }
    }

    /// Dispatch the removal control of a rendered row.
    pub async fn remove_row(&self, row: RowId) -> Result<()> {
        let command = {
            let mut page = self.page.lock().await;
            match page.remove_command(row) {
                Some(command) => command,
                None => {
                    let e = AppError::InvalidInput(format!("No participant row {}", row));
                    self.show_failure(&mut page, &e, REMOVE_FAILED_TEXT, self.removal_message_delay);
                    return Err(e);
                }
            }
        };
        self.remove(command).await
    }

    // ─── Messages ───────────────────────────────────────────────────────────

    fn show_failure(&self, page: &mut PageView, err: &AppError, transport_text: &str, delay: Duration) {
        let text = err.user_detail().unwrap_or(transport_text);
        let seq = page.message_mut().show(text, MessageKind::Error);
        self.schedule_hide(seq, delay);
    }

    /// Hide message `seq` after `delay`. Never cancelled; a newer message is
    /// left alone.
    fn schedule_hide(&self, seq: u64, delay: Duration) {
        let page = Arc::clone(&self.page);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            page.lock().await.message_mut().hide_if_current(seq);
        });
    }
}

/// Mirror the form's `required` fields: an activity from the selector and a
/// non-empty email.
fn validate_form(page: &PageView) -> Result<(String, String)> {
    let form = page.form();
    let activity = match &form.activity {
        Some(a) if page.options().iter().any(|o| o == a) => a.clone(),
        _ => return Err(AppError::InvalidInput("Please select an activity".to_string())),
    };
    if form.email.trim().is_empty() {
        return Err(AppError::InvalidInput("Please enter an email address".to_string()));
    }
    Ok((activity, form.email.clone()))
}

fn log_failure(operation: &'static str, activity: &str, err: &AppError) {
    if err.is_transport() {
        tracing::error!(operation, activity = %activity, error = %err, "Request failed");
    } else {
        tracing::warn!(operation, activity = %activity, error = %err, "Request rejected");
    }
}
