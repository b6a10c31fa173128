// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Response bodies of the signup endpoints.

use serde::Deserialize;
use serde_json::Value;

/// Success body of signup and removal: `{"message": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Error body of signup and removal: `{"detail": "..."}`.
///
/// `detail` is not always a string (validation errors carry a list), so it is
/// kept as a raw value and only used when it is text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    /// Parse an error body, treating anything unparseable as an empty object.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The textual detail, if the server sent one.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}
