// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for talking to the activities API.

/// Error returned by API calls and view operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Network failure, timeout, or connection refused.
    #[error("Request failed: {0}")]
    Transport(String),

    /// A success response whose body was not the expected JSON.
    #[error("Unexpected response body: {0}")]
    Parse(String),

    /// Non-2xx response. `detail` is the server's textual detail, if any.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// Rejected locally before any request was sent.
    #[error("Invalid request: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Shown when the server fails without a usable detail.
    pub const GENERIC_DETAIL: &'static str = "An error occurred";

    /// True for failures where no well-formed application response exists.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Parse(_))
    }

    /// Text to show the user for an application failure.
    ///
    /// Transport failures return `None`; each operation has its own wording
    /// for those.
    pub fn user_detail(&self) -> Option<&str> {
        match self {
            AppError::Api { detail, .. } => Some(detail.as_deref().unwrap_or(Self::GENERIC_DETAIL)),
            AppError::InvalidInput(msg) => Some(msg),
            AppError::Transport(_) | AppError::Parse(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Parse(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, AppError>;
