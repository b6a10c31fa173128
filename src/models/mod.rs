// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the activities API.

pub mod activity;
pub mod response;

pub use activity::{Activity, Catalog};
pub use response::{ApiErrorBody, ApiMessage};
