// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity signup: client-side view synchronization for a club sign-up API
//!
//! This crate loads the activity catalog from the server, projects it into
//! an in-memory page view, and patches that view in place after confirmed
//! signups and removals.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod view;
