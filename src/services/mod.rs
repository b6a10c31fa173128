// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API access and view synchronization.

pub mod api;
pub mod sync;

pub use api::ActivitiesClient;
pub use sync::ViewSynchronizer;
