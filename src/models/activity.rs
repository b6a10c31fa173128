// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model as served by the activities API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One activity entry of the catalog. The name is the catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-form description
    pub description: String,
    /// Human readable schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Capacity of the activity
    pub max_participants: u32,
    /// Participant emails in server order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Saturates at zero for overfull activities.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Activity name to details, in the order the server returned them.
pub type Catalog = IndexMap<String, Activity>;
