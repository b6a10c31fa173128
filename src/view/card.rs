// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity cards and their participant rosters.

use crate::models::{Activity, Catalog};
use std::fmt;

/// Placeholder row text for an empty roster.
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Identity of a rendered participant row, unique for the page's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocator for row ids. Never reuses an id, even across reloads.
#[derive(Debug, Clone, Default)]
pub struct RowIds {
    next: u64,
}

impl RowIds {
    pub fn next_id(&mut self) -> RowId {
        self.next += 1;
        RowId(self.next)
    }
}

/// Removal control of a roster row, bound at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCommand {
    pub activity: String,
    pub email: String,
    pub row: RowId,
}

/// A participant row: avatar, email and removal control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub initials: String,
    pub remove: RemoveCommand,
}

impl ParticipantRow {
    fn new(activity: &str, email: &str, id: RowId) -> Self {
        Self {
            email: email.to_string(),
            initials: avatar_initials(email),
            remove: RemoveCommand {
                activity: activity.to_string(),
                email: email.to_string(),
                row: id,
            },
        }
    }

    pub fn id(&self) -> RowId {
        self.remove.row
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterRow {
    Participant(ParticipantRow),
    /// "No participants yet"
    Placeholder,
}

/// Rendered card for one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: u32,
    pub roster: Vec<RosterRow>,
}

impl ActivityCard {
    /// Render one catalog entry.
    pub fn from_activity(name: &str, activity: &Activity, ids: &mut RowIds) -> Self {
        let mut roster: Vec<RosterRow> = activity
            .participants
            .iter()
            .map(|email| RosterRow::Participant(ParticipantRow::new(name, email, ids.next_id())))
            .collect();

        if roster.is_empty() {
            roster.push(RosterRow::Placeholder);
        }

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            roster,
        }
    }

    pub fn participants(&self) -> impl Iterator<Item = &ParticipantRow> {
        self.roster.iter().filter_map(|row| match row {
            RosterRow::Participant(p) => Some(p),
            RosterRow::Placeholder => None,
        })
    }

    pub fn has_placeholder(&self) -> bool {
        self.roster.iter().any(|row| matches!(row, RosterRow::Placeholder))
    }

    pub fn row(&self, id: RowId) -> Option<&ParticipantRow> {
        self.participants().find(|p| p.id() == id)
    }

    /// Patch after a confirmed signup: drop the placeholder, append a row and
    /// take one spot (never below zero).
    pub fn add_participant(&mut self, email: &str, ids: &mut RowIds) -> RowId {
        self.roster.retain(|row| !matches!(row, RosterRow::Placeholder));

        let id = ids.next_id();
        self.roster
            .push(RosterRow::Participant(ParticipantRow::new(&self.name, email, id)));
        self.spots_left = self.spots_left.saturating_sub(1);
        id
    }

    /// Patch after a confirmed removal. Returns false if the row is gone.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.roster.len();
        self.roster
            .retain(|row| !matches!(row, RosterRow::Participant(p) if p.id() == id));
        if self.roster.len() == before {
            return false;
        }

        self.spots_left = self.spots_left.saturating_add(1);
        if self.participants().next().is_none() && !self.has_placeholder() {
            self.roster.push(RosterRow::Placeholder);
        }
        true
    }
}

/// Project a catalog into cards, in catalog order.
pub fn project_catalog(catalog: &Catalog, ids: &mut RowIds) -> Vec<ActivityCard> {
    catalog
        .iter()
        .map(|(name, activity)| ActivityCard::from_activity(name, activity, ids))
        .collect()
}

/// Avatar text for an email: first two characters of the local part,
/// upper-cased, or "U" when the local part is empty.
pub fn avatar_initials(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    let initials: String = local.chars().take(2).collect::<String>().to_uppercase();
    if initials.is_empty() {
        "U".to_string()
    } else {
        initials
    }
}
