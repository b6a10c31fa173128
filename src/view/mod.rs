// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory page view: activity list, selector, signup form and message area.
//!
//! Placeholder handling, spot counting and stale-patch rules are all
//! `PageView`/`ActivityCard` methods and need no network.

pub mod card;
mod render;

pub use card::{
    avatar_initials, project_catalog, ActivityCard, ParticipantRow, RemoveCommand, RosterRow,
    RowId, RowIds, NO_PARTICIPANTS,
};

use crate::models::Catalog;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Content of the activity list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed(String),
}

/// Signup form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub activity: Option<String>,
    pub email: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient message area. Each `show` gets a sequence number so a pending
/// hide can tell whether its message is still the one on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArea {
    text: String,
    kind: Option<MessageKind>,
    hidden: bool,
    seq: u64,
}

impl MessageArea {
    fn new() -> Self {
        Self {
            text: String::new(),
            kind: None,
            hidden: true,
            seq: 0,
        }
    }

    /// Replace the message and make it visible. Returns its sequence number.
    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind) -> u64 {
        self.seq += 1;
        self.text = text.into();
        self.kind = Some(kind);
        self.hidden = false;
        self.seq
    }

    /// Hide the message if it is still the one shown as `seq`.
    pub fn hide_if_current(&mut self, seq: u64) -> bool {
        if self.seq != seq {
            return false;
        }
        self.hidden = true;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

/// The page as currently rendered.
#[derive(Debug, Clone)]
pub struct PageView {
    list: ListState,
    options: Vec<String>,
    form: SignupForm,
    message: MessageArea,
    generation: u64,
    ids: RowIds,
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

impl PageView {
    /// A page showing the loading placeholder.
    pub fn new() -> Self {
        Self {
            list: ListState::Loading,
            options: Vec::new(),
            form: SignupForm::default(),
            message: MessageArea::new(),
            generation: 0,
            ids: RowIds::default(),
        }
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// Rendered cards; empty while loading or after a failed load.
    pub fn cards(&self) -> &[ActivityCard] {
        match &self.list {
            ListState::Loaded(cards) => cards,
            ListState::Loading | ListState::Failed(_) => &[],
        }
    }

    /// The card whose displayed name equals `name`.
    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|c| c.name == name)
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn message(&self) -> &MessageArea {
        &self.message
    }

    /// Bumped every time the list content is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The removal control bound to a rendered row.
    pub fn remove_command(&self, row: RowId) -> Option<RemoveCommand> {
        self.cards()
            .iter()
            .find_map(|card| card.row(row))
            .map(|p| p.remove.clone())
    }

    // ─── Mutation ───────────────────────────────────────────────────────────

    /// Replace the list and the selector with a freshly loaded catalog.
    pub fn apply_catalog(&mut self, catalog: &Catalog) {
        let cards = project_catalog(catalog, &mut self.ids);
        self.options = catalog.keys().cloned().collect();
        self.list = ListState::Loaded(cards);
        self.generation += 1;
    }

    /// Replace the list with the static failure message.
    pub fn apply_load_failure(&mut self) {
        self.list = ListState::Failed(LOAD_FAILED_TEXT.to_string());
        self.generation += 1;
    }

    pub fn fill_form(&mut self, activity: &str, email: &str) {
        self.form.activity = Some(activity.to_string());
        self.form.email = email.to_string();
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    pub fn message_mut(&mut self) -> &mut MessageArea {
        &mut self.message
    }

    /// In-place patch after a confirmed signup.
    ///
    /// If the list was replaced since `generation`, the reload may or may not
    /// have seen this signup: the row is only added when the reloaded card
    /// doesn't already show `email`. Returns the new row, or `None` when the
    /// card is gone or the row was already there.
    pub fn apply_signup(&mut self, generation: u64, activity: &str, email: &str) -> Option<RowId> {
        let reloaded = generation != self.generation;
        let ListState::Loaded(cards) = &mut self.list else {
            return None;
        };
        let card = cards.iter_mut().find(|c| c.name == activity)?;
        if reloaded && card.participants().any(|p| p.email == email) {
            return None;
        }
        Some(card.add_participant(email, &mut self.ids))
    }

    /// In-place patch after a confirmed removal. Returns false if the row is
    /// no longer rendered.
    pub fn apply_removal(&mut self, command: &RemoveCommand) -> bool {
        let ListState::Loaded(cards) = &mut self.list else {
            return false;
        };
        cards
            .iter_mut()
            .find(|c| c.name == command.activity)
            .is_some_and(|card| card.remove_row(command.row))
    }
}
