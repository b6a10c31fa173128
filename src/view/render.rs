// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plain-text rendering of the page for terminal hosts.

use super::{ActivityCard, ListState, MessageKind, PageView, RosterRow, LOADING_TEXT, NO_PARTICIPANTS};
use std::fmt;

impl fmt::Display for ActivityCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Schedule: {}", self.schedule)?;
        writeln!(f, "  Availability: {} spots left", self.spots_left)?;
        writeln!(f, "  Participants:")?;
        for row in &self.roster {
            match row {
                RosterRow::Participant(p) => {
                    writeln!(f, "    [{}] {}  (remove {})", p.initials, p.email, p.id())?
                }
                RosterRow::Placeholder => writeln!(f, "    {}", NO_PARTICIPANTS)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Activities")?;
        writeln!(f, "--------------------")?;
        match self.list() {
            ListState::Loading => writeln!(f, "{}", LOADING_TEXT)?,
            ListState::Failed(text) => writeln!(f, "{}", text)?,
            ListState::Loaded(cards) => {
                for card in cards {
                    writeln!(f, "{}", card)?;
                }
            }
        }

        if !self.options().is_empty() {
            writeln!(f, "Sign up for: {}", self.options().join(" | "))?;
        }

        let message = self.message();
        if message.is_visible() {
            let tag = match message.kind() {
                Some(MessageKind::Error) => "error",
                Some(MessageKind::Success) | None => "ok",
            };
            writeln!(f, "[{}] {}", tag, message.text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Activity, Catalog};
    use crate::view::{MessageKind, PageView, LOAD_FAILED_TEXT};

    #[test]
    fn test_render_loaded_page() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies".to_string(),
                schedule: "Fridays".to_string(),
                max_participants: 10,
                participants: vec!["a@x.com".to_string()],
            },
        );
        catalog.insert(
            "Gym Class".to_string(),
            Activity {
                description: "Physical education".to_string(),
                schedule: "Mondays".to_string(),
                max_participants: 2,
                participants: vec![],
            },
        );

        let mut page = PageView::new();
        page.apply_catalog(&catalog);
        page.message_mut().show("Signed up!", MessageKind::Success);

        let text = page.to_string();
        assert!(text.contains("Availability: 9 spots left"));
        assert!(text.contains("[A] a@x.com  (remove #1)"));
        assert!(text.contains("No participants yet"));
        assert!(text.contains("Sign up for: Chess Club | Gym Class"));
        assert!(text.contains("[ok] Signed up!"));
    }

    #[test]
    fn test_render_failed_page() {
        let mut page = PageView::new();
        assert!(page.to_string().contains("Loading activities..."));

        page.apply_load_failure();
        let text = page.to_string();
        assert!(text.contains(LOAD_FAILED_TEXT));
        assert!(!text.contains("Loading"));
    }
}
