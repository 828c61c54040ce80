// ABOUTME: Session context shared by controller actions: language, theme and the chat session
// ABOUTME: Rebuilds the coach chat whenever the language changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::coach::{CoachChat, CoachClient};
use crate::models::{Language, Theme};

/// Explicit session context
pub struct AppContext {
    language: Language,
    theme: Theme,
    chat: CoachChat,
}

impl AppContext {
    /// Context with a chat session for `language`
    #[must_use]
    pub fn new(client: &CoachClient, language: Language) -> Self {
        Self {
            language,
            theme: Theme::default(),
            chat: client.create_coach_chat(language),
        }
    }

    /// Active language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Active theme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between dark and light
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Current chat session
    #[must_use]
    pub const fn chat(&self) -> &CoachChat {
        &self.chat
    }

    /// Current chat session, mutably
    pub fn chat_mut(&mut self) -> &mut CoachChat {
        &mut self.chat
    }

    /// Switch language and start a new chat session for it
    ///
    /// Returns `false` when `language` is already active.
    pub fn switch_language(&mut self, client: &CoachClient, language: Language) -> bool {
        if language == self.language {
            return false;
        }
        self.language = language;
        self.chat = client.create_coach_chat(language);
        true
    }
}
